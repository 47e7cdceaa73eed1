//! Тесты разбора скриптов из нескольких пакетов

use super::common::*;
use sqllex::parser::{lex, lex_script, Token};

#[test]
fn test_parallel_matches_sequential() {
    let script = three_batch_script();

    let parallel = lex_script(&script, "GO", true);
    let sequential = lex_script(&script, "GO", false);

    assert_eq!(parallel.len(), 3);
    assert_eq!(parallel, sequential);
}

#[test]
fn test_batches_are_lexed_independently() {
    let script = three_batch_script();
    let batches = lex_script(&script, "GO", true);

    let middle: Vec<&str> = batches[1].tokens.iter().map(|t| t.value.as_str()).collect();
    assert_eq!(middle, vec!["SELECT", "1"]);

    let whole: Vec<Token> = lex(VPIT.trim()).collect();
    assert_eq!(batches[0].tokens, whole);
    assert_eq!(batches[2].tokens, whole);
}

#[test]
fn test_batch_offsets_are_local() {
    let script = three_batch_script();

    for batch in lex_script(&script, "GO", false) {
        let length = batch.text.chars().count();
        for token in &batch.tokens {
            assert!(token.end <= length);
        }
    }
}

#[test]
fn test_batches_serialize_to_json() {
    let batches = lex_script("select 1\nGO\nprint @x", "GO", false);
    let json = serde_json::to_value(&batches).unwrap();

    assert_eq!(json[0]["text"], "select 1");
    assert_eq!(json[1]["tokens"][1]["value"], "@x");
    assert_eq!(json[1]["tokens"][1]["subtype"], "VARIABLE");
}
