//! Сквозные проверки целостности текста

use super::common::*;
use sqllex::parser::{lex, Token, TokenType, Tokenizer};

#[test]
fn test_code_integrity() {
    let uppered = VPIT.to_uppercase();
    assert_eq!(normalize(VPIT), join_primitive_values(&uppered));
}

#[test]
fn test_primitive_gaps_are_whitespace() {
    let chars: Vec<char> = VPIT.chars().collect();
    let mut previous_end = 0;

    for token in Tokenizer::sql(VPIT) {
        assert!(token.start < token.end);
        assert!(token.start >= previous_end);
        assert!(chars[previous_end..token.start].iter().all(|c| c.is_whitespace()));
        previous_end = token.end;
    }

    assert!(previous_end <= chars.len());
    assert!(chars[previous_end..].iter().all(|c| c.is_whitespace()));
}

#[test]
fn test_dialect_tokens_are_ordered() {
    let chars: Vec<char> = VPIT.chars().collect();
    let tokens: Vec<Token> = lex(VPIT).collect();
    assert!(!tokens.is_empty());

    let mut previous_end = 0;
    for token in &tokens {
        assert!(token.start < token.end, "{:?}", token);
        assert!(token.start >= previous_end, "{:?}", token);
        assert!(chars[previous_end..token.start].iter().all(|c| c.is_whitespace()));
        previous_end = token.end;
    }

    assert!(tokens.iter().all(|t| t.token_type != TokenType::Word));
}

#[test]
fn test_lexing_is_idempotent() {
    let first: Vec<Token> = lex(VPIT).collect();
    let joined = first
        .iter()
        .map(|t| t.value.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let second: Vec<Token> = lex(&joined).collect();

    let summary = |tokens: &[Token]| -> Vec<(String, TokenType)> {
        tokens.iter().map(|t| (t.value.clone(), t.token_type)).collect()
    };
    assert_eq!(summary(&first), summary(&second));
}

#[test]
fn test_vpit_highlights() {
    let tokens: Vec<Token> = lex(VPIT).collect();
    let values: Vec<&str> = tokens.iter().map(|t| t.value.as_str()).collect();

    assert!(values.contains(&"LEFT JOIN"));
    assert!(values.contains(&"ORDER BY"));
    assert!(values.contains(&"OVER"));
    assert!(values.contains(&"IS NOT NULL"));
    assert!(values.contains(&"r.division"));

    let temporary = tokens
        .iter()
        .find(|t| t.value == "#r.jc")
        .expect("temporary object");
    assert_eq!(temporary.token_type, TokenType::Identifier);
}
