//! Тесты для общего токенизатора sqllex

use crate::common::Error;
use crate::parser::{tokenize, PrimitiveKind, PrimitiveToken, Tokenizer, TokenizerConfig};

fn scan(sql: &str) -> Vec<PrimitiveToken> {
    Tokenizer::sql(sql).collect()
}

fn values(sql: &str) -> Vec<String> {
    scan(sql).iter().map(|t| t.value(sql)).collect()
}

fn values_with_flag(sql: &str, kind: PrimitiveKind) -> Vec<(String, bool)> {
    scan(sql)
        .iter()
        .map(|t| (t.value(sql), t.kind == kind))
        .collect()
}

fn owned(pairs: &[(&str, bool)]) -> Vec<(String, bool)> {
    pairs.iter().map(|(v, f)| (v.to_string(), *f)).collect()
}

#[test]
fn test_numbers() {
    let sql = "12.123.456e+489.12esdf";
    assert_eq!(
        values_with_flag(sql, PrimitiveKind::Number),
        owned(&[
            ("12.123", true),
            (".456e+489", true),
            (".12e", true),
            ("sdf", false),
        ])
    );
}

#[test]
fn test_is_number() {
    let flags = |sql: &str| -> Vec<bool> {
        scan(sql)
            .iter()
            .map(|t| t.kind == PrimitiveKind::Number)
            .collect()
    };

    assert!(!flags("as campo .ae-a -taba").contains(&true));
    assert_eq!(flags("2 12.23e-49 a7.8 7.8"), vec![true, true, false, true, true]);
    assert_eq!(flags("12.23e-49 .8"), vec![true, true]);
}

#[test]
fn test_exponent_without_digits() {
    assert_eq!(values("1e"), vec!["1e"]);
    assert_eq!(values("1E+"), vec!["1E+"]);
    assert_eq!(values("3else"), vec!["3e", "lse"]);
    assert_eq!(values("12."), vec!["12."]);
}

#[test]
fn test_no_blanks() {
    let sql = " SELECT\n\n\t\t*\t\t  from  \n\t\t    \n\t\t";
    assert_eq!(values(sql), vec!["SELECT", "*", "from"]);
}

#[test]
fn test_comments() {
    let sql = "select --line comment\n\t\t*/*\n\t\tblock comment\n\t\t*/from \n\t\t";
    let tokens = scan(sql);

    let code: Vec<String> = tokens
        .iter()
        .filter(|t| !t.kind.is_comment())
        .map(|t| t.value(sql))
        .collect();
    assert_eq!(code, vec!["select", "*", "from"]);
    assert_eq!(tokens[1].value(sql), "--line comment\n");
    assert_eq!(tokens[1].kind, PrimitiveKind::LineComment);
    assert_eq!(tokens[3].value(sql), "/*\n\t\tblock comment\n\t\t*/");
    assert_eq!(tokens[3].kind, PrimitiveKind::BlockComment);
}

#[test]
fn test_nested_block_comments() {
    let sql = "Nested/*this's a line comment\n\t\tsimple-- this/*, another \n\t\tone*/\n\t\texample */blockcomment\n\t\t";
    let tokens = scan(sql);

    assert_eq!(
        tokens[1].value(sql),
        "/*this's a line comment\n\t\tsimple-- this/*, another \n\t\tone*/\n\t\texample */"
    );
    assert_eq!(tokens[2].value(sql), "blockcomment");
}

#[test]
fn test_unterminated_comments_run_to_end() {
    let sql = "a /* never closed /* twice */";
    let tokens = scan(sql);
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1].kind, PrimitiveKind::BlockComment);
    assert_eq!(tokens[1].end, sql.chars().count());

    let sql = "a -- no newline";
    let tokens = scan(sql);
    assert_eq!(tokens[1].kind, PrimitiveKind::LineComment);
    assert_eq!(tokens[1].value(sql), "-- no newline");
    assert_eq!(tokens[1].end, sql.chars().count());
}

#[test]
fn test_delimited_construct_0() {
    let sql = "'u'a";
    assert_eq!(
        values_with_flag(sql, PrimitiveKind::DelimitedLiteral),
        owned(&[("'u'", true), ("a", false)])
    );
}

#[test]
fn test_delimited_construct_1() {
    let sql = "'uno''dos''tres'";
    assert_eq!(
        values_with_flag(sql, PrimitiveKind::DelimitedLiteral),
        owned(&[("'uno''dos''tres'", true)])
    );

    let sql = "'uno''dos' 'tres'";
    assert_eq!(
        values_with_flag(sql, PrimitiveKind::DelimitedLiteral),
        owned(&[("'uno''dos'", true), ("'tres'", true)])
    );
}

#[test]
fn test_delimited_construct_2() {
    let sql = "['uno']]dos]' [\n'']'tres";
    assert_eq!(
        values_with_flag(sql, PrimitiveKind::DelimitedLiteral),
        owned(&[("['uno']]dos]", true), ("' [\n'']'", true), ("tres", false)])
    );
}

#[test]
fn test_unterminated_literal_runs_to_end() {
    let sql = "select 'abc";
    let tokens = scan(sql);
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1].kind, PrimitiveKind::DelimitedLiteral);
    assert_eq!(tokens[1].value(sql), "'abc");
}

#[test]
fn test_types() {
    let kinds = |sql: &str| -> Vec<PrimitiveKind> { scan(sql).iter().map(|t| t.kind).collect() };

    assert_eq!(
        kinds("identi 12.3e-45 [delimited literal] >= < ,"),
        vec![
            PrimitiveKind::Word,
            PrimitiveKind::Number,
            PrimitiveKind::DelimitedLiteral,
            PrimitiveKind::Operator,
            PrimitiveKind::Operator,
            PrimitiveKind::Delimiter,
        ]
    );
    assert_eq!(
        kinds("/*block comment*/ --line comment"),
        vec![PrimitiveKind::BlockComment, PrimitiveKind::LineComment]
    );
}

#[test]
fn test_operators() {
    assert_eq!(values("a<>b<=c>=d<e"), vec!["a", "<>", "b", "<=", "c", ">=", "d", "<", "e"]);
    assert_eq!(values("!="), vec!["!", "="]);
}

#[test]
fn test_delimiters() {
    assert_eq!(values("1,"), vec!["1", ","]);

    let sql = "(1,'2025-09-06', 2.56e41, 7)";
    assert_eq!(
        values_with_flag(sql, PrimitiveKind::Number),
        owned(&[
            ("(", false),
            ("1", true),
            (",", false),
            ("'2025-09-06'", false),
            (",", false),
            ("2.56e41", true),
            (",", false),
            ("7", true),
            (")", false),
        ])
    );
}

#[test]
fn test_words_with_sql_characters() {
    assert_eq!(values("@var #tmp ##global _x a$b"), vec!["@var", "#tmp", "##global", "_x", "a$b"]);
    // $ не может начинать слово
    assert_eq!(values("$a"), vec!["$", "a"]);
}

#[test]
fn test_offsets_are_characters() {
    let sql = "'ñandú' x";
    let tokens = scan(sql);
    assert_eq!(tokens[0].start, 0);
    assert_eq!(tokens[0].end, 7);
    assert_eq!(tokens[1].start, 8);
    assert_eq!(tokens[1].value(sql), "x");
}

#[test]
fn test_tokens_are_ordered_and_gaps_are_whitespace() {
    let sql = "select a.b, [c d]--x\n from t where e >= 1.5e3 /* z */ order by 1";
    let chars: Vec<char> = sql.chars().collect();
    let tokens = scan(sql);

    let mut previous_end = 0;
    for token in &tokens {
        assert!(token.start < token.end);
        assert!(token.start >= previous_end);
        assert!(chars[previous_end..token.start].iter().all(|c| c.is_whitespace()));
        previous_end = token.end;
    }
    assert!(chars[previous_end..].iter().all(|c| c.is_whitespace()));
}

#[test]
fn test_value_of_matches_value() {
    let sql = "select [x]";
    let mut tokenizer = Tokenizer::sql(sql);
    let first = tokenizer.next().unwrap();
    let second = tokenizer.next().unwrap();

    assert_eq!(tokenizer.value_of(&first), "select");
    assert_eq!(tokenizer.value_of(&second), second.value(sql));
    assert!(tokenizer.next().is_none());
    assert!(tokenizer.next().is_none());
}

#[test]
fn test_position() {
    let sql = "select\n  a,\n\tb";
    let tokens = scan(sql);

    let position = tokens[1].position(sql);
    assert_eq!((position.line, position.column), (2, 3));

    let position = tokens[3].position(sql);
    assert_eq!((position.line, position.column), (3, 2));
    assert_eq!(position.to_string(), "3:2");
}

#[test]
fn test_custom_config() {
    let mut config = TokenizerConfig::sql();
    config.line_comment = "#".to_string();
    config.word_start.remove(&'#');
    config.delimited_constructs.insert('`', '`');
    config.block_comments = ("{".to_string(), "}".to_string());

    let sql = "a `b``c` {x {y} z} # rest\nd";
    let tokens: Vec<_> = tokenize(sql, &config).unwrap().collect();
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(
        kinds,
        vec![
            PrimitiveKind::Word,
            PrimitiveKind::DelimitedLiteral,
            PrimitiveKind::BlockComment,
            PrimitiveKind::LineComment,
            PrimitiveKind::Word,
        ]
    );
    assert_eq!(tokens[1].value(sql), "`b``c`");
    assert_eq!(tokens[2].value(sql), "{x {y} z}");
}

#[test]
fn test_invalid_config() {
    let mut config = TokenizerConfig::sql();
    config.line_comment = String::new();
    assert!(matches!(tokenize("a", &config), Err(Error::Validation { .. })));

    let mut config = TokenizerConfig::sql();
    config.block_comments.1 = String::new();
    assert!(tokenize("a", &config).is_err());

    let mut config = TokenizerConfig::sql();
    config.operators2chars.insert("<=>".to_string());
    assert!(tokenize("a", &config).is_err());

    assert!(tokenize("a", &TokenizerConfig::default()).is_ok());
}
