//! Таблицы ключевых слов T-SQL
//!
//! Статические таблицы только для чтения, строятся один раз при первом обращении.
//! Ключи хранятся в верхнем регистре; составные ключевые слова хранятся под
//! фразой из слов, разделенных одним пробелом.

use crate::parser::token::TokenSubtype;
use std::collections::{HashMap, HashSet};

/// Составное ключевое слово
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompoundKeyword {
    /// Каноническое написание
    pub phrase: &'static str,
    /// Подтип (может отсутствовать)
    pub subtype: Option<TokenSubtype>,
}

/// Ключевые слова без особой категории
const UNKNOWN_KEYWORDS: &[&str] = &[
    "ADD", "AND", "AS", "ASC", "AUTHORIZATION", "BACKUP", "BEGIN", "BETWEEN", "BROWSE", "BULK",
    "BY", "CASCADE", "CHECK", "CHECKPOINT", "CLOSE", "CLUSTERED", "COALESCE", "COLLATE", "COLUMN",
    "COMPUTE", "CONSTRAINT", "CONTAINS", "CONTAINSTABLE", "CONVERT", "CROSS", "CURRENT",
    "CURRENT_DATE", "CURRENT_TIME", "CURRENT_TIMESTAMP", "CURRENT_USER", "CURSOR", "DATABASE",
    "DBCC", "DEALLOCATE", "DEFAULT", "DESC", "DISK", "DISTINCT", "DISTRIBUTED", "DOUBLE", "DUMP",
    "END", "ERRLVL", "ESCAPE", "EXECUTE", "EXIT", "EXTERNAL", "FETCH", "FILE", "FILLFACTOR", "FOR",
    "FOREIGN", "FREETEXT", "FREETEXTTABLE", "FULL", "FUNCTION", "GROUP", "HOLDLOCK", "IDENTITY",
    "IDENTITYCOL", "IDENTITY_INSERT", "INDEX", "INNER", "INTO", "IS", "KEY", "KILL", "LEFT", "LIKE",
    "LINENO", "LOAD", "NATIONAL", "NOCHECK", "NONCLUSTERED", "NOT", "NULL", "NULLIF", "OF", "OFF",
    "OFFSETS", "ON", "OPEN", "OPENDATASOURCE", "OPENQUERY", "OPENROWSET", "OPENXML", "OR", "ORDER",
    "OUTER", "OVER", "PERCENT", "PIVOT", "PLAN", "PRECISION", "PRIMARY", "PROC", "PROCEDURE",
    "PUBLIC", "RAISERROR", "READ", "READTEXT", "RECONFIGURE", "REFERENCES", "REPLICATION",
    "RESTORE", "RESTRICT", "REVERT", "RIGHT", "ROWCOUNT", "ROWGUIDCOL", "RULE", "SAVE", "SCHEMA",
    "SECURITYAUDIT", "SEMANTICKEYPHRASETABLE", "SEMANTICSIMILARITYDETAILSTABLE",
    "SEMANTICSIMILARITYTABLE", "SESSION_USER", "SETUSER", "SHUTDOWN", "STATISTICS", "SYSTEM_USER",
    "TABLE", "TABLESAMPLE", "TEXTSIZE", "THEN", "TO", "TRAN", "TRANSACTION", "TRIGGER",
    "TRY_CONVERT", "TSEQUAL", "UNIQUE", "UNPIVOT", "UPDATETEXT", "USER", "VALUES", "VARYING", "VIEW",
    "WAITFOR", "WHEN", "WRITETEXT",
];

/// Ключевые слова, с которых может начинаться инструкция
const STARTER_KEYWORDS: &[&str] = &[
    "SELECT", "UPDATE", "INSERT", "DELETE", "MERGE", "CREATE", "DROP", "TRUNCATE", "ALTER", "EXEC",
    "EXECUTE", "DECLARE", "SET", "COMMIT", "ROLLBACK", "USE", "GRANT", "DENY", "REVOKE", "SAVE",
    "BACKUP", "RESTORE", "PRINT", "GOTO", "RETURN", "IF", "WHILE",
];

/// Составные ключевые слова, с которых может начинаться инструкция
const STARTER_COMPOUNDS: &[&str] = &[
    "BEGIN TRAN",
    "BEGIN TRANSACTION",
    "COMMIT TRAN",
    "COMMIT TRANSACTION",
];

lazy_static::lazy_static! {
    /// Одиночные ключевые слова и их подтипы
    pub static ref KEYWORDS: HashMap<&'static str, TokenSubtype> = keyword_map();

    /// Составные ключевые слова из двух слов
    pub static ref COMPOUND_KEYWORDS_2: HashMap<&'static str, CompoundKeyword> = compound_map(&[
        ("INNER JOIN", Some(TokenSubtype::RelationalOperators)),
        ("CROSS JOIN", Some(TokenSubtype::RelationalOperators)),
        ("FULL JOIN", Some(TokenSubtype::RelationalOperators)),
        ("LEFT JOIN", Some(TokenSubtype::RelationalOperators)),
        ("RIGHT JOIN", Some(TokenSubtype::RelationalOperators)),
        ("CROSS APPLY", None),
        ("OUTER APPLY", None),
        ("GROUP BY", Some(TokenSubtype::QueryClauses)),
        ("ORDER BY", Some(TokenSubtype::QueryClauses)),
        ("WITHIN GROUP", None),
        ("BEGIN TRAN", None),
        ("BEGIN TRANSACTION", Some(TokenSubtype::Tcl)),
        ("COMMIT TRAN", None),
        ("COMMIT TRANSACTION", None),
        ("ROLLBACK TRAN", None),
        ("ROLLBACK TRANSACTION", None),
        ("BEGIN TRY", None),
        ("END TRY", None),
        ("BEGIN CATCH", None),
        ("END CATCH", None),
        ("ADD CONSTRAINT", None),
        ("ADD COLUMN", None),
        ("IS NULL", None),
    ]);

    /// Составные ключевые слова из трех слов
    pub static ref COMPOUND_KEYWORDS_3: HashMap<&'static str, CompoundKeyword> = compound_map(&[
        ("LEFT OUTER JOIN", Some(TokenSubtype::RelationalOperators)),
        ("RIGHT OUTER JOIN", Some(TokenSubtype::RelationalOperators)),
        ("FULL OUTER JOIN", Some(TokenSubtype::RelationalOperators)),
        ("IS NOT NULL", None),
    ]);

    static ref STARTERS: HashSet<&'static str> = STARTER_KEYWORDS.iter().copied().collect();
    static ref STARTER_PHRASES: HashSet<&'static str> = STARTER_COMPOUNDS.iter().copied().collect();
}

/// Карта одиночных ключевых слов
fn keyword_map() -> HashMap<&'static str, TokenSubtype> {
    let mut map: HashMap<&'static str, TokenSubtype> = UNKNOWN_KEYWORDS
        .iter()
        .map(|keyword| (*keyword, TokenSubtype::Unknown))
        .collect();

    // Предложения запроса
    map.insert("SELECT", TokenSubtype::QueryClauses);
    map.insert("FROM", TokenSubtype::QueryClauses);
    map.insert("WHERE", TokenSubtype::QueryClauses);
    map.insert("HAVING", TokenSubtype::QueryClauses);
    map.insert("TOP", TokenSubtype::QueryClauses);

    // Операции над множествами
    map.insert("UNION", TokenSubtype::SetOperators);
    map.insert("INTERSECT", TokenSubtype::SetOperators);
    map.insert("EXCEPT", TokenSubtype::SetOperators);

    // Предикаты над множествами
    map.insert("IN", TokenSubtype::SetPredicateOperators);
    map.insert("EXISTS", TokenSubtype::SetPredicateOperators);
    map.insert("ALL", TokenSubtype::SetPredicateOperators);
    map.insert("ANY", TokenSubtype::SetPredicateOperators);
    map.insert("SOME", TokenSubtype::SetPredicateOperators);

    // JOIN
    map.insert("JOIN", TokenSubtype::RelationalOperators);

    // DDL
    map.insert("CREATE", TokenSubtype::Ddl);
    map.insert("ALTER", TokenSubtype::Ddl);
    map.insert("DROP", TokenSubtype::Ddl);
    map.insert("TRUNCATE", TokenSubtype::Ddl);

    // DML
    map.insert("INSERT", TokenSubtype::Dml);
    map.insert("UPDATE", TokenSubtype::Dml);
    map.insert("DELETE", TokenSubtype::Dml);
    map.insert("MERGE", TokenSubtype::Dml);

    // Транзакции
    map.insert("COMMIT", TokenSubtype::Tcl);
    map.insert("ROLLBACK", TokenSubtype::Tcl);

    // Права доступа
    map.insert("GRANT", TokenSubtype::Dcl);
    map.insert("DENY", TokenSubtype::Dcl);
    map.insert("REVOKE", TokenSubtype::Dcl);

    // Управление потоком
    map.insert("IF", TokenSubtype::FlowControl);
    map.insert("ELSE", TokenSubtype::FlowControl);
    map.insert("WHILE", TokenSubtype::FlowControl);
    map.insert("BREAK", TokenSubtype::FlowControl);
    map.insert("CONTINUE", TokenSubtype::FlowControl);
    map.insert("GOTO", TokenSubtype::FlowControl);
    map.insert("RETURN", TokenSubtype::FlowControl);
    map.insert("CASE", TokenSubtype::FlowControl);

    // Прочие
    map.insert("SET", TokenSubtype::OtherKeywords);
    map.insert("DECLARE", TokenSubtype::OtherKeywords);
    map.insert("EXEC", TokenSubtype::OtherKeywords);
    map.insert("USE", TokenSubtype::OtherKeywords);
    map.insert("WITH", TokenSubtype::OtherKeywords);
    map.insert("OPTION", TokenSubtype::OtherKeywords);
    map.insert("PRINT", TokenSubtype::OtherKeywords);

    map
}

fn compound_map(
    entries: &[(&'static str, Option<TokenSubtype>)],
) -> HashMap<&'static str, CompoundKeyword> {
    entries
        .iter()
        .map(|&(phrase, subtype)| (phrase, CompoundKeyword { phrase, subtype }))
        .collect()
}

/// Ищет одиночное ключевое слово (без учета регистра)
pub fn lookup_keyword(word: &str) -> Option<TokenSubtype> {
    KEYWORDS.get(word.to_uppercase().as_str()).copied()
}

/// Ищет составное ключевое слово по последовательности слов (без учета регистра)
pub fn lookup_compound(words: &[&str]) -> Option<CompoundKeyword> {
    let table: &HashMap<&'static str, CompoundKeyword> = match words.len() {
        2 => &*COMPOUND_KEYWORDS_2,
        3 => &*COMPOUND_KEYWORDS_3,
        _ => return None,
    };

    let key = words
        .iter()
        .map(|word| word.to_uppercase())
        .collect::<Vec<_>>()
        .join(" ");

    table.get(key.as_str()).copied()
}

/// Проверяет, начинает ли одиночное ключевое слово инструкцию
pub fn is_starter_keyword(keyword: &str) -> bool {
    STARTERS.contains(keyword)
}

/// Проверяет, начинает ли составное ключевое слово инструкцию
pub fn is_starter_compound(phrase: &str) -> bool {
    STARTER_PHRASES.contains(phrase)
}
