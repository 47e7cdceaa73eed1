//! Токены для лексера sqllex
//!
//! Определяет два уровня токенов: примитивные токены общего токенизатора
//! (слово, число, литерал, оператор, разделитель, комментарии) и токены диалекта,
//! в которых слова уже разрешены в ключевые слова и идентификаторы.

use serde::Serialize;
use std::fmt;

/// Позиция в исходном тексте
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self { line, column, offset }
    }

    pub fn start() -> Self {
        Self::new(1, 1, 0)
    }

    /// Вычисляет строку и колонку (обе с 1) для абсолютного смещения в символах
    pub fn from_offset(text: &str, offset: usize) -> Self {
        let mut line = 1;
        let mut column = 1;

        for ch in text.chars().take(offset) {
            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }

        Self::new(line, column, offset)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Полуоткрытый диапазон `[start, end)` в символах исходного текста
pub trait Span {
    fn start(&self) -> usize;
    fn end(&self) -> usize;

    /// Проверяет, покрывает ли диапазон заданное смещение
    fn contains(&self, offset: usize) -> bool {
        self.start() <= offset && offset < self.end()
    }
}

/// Виды примитивных токенов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    Word,
    Number,
    DelimitedLiteral,
    Operator,
    Delimiter,
    LineComment,
    BlockComment,
}

impl PrimitiveKind {
    /// Проверяет, является ли токен комментарием
    pub fn is_comment(&self) -> bool {
        matches!(self, PrimitiveKind::LineComment | PrimitiveKind::BlockComment)
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PrimitiveKind::Word => "WORD",
            PrimitiveKind::Number => "NUMBER",
            PrimitiveKind::DelimitedLiteral => "DELIMITED_LITERAL",
            PrimitiveKind::Operator => "OPERATOR",
            PrimitiveKind::Delimiter => "DELIMITER",
            PrimitiveKind::LineComment => "LINE_COMMENT",
            PrimitiveKind::BlockComment => "BLOCK_COMMENT",
        };
        write!(f, "{}", name)
    }
}

/// Примитивный токен: только диапазон и вид, без значения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrimitiveToken {
    pub start: usize,
    pub end: usize,
    pub kind: PrimitiveKind,
}

impl PrimitiveToken {
    pub fn new(start: usize, end: usize, kind: PrimitiveKind) -> Self {
        Self { start, end, kind }
    }

    /// Возвращает текст токена из исходной строки
    pub fn value(&self, text: &str) -> String {
        text.chars().skip(self.start).take(self.end - self.start).collect()
    }

    /// Возвращает строку и колонку начала токена
    pub fn position(&self, text: &str) -> Position {
        Position::from_offset(text, self.start)
    }
}

impl Span for PrimitiveToken {
    fn start(&self) -> usize {
        self.start
    }

    fn end(&self) -> usize {
        self.end
    }
}

/// Типы токенов диалекта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    // Унаследованные от токенизатора
    Word,
    Number,
    DelimitedLiteral,
    Operator,
    Delimiter,
    LineComment,
    BlockComment,

    // Разрешенные лексером
    Keyword,
    Identifier,
}

impl TokenType {
    /// Проверяет, является ли токен комментарием
    pub fn is_comment(&self) -> bool {
        matches!(self, TokenType::LineComment | TokenType::BlockComment)
    }
}

impl From<PrimitiveKind> for TokenType {
    fn from(kind: PrimitiveKind) -> Self {
        match kind {
            PrimitiveKind::Word => TokenType::Word,
            PrimitiveKind::Number => TokenType::Number,
            PrimitiveKind::DelimitedLiteral => TokenType::DelimitedLiteral,
            PrimitiveKind::Operator => TokenType::Operator,
            PrimitiveKind::Delimiter => TokenType::Delimiter,
            PrimitiveKind::LineComment => TokenType::LineComment,
            PrimitiveKind::BlockComment => TokenType::BlockComment,
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenType::Word => "WORD",
            TokenType::Number => "NUMBER",
            TokenType::DelimitedLiteral => "DELIMITED_LITERAL",
            TokenType::Operator => "OPERATOR",
            TokenType::Delimiter => "DELIMITER",
            TokenType::LineComment => "LINE_COMMENT",
            TokenType::BlockComment => "BLOCK_COMMENT",
            TokenType::Keyword => "KEYWORD",
            TokenType::Identifier => "IDENTIFIER",
        };
        write!(f, "{}", name)
    }
}

/// Семантическая категория ключевого слова или идентификатора
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenSubtype {
    Unknown,
    QueryClauses,
    SetOperators,
    RelationalOperators,
    SetPredicateOperators,
    /// Data Definition Language
    Ddl,
    /// Data Manipulation Language
    Dml,
    /// Transaction Control Language
    Tcl,
    /// Data Control Language
    Dcl,
    FlowControl,
    OtherKeywords,
    /// Переменная (`@name`)
    Variable,
    /// Временный объект (`#name`)
    TemporaryObject,
}

impl fmt::Display for TokenSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenSubtype::Unknown => "UNKNOWN",
            TokenSubtype::QueryClauses => "QUERY_CLAUSES",
            TokenSubtype::SetOperators => "SET_OPERATORS",
            TokenSubtype::RelationalOperators => "RELATIONAL_OPERATORS",
            TokenSubtype::SetPredicateOperators => "SET_PREDICATE_OPERATORS",
            TokenSubtype::Ddl => "DDL",
            TokenSubtype::Dml => "DML",
            TokenSubtype::Tcl => "TCL",
            TokenSubtype::Dcl => "DCL",
            TokenSubtype::FlowControl => "FLOW_CONTROL",
            TokenSubtype::OtherKeywords => "OTHER_KEYWORDS",
            TokenSubtype::Variable => "VARIABLE",
            TokenSubtype::TemporaryObject => "TEMPORARY_OBJECT",
        };
        write!(f, "{}", name)
    }
}

/// Токен диалекта с разрешенным типом, подтипом и значением
///
/// `subtype` задается только для ключевых слов и идентификаторов,
/// `is_starter_keyword` только для ключевых слов.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub start: usize,
    pub end: usize,
    #[serde(rename = "type")]
    pub token_type: TokenType,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtype: Option<TokenSubtype>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_starter_keyword: Option<bool>,
}

impl Token {
    /// Создает токен диалекта из примитивного токена и его текста
    pub fn new(primitive: PrimitiveToken, value: String) -> Self {
        Self {
            start: primitive.start,
            end: primitive.end,
            token_type: primitive.kind.into(),
            value,
            subtype: None,
            is_starter_keyword: None,
        }
    }

    pub fn is_keyword(&self) -> bool {
        self.token_type == TokenType::Keyword
    }

    pub fn is_identifier(&self) -> bool {
        self.token_type == TokenType::Identifier
    }

    /// Проверяет, является ли токен одиночной точкой
    pub fn is_dot(&self) -> bool {
        self.value == "."
    }

    /// Возвращает строку и колонку начала токена
    pub fn position(&self, text: &str) -> Position {
        Position::from_offset(text, self.start)
    }
}

impl Span for Token {
    fn start(&self) -> usize {
        self.start
    }

    fn end(&self) -> usize {
        self.end
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
