//! Лексер T-SQL для sqllex
//!
//! Два уровня: общий токенизатор ([`tokenizer`]) и лексер диалекта ([`lexer`]),
//! который разрешает ключевые слова и идентификаторы.

pub mod keywords;
pub mod lexer;
pub mod script;
pub mod token;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Переэкспортируем основные типы
pub use lexer::{lex, Lexer};
pub use script::{lex_script, LexedBatch};
pub use token::{Position, PrimitiveKind, PrimitiveToken, Span, Token, TokenSubtype, TokenType};
pub use tokenizer::{tokenize, Tokenizer, TokenizerConfig};
