//! sqllex - двухуровневый лексический анализатор T-SQL
//!
//! Общий токенизатор разбивает текст на примитивные токены по настраиваемым классам
//! символов. Лексер диалекта поверх него распознает ключевые слова (включая составные,
//! например `LEFT OUTER JOIN`), идентификаторы через точку, переменные и временные
//! объекты, и присваивает каждому токену семантический подтип.
//!
//! ```
//! use sqllex::parser::{lex, TokenType};
//!
//! let tokens: Vec<_> = lex("select a from serv.db.dbo.t").collect();
//! assert_eq!(tokens[0].value, "SELECT");
//! assert_eq!(tokens[3].value, "serv.db.dbo.t");
//! assert_eq!(tokens[3].token_type, TokenType::Identifier);
//! ```

pub mod cli;
pub mod common;
pub mod parser;

pub use common::error::{Error, Result};

/// Версия библиотеки
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
