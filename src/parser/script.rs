//! Разбор скрипта из нескольких пакетов
//!
//! Пакеты разделяются строкой-разделителем (`GO`) и разбираются независимо:
//! у лексера нет общего изменяемого состояния, поэтому пакеты можно
//! обрабатывать параллельно.

use crate::common::utils::split_batches;
use crate::parser::lexer::lex;
use crate::parser::token::Token;
use rayon::prelude::*;
use serde::Serialize;

/// Разобранный пакет скрипта
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LexedBatch {
    /// Текст пакета без разделителя
    pub text: String,
    /// Токены пакета; смещения относительно текста пакета
    pub tokens: Vec<Token>,
}

impl LexedBatch {
    fn new(text: String) -> Self {
        let tokens = lex(&text).collect();
        Self { text, tokens }
    }
}

/// Разбивает скрипт на пакеты и разбирает каждый из них
pub fn lex_script(script: &str, separator: &str, parallel: bool) -> Vec<LexedBatch> {
    let batches = split_batches(script, separator);
    log::debug!(
        "Скрипт разбит на {} пакетов (параллельно: {})",
        batches.len(),
        parallel
    );

    if parallel {
        batches.into_par_iter().map(LexedBatch::new).collect()
    } else {
        batches.into_iter().map(LexedBatch::new).collect()
    }
}
