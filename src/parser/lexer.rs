//! Лексический анализатор T-SQL для sqllex
//!
//! Работает поверх общего токенизатора с конфигурацией SQL. Слова и одиночные точки
//! накапливаются в буфере; любой другой токен (и конец входа) вызывает сброс буфера.
//! При сбросе сначала разрешаются составные и одиночные ключевые слова, затем
//! оставшиеся слова становятся идентификаторами, а цепочки через точку сливаются
//! в один идентификатор (`serv.db.dbo.table1`).

use crate::parser::keywords::{
    is_starter_compound, is_starter_keyword, lookup_compound, lookup_keyword,
};
use crate::parser::token::{PrimitiveKind, Token, TokenSubtype, TokenType};
use crate::parser::tokenizer::Tokenizer;
use std::collections::VecDeque;

/// Максимальное число слов в составном ключевом слове
const MAX_COMPOUND_WORDS: usize = 3;

/// Лексический анализатор T-SQL
///
/// Ленивая последовательность [`Token`]. Один вызов `next` может прочитать
/// несколько примитивных токенов, пока буфер не будет сброшен.
pub struct Lexer {
    /// Общий токенизатор
    tokenizer: Tokenizer<'static>,
    /// Буфер слов и точек, ожидающих сброса
    buffer: Vec<Token>,
    /// Разрешенные токены, готовые к выдаче
    ready: VecDeque<Token>,
    /// Токенизатор исчерпан
    finished: bool,
}

impl Lexer {
    /// Создает новый лексический анализатор
    pub fn new(input: &str) -> Self {
        Self {
            tokenizer: Tokenizer::sql(input),
            buffer: Vec::new(),
            ready: VecDeque::new(),
            finished: false,
        }
    }

    /// Сбрасывает буфер в очередь готовых токенов
    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }

        let buffered = std::mem::take(&mut self.buffer);
        log::trace!("Сброс буфера: {} токенов", buffered.len());

        let resolved = resolve_keywords(buffered);
        self.ready.extend(merge_identifiers(resolved));
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(token) = self.ready.pop_front() {
                return Some(token);
            }

            if self.finished {
                return None;
            }

            match self.tokenizer.next() {
                Some(primitive) => {
                    let token = Token::new(primitive, self.tokenizer.value_of(&primitive));

                    let is_dot = primitive.kind == PrimitiveKind::Delimiter && token.is_dot();
                    if primitive.kind == PrimitiveKind::Word || is_dot {
                        self.buffer.push(token);
                        continue;
                    }

                    self.flush();
                    self.ready.push_back(token);
                }
                None => {
                    self.finished = true;
                    self.flush();
                }
            }
        }
    }
}

/// Разбирает SQL текст на токены диалекта
pub fn lex(sql: &str) -> Lexer {
    Lexer::new(sql)
}

/// Первый проход: составные и одиночные ключевые слова
///
/// Жадный поиск слева направо: сначала три слова, затем два, затем одно.
fn resolve_keywords(buffer: Vec<Token>) -> Vec<Token> {
    let mut resolved = Vec::with_capacity(buffer.len());
    let mut i = 0;

    'scan: while i < buffer.len() {
        for width in (2..=MAX_COMPOUND_WORDS).rev() {
            if let Some(compound) = match_compound(&buffer[i..], width) {
                resolved.push(compound);
                i += width;
                continue 'scan;
            }
        }

        let mut token = buffer[i].clone();
        if let Some(subtype) = lookup_keyword(&token.value) {
            token.value = token.value.to_uppercase();
            token.token_type = TokenType::Keyword;
            token.subtype = Some(subtype);
            token.is_starter_keyword = Some(is_starter_keyword(&token.value));
        }
        resolved.push(token);
        i += 1;
    }

    resolved
}

/// Пытается собрать составное ключевое слово из первых `width` записей
fn match_compound(window: &[Token], width: usize) -> Option<Token> {
    if window.len() < width {
        return None;
    }

    let words: Vec<&str> = window[..width].iter().map(|t| t.value.as_str()).collect();
    let compound = lookup_compound(&words)?;

    Some(Token {
        start: window[0].start,
        end: window[width - 1].end,
        token_type: TokenType::Keyword,
        value: compound.phrase.to_string(),
        subtype: compound.subtype,
        is_starter_keyword: Some(is_starter_compound(compound.phrase)),
    })
}

/// Второй проход: идентификаторы и цепочки через точку
///
/// Точка, за которой следует ключевое слово, останавливает слияние.
fn merge_identifiers(resolved: Vec<Token>) -> Vec<Token> {
    let mut pending: VecDeque<Token> = resolved.into();
    let mut merged = Vec::with_capacity(pending.len());

    while let Some(mut token) = pending.pop_front() {
        if token.token_type == TokenType::Word {
            token.token_type = TokenType::Identifier;
            token.subtype = identifier_subtype(&token.value);

            while pending.len() >= 2 && pending[0].is_dot() && !pending[1].is_keyword() {
                if let (Some(_dot), Some(part)) = (pending.pop_front(), pending.pop_front()) {
                    token.value.push('.');
                    token.value.push_str(&part.value);
                    token.end = part.end;
                }
            }
        }

        merged.push(token);
    }

    merged
}

/// Подтип идентификатора по первому символу
fn identifier_subtype(value: &str) -> Option<TokenSubtype> {
    match value.chars().next() {
        Some('@') => Some(TokenSubtype::Variable),
        Some('#') => Some(TokenSubtype::TemporaryObject),
        _ => None,
    }
}
