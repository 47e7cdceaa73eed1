//! Общий токенизатор sqllex
//!
//! Сканирует текст слева направо и выдает плоскую последовательность примитивных
//! токенов: слова, числа, литералы в разделителях, операторы, разделители и комментарии.
//! Ничего не знает о ключевых словах SQL; классы символов, пары разделителей,
//! маркеры комментариев и наборы операторов задаются через [`TokenizerConfig`].
//!
//! Токенизатор никогда не завершается ошибкой: незакрытые комментарии и литералы
//! поглощают остаток входа. К тексту неявно добавляется завершающий перевод строки,
//! поэтому однострочный комментарий всегда заканчивается.

use crate::common::{Error, Result};
use crate::parser::token::{PrimitiveKind, PrimitiveToken};
use std::collections::{HashMap, HashSet};

/// Конфигурация общего токенизатора
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// Символы, с которых может начинаться слово
    pub word_start: HashSet<char>,
    /// Символы, из которых может продолжаться слово
    pub word_chars: HashSet<char>,
    /// Открывающий символ литерала -> закрывающий символ
    pub delimited_constructs: HashMap<char, char>,
    /// Маркер однострочного комментария
    pub line_comment: String,
    /// Открывающий и закрывающий маркеры блочного комментария
    pub block_comments: (String, String),
    /// Односимвольные операторы
    pub operators1char: HashSet<char>,
    /// Двухсимвольные операторы
    pub operators2chars: HashSet<String>,
}

impl TokenizerConfig {
    /// Конфигурация для SQL
    pub fn sql() -> Self {
        let letters = ('a'..='z').chain('A'..='Z');

        let word_start: HashSet<char> = "_@#".chars().chain(letters.clone()).collect();
        let word_chars: HashSet<char> = "_@#$".chars().chain(letters).chain('0'..='9').collect();

        Self {
            word_start,
            word_chars,
            delimited_constructs: [('\'', '\''), ('"', '"'), ('[', ']')].into_iter().collect(),
            line_comment: "--".to_string(),
            block_comments: ("/*".to_string(), "*/".to_string()),
            operators1char: "><=-+*/%&|^~".chars().collect(),
            operators2chars: ["<>", "<=", ">="].iter().map(|op| op.to_string()).collect(),
        }
    }

    /// Валидирует конфигурацию
    ///
    /// Пустой маркер комментария совпадал бы в любой позиции без продвижения курсора.
    pub fn validate(&self) -> Result<()> {
        if self.line_comment.is_empty() {
            return Err(Error::validation("line comment marker cannot be empty"));
        }

        let (opening, closing) = &self.block_comments;
        if opening.is_empty() || closing.is_empty() {
            return Err(Error::validation("block comment markers cannot be empty"));
        }

        if let Some(op) = self
            .operators2chars
            .iter()
            .find(|op| op.chars().count() != 2)
        {
            return Err(Error::validation(format!(
                "two-character operator '{}' must be exactly two characters long",
                op
            )));
        }

        Ok(())
    }
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self::sql()
    }
}

lazy_static::lazy_static! {
    /// Конфигурация SQL, общая для всех вызовов лексера
    pub static ref SQL_TOKENIZER_CONFIG: TokenizerConfig = TokenizerConfig::sql();
}

/// Общий токенизатор
///
/// Ленивая конечная последовательность [`PrimitiveToken`], реализованная как итератор.
/// Повторно не запускается: после `None` новых токенов не будет.
pub struct Tokenizer<'c> {
    /// Исходный текст с завершающим переводом строки
    input: Vec<char>,
    /// Длина исходного текста без завершающего перевода строки
    source_len: usize,
    /// Текущая позиция в тексте
    position: usize,
    /// Конфигурация
    config: &'c TokenizerConfig,
    line_comment: Vec<char>,
    block_opening: Vec<char>,
    block_closing: Vec<char>,
    operators2chars: HashSet<(char, char)>,
}

impl<'c> Tokenizer<'c> {
    /// Создает токенизатор с проверкой конфигурации
    pub fn new(input: &str, config: &'c TokenizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_valid_config(input, config))
    }

    /// Создает токенизатор без проверки конфигурации
    pub(crate) fn with_valid_config(input: &str, config: &'c TokenizerConfig) -> Self {
        let mut chars: Vec<char> = input.chars().collect();
        let source_len = chars.len();
        chars.push('\n');

        log::trace!("Создан токенизатор для {} символов", source_len);

        Self {
            input: chars,
            source_len,
            position: 0,
            config,
            line_comment: config.line_comment.chars().collect(),
            block_opening: config.block_comments.0.chars().collect(),
            block_closing: config.block_comments.1.chars().collect(),
            operators2chars: config
                .operators2chars
                .iter()
                .filter_map(|op| {
                    let mut chars = op.chars();
                    Some((chars.next()?, chars.next()?))
                })
                .collect(),
        }
    }

    /// Возвращает текст токена
    pub fn value_of(&self, token: &PrimitiveToken) -> String {
        self.input[token.start..token.end].iter().collect()
    }
}

impl Tokenizer<'static> {
    /// Создает токенизатор с конфигурацией SQL
    pub fn sql(input: &str) -> Self {
        Self::with_valid_config(input, &SQL_TOKENIZER_CONFIG)
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = PrimitiveToken;

    fn next(&mut self) -> Option<PrimitiveToken> {
        self.skip_whitespace();

        if self.position >= self.input.len() {
            return None;
        }

        let start = self.position;
        let current_char = self.input[start];

        // Порядок проверок задает приоритет правил
        let kind = if self.config.word_start.contains(&current_char) {
            self.read_word()
        } else if self.at_number_start() {
            self.read_number()
        } else if self.matches(&self.line_comment) {
            self.read_line_comment()
        } else if self.matches(&self.block_opening) {
            self.read_block_comment()
        } else if let Some(&closing) = self.config.delimited_constructs.get(&current_char) {
            self.read_delimited_literal(closing)
        } else {
            self.read_operator_or_delimiter()
        };

        // Токен, дошедший до неявного перевода строки, обрезается по концу текста
        let end = self.position.min(self.source_len);
        Some(PrimitiveToken::new(start, end, kind))
    }
}

/// Токенизирует текст с заданной конфигурацией
pub fn tokenize<'c>(text: &str, config: &'c TokenizerConfig) -> Result<Tokenizer<'c>> {
    Tokenizer::new(text, config)
}

// Подключаем методы чтения из отдельного файла
include!("tokenizer_readers.rs");
