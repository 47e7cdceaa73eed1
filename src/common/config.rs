//! Конфигурация для sqllex
//!
//! Настройки приложения хранятся в TOML файле и могут быть переопределены
//! переменными окружения с префиксом `SQLLEX_` и аргументами командной строки.

use crate::common::constants::*;
use crate::common::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Формат вывода токенов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Одна строка на токен
    Text,
    /// JSON массив токенов
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::configuration(format!(
                "unknown output format '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Основная конфигурация лексера
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// Строка-разделитель пакетов
    pub batch_separator: String,
    /// Формат вывода
    pub output_format: OutputFormat,
    /// Выводить комментарии
    pub include_comments: bool,
    /// Разбирать пакеты параллельно
    pub parallel_batches: bool,
    /// Уровень логирования
    pub log_level: String,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            batch_separator: DEFAULT_BATCH_SEPARATOR.to_string(),
            output_format: OutputFormat::Text,
            include_comments: true,
            parallel_batches: true,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl LexerConfig {
    /// Загружает конфигурацию из TOML файла
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            Error::configuration(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// Сохраняет конфигурацию в TOML файл
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::configuration(format!("failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Загружает конфигурацию из переменных окружения
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Загружает конфигурацию из произвольного источника переменных
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));
        let mut config = LexerConfig::default();

        if let Some(separator) = var("BATCH_SEPARATOR") {
            config.batch_separator = separator;
        }

        if let Some(format) = var("OUTPUT_FORMAT") {
            config.output_format = format.parse()?;
        }

        if let Some(flag) = var("INCLUDE_COMMENTS") {
            config.include_comments = parse_flag("INCLUDE_COMMENTS", &flag)?;
        }

        if let Some(flag) = var("PARALLEL_BATCHES") {
            config.parallel_batches = parse_flag("PARALLEL_BATCHES", &flag)?;
        }

        if let Some(level) = var("LOG_LEVEL") {
            config.log_level = level;
        }

        Ok(config)
    }

    /// Объединяет конфигурацию с другой: значения второй, отличные от умолчаний, побеждают
    pub fn merge(mut self, other: Self) -> Self {
        let defaults = LexerConfig::default();

        if other.batch_separator != defaults.batch_separator {
            self.batch_separator = other.batch_separator;
        }
        if other.output_format != defaults.output_format {
            self.output_format = other.output_format;
        }
        if other.include_comments != defaults.include_comments {
            self.include_comments = other.include_comments;
        }
        if other.parallel_batches != defaults.parallel_batches {
            self.parallel_batches = other.parallel_batches;
        }
        if other.log_level != defaults.log_level {
            self.log_level = other.log_level;
        }

        self
    }

    /// Валидирует конфигурацию
    pub fn validate(&self) -> Result<()> {
        if self.batch_separator.trim().is_empty() {
            return Err(Error::validation("batch separator cannot be blank"));
        }

        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(Error::validation(format!(
                "unknown log level '{}', expected one of: {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::configuration(format!(
            "{}{} must be a boolean, got '{}'",
            ENV_PREFIX, name, other
        ))),
    }
}
