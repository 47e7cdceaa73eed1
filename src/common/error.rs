//! Обработка ошибок для sqllex
//!
//! Сканирование текста никогда не завершается ошибкой: незакрытые комментарии и литералы
//! просто поглощают остаток входа. Ошибки возникают только на границах системы:
//! конфигурация, ввод-вывод и сериализация результата.

use thiserror::Error;

/// Основной тип ошибки для sqllex
#[derive(Error, Debug)]
pub enum Error {
    /// Ошибка I/O операций
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка сериализации/десериализации
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Ошибка конфигурации
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Ошибка валидации
    #[error("Validation error: {message}")]
    Validation { message: String },
}

/// Тип результата для sqllex
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Создает ошибку конфигурации
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Создает ошибку валидации
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
