//! Константы для sqllex

/// Разделитель пакетов по умолчанию
pub const DEFAULT_BATCH_SEPARATOR: &str = "GO";

/// Уровень логирования по умолчанию
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Допустимые уровни логирования
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Префикс переменных окружения
pub const ENV_PREFIX: &str = "SQLLEX_";

/// Имя конфигурационного файла по умолчанию
pub const DEFAULT_CONFIG_FILE: &str = "sqllex.toml";
