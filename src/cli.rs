//! CLI интерфейс для sqllex
//!
//! Предоставляет командную строку для токенизации, лексического разбора
//! и разбиения скриптов на пакеты.

use crate::common::{find_token_at, split_batches, LexerConfig, OutputFormat, DEFAULT_CONFIG_FILE};
use crate::parser::keywords::{
    is_starter_compound, is_starter_keyword, COMPOUND_KEYWORDS_2, COMPOUND_KEYWORDS_3, KEYWORDS,
};
use crate::parser::{lex, lex_script, Token, Tokenizer};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};

/// sqllex - двухуровневый лексер T-SQL
#[derive(Parser)]
#[command(name = "sqllex")]
#[command(about = "sqllex - a two-layer T-SQL tokenizer and lexer")]
#[command(version)]
pub struct Cli {
    /// Конфигурационный файл
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Уровень детализации логирования
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Показать примитивные токены
    Tokenize {
        /// SQL файл (по умолчанию stdin)
        file: Option<PathBuf>,
    },

    /// Показать токены диалекта
    Lex {
        /// SQL файл (по умолчанию stdin)
        file: Option<PathBuf>,

        /// Формат вывода
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Не выводить комментарии
        #[arg(long)]
        no_comments: bool,

        /// Разбить скрипт на пакеты перед разбором
        #[arg(short, long)]
        batches: bool,
    },

    /// Разбить скрипт на пакеты
    Split {
        /// SQL файл (по умолчанию stdin)
        file: Option<PathBuf>,

        /// Строка-разделитель пакетов
        #[arg(short, long)]
        separator: Option<String>,
    },

    /// Найти токен по смещению
    Locate {
        /// SQL файл (по умолчанию stdin)
        file: Option<PathBuf>,

        /// Смещение в символах
        #[arg(short, long)]
        offset: usize,
    },

    /// Показать таблицу ключевых слов
    Keywords,
}

impl Cli {
    /// Загружает конфигурацию: файл, затем переменные окружения, затем аргументы
    pub fn load_config(&self) -> anyhow::Result<LexerConfig> {
        let file_config = match &self.config {
            Some(path) => LexerConfig::from_file(path)
                .with_context(|| format!("cannot load config {}", path.display()))?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                LexerConfig::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => LexerConfig::default(),
        };

        let mut config = file_config.merge(LexerConfig::from_env()?);

        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }

        config.validate()?;
        Ok(config)
    }

    /// Выполняет команду
    pub fn execute(&self, config: &LexerConfig) -> anyhow::Result<()> {
        match &self.command {
            Commands::Tokenize { file } => self.run_tokenize(file.as_deref()),
            Commands::Lex {
                file,
                format,
                no_comments,
                batches,
            } => {
                let format = format.unwrap_or(config.output_format);
                let include_comments = config.include_comments && !no_comments;
                self.run_lex(file.as_deref(), format, include_comments, *batches, config)
            }
            Commands::Split { file, separator } => {
                let separator = separator.as_deref().unwrap_or(&config.batch_separator);
                self.run_split(file.as_deref(), separator)
            }
            Commands::Locate { file, offset } => self.run_locate(file.as_deref(), *offset),
            Commands::Keywords => self.show_keywords(),
        }
    }

    /// Выводит примитивные токены
    fn run_tokenize(&self, file: Option<&Path>) -> anyhow::Result<()> {
        let sql = read_input(file)?;
        let mut tokenizer = Tokenizer::sql(&sql);

        while let Some(token) = tokenizer.next() {
            println!(
                "{:>6}..{:<6} {:<18} {:?}",
                token.start,
                token.end,
                token.kind,
                tokenizer.value_of(&token)
            );
        }

        Ok(())
    }

    /// Выводит токены диалекта
    fn run_lex(
        &self,
        file: Option<&Path>,
        format: OutputFormat,
        include_comments: bool,
        batches: bool,
        config: &LexerConfig,
    ) -> anyhow::Result<()> {
        let sql = read_input(file)?;
        let keep = |token: &Token| include_comments || !token.token_type.is_comment();

        if batches {
            let mut lexed = lex_script(&sql, &config.batch_separator, config.parallel_batches);
            for batch in &mut lexed {
                batch.tokens.retain(|t| keep(t));
            }

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&lexed)?),
                OutputFormat::Text => {
                    for (index, batch) in lexed.iter().enumerate() {
                        println!("-- batch {}", index + 1);
                        batch.tokens.iter().for_each(print_token);
                    }
                }
            }
            return Ok(());
        }

        let tokens: Vec<Token> = lex(&sql).filter(|t| keep(t)).collect();
        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tokens)?),
            OutputFormat::Text => tokens.iter().for_each(print_token),
        }

        Ok(())
    }

    /// Выводит пакеты скрипта
    fn run_split(&self, file: Option<&Path>, separator: &str) -> anyhow::Result<()> {
        let script = read_input(file)?;
        let batches = split_batches(&script, separator);

        for (index, batch) in batches.iter().enumerate() {
            if index > 0 {
                println!("{}", separator.trim());
            }
            println!("{}", batch);
        }

        Ok(())
    }

    /// Выводит токен, покрывающий смещение
    fn run_locate(&self, file: Option<&Path>, offset: usize) -> anyhow::Result<()> {
        let sql = read_input(file)?;
        let tokens: Vec<Token> = lex(&sql).collect();

        match find_token_at(&tokens, offset) {
            Some(token) => {
                println!("{} {}", token.position(&sql), token.token_type);
                print_token(token);
            }
            None => println!("No token at offset {}", offset),
        }

        Ok(())
    }

    /// Выводит таблицу ключевых слов
    fn show_keywords(&self) -> anyhow::Result<()> {
        let mut singles: Vec<_> = KEYWORDS.iter().collect();
        singles.sort_by_key(|entry| *entry.0);

        for (keyword, subtype) in singles {
            let starter = if is_starter_keyword(keyword) { "*" } else { "" };
            println!("{:<32} {}{}", keyword, subtype, starter);
        }

        let mut compounds: Vec<_> = COMPOUND_KEYWORDS_2
            .values()
            .chain(COMPOUND_KEYWORDS_3.values())
            .collect();
        compounds.sort_by_key(|compound| compound.phrase);

        for compound in compounds {
            let subtype = compound
                .subtype
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string());
            let starter = if is_starter_compound(compound.phrase) { "*" } else { "" };
            println!("{:<32} {}{}", compound.phrase, subtype, starter);
        }

        Ok(())
    }
}

/// Читает SQL из файла или stdin
fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display())),
        None => {
            let mut sql = String::new();
            std::io::stdin()
                .read_to_string(&mut sql)
                .context("cannot read stdin")?;
            Ok(sql)
        }
    }
}

fn print_token(token: &Token) {
    let subtype = token
        .subtype
        .map(|s| s.to_string())
        .unwrap_or_default();
    let starter = match token.is_starter_keyword {
        Some(true) => "*",
        _ => "",
    };

    println!(
        "{:>6}..{:<6} {:<18} {:<24} {:?}{}",
        token.start, token.end, token.token_type, subtype, token.value, starter
    );
}
