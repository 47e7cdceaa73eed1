//! Главный исполняемый файл sqllex

use clap::Parser;
use sqllex::cli::Cli;
use sqllex::VERSION;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.to_lowercase()),
    )
    .init();

    log::debug!("sqllex v{} запущен с конфигурацией {:?}", VERSION, config);

    cli.execute(&config)
}
