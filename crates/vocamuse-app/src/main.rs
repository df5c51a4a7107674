use std::io;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use vocamuse_config::log::{LogConfig, LogFormat};

mod cli;
mod commands;
mod repl;
mod settings;

use self::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = settings::load(&cli)?;
    init_tracing(&config.log);

    if let Some(path) = &cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }
    tracing::info!("Data directory: {}", config.storage.data_dir.display());

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => repl::run(config).await,
        command => {
            let stdin = io::stdin();
            commands::run(command, &config, &mut stdin.lock(), &mut io::stdout().lock())
        }
    }
}

/// Logs go to stderr so they never mix with the menu on stdout
fn init_tracing(log: &LogConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let registry = tracing_subscriber::registry().with(filter);

    match log.format {
        LogFormat::Pretty => registry.with(fmt::layer().with_writer(io::stderr)).init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .init(),
    }
}

#[cfg(test)]
mod tests;
