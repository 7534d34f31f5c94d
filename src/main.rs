use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use glyphswap::application::{Cli, CommandExecutor};
use glyphswap::shared::config::ConfigLoader;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so the swap view on stdout stays readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Priority: CLI args > Config file > Defaults
    let mut config = ConfigLoader::load(cli.config.as_deref()).context("load configuration")?;
    cli.apply_overrides(&mut config);
    config.validate().context("validate configuration")?;

    CommandExecutor::execute(cli.command, config).await?;
    Ok(())
}
