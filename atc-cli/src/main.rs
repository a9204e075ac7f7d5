//! ATC CLI
//!
//! Command-line interface for managing pipelines on an ATC.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "atc")]
#[command(about = "ATC pipeline management CLI", long_about = None)]
struct Cli {
    /// ATC URL
    #[arg(long, env = "ATC_URL", default_value = "http://localhost:8080")]
    atc_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "ATC_TIMEOUT")]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "atc_cli=info,atc_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config::new(cli.atc_url, cli.timeout);
    config.validate()?;

    tracing::debug!("Using ATC at {}", config.atc_url);

    handle_command(cli.command, &config).await
}
