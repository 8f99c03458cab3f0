use anyhow::{Context, Result};
use clap::Parser;
use lybic::Cli;
use lybic_config::LybicConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is not an error
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the decoded payloads
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lybic=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = LybicConfig::from_env().context("Failed to load configuration")?;
    tracing::debug!(?config, "Loaded configuration");

    lybic::run(cli, &config, &mut std::io::stdout().lock()).await
}
