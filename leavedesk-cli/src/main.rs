//! leavedesk operator CLI
//!
//! Usage:
//!   leavedesk --config leavedesk.toml leave-requests --status pending
//!   LEAVEDESK_TOKEN=... leavedesk approve <id> --notes "enjoy"

use anyhow::Result;
use clap::Parser;
use leavedesk_cli::{AppConfig, Cli, Session};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = AppConfig::load_from(&cli.config).with_overrides(cli.base_url.clone(), cli.token.clone());
    info!("Using API at {}", config.client.api_base_url);

    let session = Session::open(&config)?;
    let output = session.run(&cli.command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
