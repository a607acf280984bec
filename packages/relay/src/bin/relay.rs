// Entry point: one relay pass over every hub, then exit.

use anyhow::{Context, Result};
use clap::Parser;
use relay_core::{domains::hubs::HubStore, kernel::RelayDeps, run, Config};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "relay")]
#[command(about = "Relay finished FACEIT hub matches to demos.tf", long_about = None)]
struct Cli {
    /// Hub watermark file (overrides RELAY_STATE_FILE)
    #[arg(long)]
    state_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load .env before the log filter reads RUST_LOG
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,relay_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(path) = cli.state_file {
        config.state_file = path;
    }
    tracing::info!(
        state_file = %config.state_file.display(),
        persist_mode = ?config.persist_mode,
        "Configuration loaded"
    );

    let deps = RelayDeps::from_config(&config).context("Failed to build API clients")?;
    let store = HubStore::new(config.state_file.clone());

    let report = run(&store, &deps, config.persist_mode).await?;

    let failed: Vec<&str> = report.failed().map(|o| o.hub_id.as_str()).collect();
    if !failed.is_empty() {
        tracing::warn!(hubs = ?failed, "Some hubs did not finish, see errors above");
    }

    Ok(())
}
