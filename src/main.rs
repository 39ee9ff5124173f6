//! Activity Directory Service
//! 
//! Entry point: load configuration, install telemetry, open the
//! activity store and serve the HTTP API until Ctrl+C / SIGTERM.

use anyhow::{Context, Result};
use tracing::info;

use activity_directory::utils::init_telemetry;
use activity_directory::{open_store, run_server, AppConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env().context("Failed to load configuration")?;

    let otel = init_telemetry(env!("CARGO_PKG_NAME"), config.otlp_endpoint.as_deref())?;
    info!(?config, "🏫 Starting activity directory v{}", env!("CARGO_PKG_VERSION"));
    if otel.is_exporting() {
        info!("📡 Exporting spans over OTLP");
    }

    let store = open_store(config.store_path.as_deref()).await?;
    let activities = store.list().await?;
    info!("📚 {} activities loaded", activities.len());

    run_server(&config, store).await
}
