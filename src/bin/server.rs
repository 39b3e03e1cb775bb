//! Launchboard HTTP server binary.
//!
//! Entry point for the dashboard: loads configuration and the launch
//! dataset, builds the router, and serves the interactive page.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin launchboard-server
//! ```
//!
//! # Configuration
//!
//! Optional `dashboard.toml` in the working directory, plus environment
//! overrides:
//!
//! - `HOST`: bind host (default: 127.0.0.1)
//! - `PORT`: bind port (default: 8050)
//! - `DATA_PATH`: dataset CSV path (default: data/spacex_launch_dash.csv)
//! - `RUST_LOG`: log filter (default: info)

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use launchboard::config::AppConfig;
use launchboard::data::LaunchDataset;
use launchboard::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("Starting launchboard server");

    let config = AppConfig::load().context("failed to load configuration")?;

    // A missing or malformed dataset is fatal: the dashboard has nothing
    // to show without it.
    let dataset = LaunchDataset::from_csv_path(&config.dataset.path).with_context(|| {
        format!(
            "failed to load launch dataset from '{}'",
            config.dataset.path.display()
        )
    })?;
    info!(
        rows = dataset.len(),
        sites = dataset.sites().len(),
        checksum = &dataset.checksum()[..12],
        "dataset loaded"
    );

    let state = AppState::new(dataset);
    let app = create_router(state);

    let addr = config.bind_addr();
    info!("Dashboard listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
