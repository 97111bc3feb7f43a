// crates/analysis/src/main.rs
//! Network capture analysis service binary.
//!
//! Serves the analysis API on port 5001 (container convention).

use std::net::SocketAddr;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use forenkit_analysis::{create_app, AppState};
use forenkit_core::ServiceConfig;

const DEFAULT_PORT: u16 = 5001;

fn get_port() -> u16 {
    std::env::var("FORENKIT_ANALYSIS_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ServiceConfig::from_env();
    config.ensure_dirs()?;

    tracing::info!(
        evidence_dir = %config.evidence_dir.display(),
        output_dir = %config.output_dir.display(),
        "starting network analysis service"
    );

    let state = AppState::new(config);
    let app = create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], get_port()));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
