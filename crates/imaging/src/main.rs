// crates/imaging/src/main.rs
//! Forensic imaging service binary.
//!
//! Serves the imaging API on port 5002 (container convention) and keeps
//! all job state in memory for the life of the process.

use std::net::SocketAddr;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use forenkit_core::ServiceConfig;
use forenkit_imaging::{create_app, AppState};

const DEFAULT_PORT: u16 = 5002;

fn get_port() -> u16 {
    std::env::var("FORENKIT_IMAGING_PORT")
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
        "starting forensic imaging service"
    );

    let state = AppState::new(config);
    let app = create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], get_port()));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
