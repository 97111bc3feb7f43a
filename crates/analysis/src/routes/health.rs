// crates/analysis/src/routes/health.rs
//! Health check endpoint with a tshark version probe.

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, Json};
use serde::Serialize;

use forenkit_core::exec::{run_with_timeout, CommandOutcome};

use crate::state::AppState;

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub tshark_version: String,
    pub evidence_dir: String,
    pub output_dir: String,
}

/// GET /health — report the tshark version.
///
/// A missing tshark reports as "Not available"; the probe is the point
/// of the endpoint, not a precondition for it.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let tshark_version =
        match run_with_timeout("tshark", &["--version".to_string()], PROBE_TIMEOUT).await {
            Ok(CommandOutcome::Success { stdout }) => {
                stdout.lines().next().unwrap_or("Unknown").to_string()
            }
            _ => "Not available".to_string(),
        };

    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "Network Analysis API".to_string(),
        tshark_version,
        evidence_dir: state.config.evidence_dir.display().to_string(),
        output_dir: state.config.output_dir.display().to_string(),
    })
}
