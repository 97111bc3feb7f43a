// crates/imaging/src/routes/health.rs
//! Health check endpoint with imaging-tool availability probes.

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, Json};
use serde::Serialize;

use forenkit_core::exec::{run_with_timeout, CommandOutcome};

use crate::state::AppState;

/// Bound on each tool probe; a wedged binary must not stall `/health`.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub tools: ToolAvailability,
    pub evidence_dir: String,
    pub output_dir: String,
    pub active_jobs: usize,
}

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ToolAvailability {
    pub dcfldd: String,
    pub ewfacquire: String,
}

/// GET /health — probe both imaging binaries and report running jobs.
///
/// A missing or broken tool reports as "Not available" rather than
/// failing the endpoint; the probe itself succeeded.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let dcfldd = match run_with_timeout("dcfldd", &["--version".to_string()], PROBE_TIMEOUT).await {
        Ok(CommandOutcome::Success { .. }) => "Available".to_string(),
        _ => "Not available".to_string(),
    };

    let ewfacquire = match run_with_timeout("ewfacquire", &["-V".to_string()], PROBE_TIMEOUT).await {
        Ok(CommandOutcome::Success { stdout }) => stdout
            .lines()
            .next()
            .unwrap_or("Not available")
            .to_string(),
        _ => "Not available".to_string(),
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "Forensic Imaging API".to_string(),
        tools: ToolAvailability { dcfldd, ewfacquire },
        evidence_dir: state.config.evidence_dir.display().to_string(),
        output_dir: state.config.output_dir.display().to_string(),
        active_jobs: state.tracker.running_count(),
    })
}
