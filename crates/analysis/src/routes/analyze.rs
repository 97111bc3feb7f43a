// crates/analysis/src/routes/analyze.rs
//! Capture analysis endpoints: packet records, conversation statistics,
//! protocol hierarchy.
//!
//! All three are synchronous: the handler blocks on the tshark run,
//! bounded by [`TSHARK_TIMEOUT`], and shapes its output for the
//! response. They differ only in the flags passed and how stdout is
//! surfaced.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use forenkit_core::exec::{run_with_timeout, CommandOutcome};
use forenkit_core::{ApiError, ApiResult};

use crate::state::AppState;
use crate::tshark::{
    build_analyze_command, build_protocols_command, build_statistics_command, parse_packets,
    MAX_PACKETS, TSHARK_TIMEOUT,
};

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub filename: Option<String>,
    pub filters: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct AnalyzeResponse {
    pub success: bool,
    pub filename: String,
    pub filters: String,
    pub packet_count: usize,
    pub packets: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct CaptureRequest {
    pub filename: Option<String>,
}

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct StatisticsResponse {
    pub success: bool,
    pub filename: String,
    pub statistics: String,
}

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ProtocolsResponse {
    pub success: bool,
    pub filename: String,
    pub protocols: String,
}

/// Validate the filename against the evidence root.
fn resolve_capture(state: &AppState, filename: Option<String>) -> ApiResult<(String, PathBuf)> {
    let Some(filename) = filename.filter(|f| !f.is_empty()) else {
        return Err(ApiError::BadRequest("filename is required".to_string()));
    };
    let path = forenkit_core::resolve_existing(&state.config.evidence_dir, &filename)
        .map_err(ApiError::from_evidence_error)?;
    Ok((filename, path))
}

/// Run tshark and map every non-success outcome to a tool failure.
async fn run_tshark(args: &[String], error: &str) -> ApiResult<String> {
    match run_with_timeout("tshark", args, TSHARK_TIMEOUT).await {
        Ok(CommandOutcome::Success { stdout }) => Ok(stdout),
        Ok(CommandOutcome::Failure { stderr, .. }) => {
            Err(ApiError::ToolFailure(error.to_string(), stderr))
        }
        Ok(CommandOutcome::TimedOut { limit }) => Err(ApiError::ToolFailure(
            error.to_string(),
            format!("Command timed out after {} seconds", limit.as_secs()),
        )),
        Err(e) => Err(ApiError::ToolFailure(error.to_string(), e.to_string())),
    }
}

/// POST /analyze — structured packet records, capped at 1000.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> ApiResult<Json<AnalyzeResponse>> {
    let (filename, path) = resolve_capture(&state, req.filename)?;
    let filters = req.filters.unwrap_or_default();
    let limit = req.limit.unwrap_or(MAX_PACKETS);

    let args = build_analyze_command(&path, &filters, limit);
    let stdout = run_tshark(&args, "Failed to analyze pcap").await?;
    let packets = parse_packets(&stdout);

    Ok(Json(AnalyzeResponse {
        success: true,
        filename,
        filters,
        packet_count: packets.len(),
        packets,
    }))
}

/// POST /statistics — TCP and UDP conversation statistics as free text.
pub async fn statistics(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CaptureRequest>,
) -> ApiResult<Json<StatisticsResponse>> {
    let (filename, path) = resolve_capture(&state, req.filename)?;

    let args = build_statistics_command(&path);
    let stdout = run_tshark(&args, "Failed to get statistics").await?;

    Ok(Json(StatisticsResponse {
        success: true,
        filename,
        statistics: stdout,
    }))
}

/// POST /protocols — protocol hierarchy as free text.
pub async fn protocols(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CaptureRequest>,
) -> ApiResult<Json<ProtocolsResponse>> {
    let (filename, path) = resolve_capture(&state, req.filename)?;

    let args = build_protocols_command(&path);
    let stdout = run_tshark(&args, "Failed to get protocol hierarchy").await?;

    Ok(Json(ProtocolsResponse {
        success: true,
        filename,
        protocols: stdout,
    }))
}
