// crates/imaging/src/routes/images.rs
//! Image creation and verification endpoints.

use std::path::Path;
use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use forenkit_core::{sha256_file, ApiError, ApiResult};

use crate::jobs::{ImagingMethod, JobSnapshot};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateImageRequest {
    pub source: Option<String>,
    pub destination: Option<String>,
    pub method: Option<String>,
}

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct CreateImageResponse {
    pub success: bool,
    pub job_id: Uuid,
    pub message: String,
    pub job: JobSnapshot,
}

/// POST /create-image — validate the request and start a background
/// imaging job.
///
/// Returns 202 Accepted with the initial job snapshot; the caller polls
/// `/job-status/{id}` for the outcome. All validation happens here — a
/// rejected request never starts a job or a process.
pub async fn create_image(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateImageRequest>,
) -> ApiResult<(StatusCode, Json<CreateImageResponse>)> {
    let (Some(source), Some(destination)) = (req.source, req.destination) else {
        return Err(ApiError::BadRequest(
            "source and destination are required".to_string(),
        ));
    };

    let method_str = req.method.as_deref().unwrap_or("dcfldd");
    let Some(method) = ImagingMethod::parse(method_str) else {
        return Err(ApiError::BadRequest(
            "method must be either \"dcfldd\" or \"ewf\"".to_string(),
        ));
    };

    // Sources are devices or files anywhere the operator mounted them,
    // so only traversal and existence are checked, not confinement.
    if source.contains("..") || !Path::new(&source).exists() {
        return Err(ApiError::BadRequest("Invalid source path".to_string()));
    }

    // Destinations are always confined to the output root.
    let dest_path = forenkit_core::resolve_destination(&state.config.output_dir, &destination)
        .map_err(|_| ApiError::BadRequest("Invalid destination path".to_string()))?;

    let job_id = state.tracker.submit(source, dest_path, method);
    let job = state
        .tracker
        .get(job_id)
        .ok_or_else(|| ApiError::Internal("job vanished after submit".to_string()))?;

    Ok((
        StatusCode::ACCEPTED,
        Json(CreateImageResponse {
            success: true,
            job_id,
            message: "Imaging job started".to_string(),
            job,
        }),
    ))
}

#[derive(Debug, Deserialize)]
pub struct VerifyImageRequest {
    pub filename: Option<String>,
}

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct VerifyImageResponse {
    pub success: bool,
    pub filename: String,
    pub sha256: String,
    pub algorithm: String,
    pub verified_at: String,
}

/// POST /verify-image — synchronously digest a file in the output
/// directory. No job semantics; the request blocks for the digest pass.
pub async fn verify_image(
    State(state): State<Arc<AppState>>,
    Json(req): Json<VerifyImageRequest>,
) -> ApiResult<Json<VerifyImageResponse>> {
    let Some(filename) = req.filename.filter(|f| !f.is_empty()) else {
        return Err(ApiError::BadRequest("filename is required".to_string()));
    };

    let path = forenkit_core::resolve_existing(&state.config.output_dir, &filename)
        .map_err(ApiError::from_path_error)?;

    tracing::info!(path = %path.display(), "calculating verification hash");
    let hash = tokio::task::spawn_blocking(move || sha256_file(&path))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .map_err(|e| ApiError::Internal(format!("Error calculating hash: {e}")))?;

    Ok(Json(VerifyImageResponse {
        success: true,
        filename,
        sha256: hash,
        algorithm: "SHA256".to_string(),
        verified_at: chrono::Utc::now().to_rfc3339(),
    }))
}
