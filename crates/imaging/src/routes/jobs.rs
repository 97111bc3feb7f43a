// crates/imaging/src/routes/jobs.rs
//! Job polling endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use forenkit_core::{ApiError, ApiResult};

use crate::jobs::JobSnapshot;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct JobStatusResponse {
    pub success: bool,
    pub job: JobSnapshot,
}

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct JobListResponse {
    pub success: bool,
    pub jobs: Vec<JobSnapshot>,
    pub count: usize,
}

/// GET /job-status/{id} — snapshot of one job.
///
/// A never-issued id is a 404, and so is an id that is not a UUID at
/// all; the caller cannot distinguish the two, by design.
pub async fn job_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<JobStatusResponse>> {
    let job = Uuid::parse_str(&id)
        .ok()
        .and_then(|id| state.tracker.get(id))
        .ok_or_else(|| ApiError::NotFound("Job not found".to_string()))?;

    Ok(Json(JobStatusResponse { success: true, job }))
}

/// GET /jobs — snapshots of every job submitted since process start.
pub async fn list_jobs(State(state): State<Arc<AppState>>) -> Json<JobListResponse> {
    let jobs = state.tracker.list();
    let count = jobs.len();
    Json(JobListResponse {
        success: true,
        jobs,
        count,
    })
}
