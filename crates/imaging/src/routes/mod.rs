// crates/imaging/src/routes/mod.rs
//! Route handlers for the imaging service.
//!
//! - GET  /health — tool availability probe + running job count
//! - POST /create-image — start a background imaging job (202)
//! - GET  /job-status/{id} — poll one job
//! - POST /verify-image — synchronous digest of an output file
//! - GET  /jobs — list all jobs

pub mod health;
pub mod images;
pub mod jobs;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Build the imaging service router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/create-image", post(images::create_image))
        .route("/job-status/{id}", get(jobs::job_status))
        .route("/verify-image", post(images::verify_image))
        .route("/jobs", get(jobs::list_jobs))
}
