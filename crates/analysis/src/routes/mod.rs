// crates/analysis/src/routes/mod.rs
//! Route handlers for the analysis service.
//!
//! - GET  / — static capability listing
//! - GET  /health — tshark version probe
//! - GET  /files — evidence directory listing
//! - POST /analyze — packet records (capped at 1000)
//! - POST /statistics — conversation statistics
//! - POST /protocols — protocol hierarchy

pub mod analyze;
pub mod files;
pub mod health;
pub mod index;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Build the analysis service router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index::welcome))
        .route("/health", get(health::health_check))
        .route("/files", get(files::list_files))
        .route("/analyze", post(analyze::analyze))
        .route("/statistics", post(analyze::statistics))
        .route("/protocols", post(analyze::protocols))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_creation() {
        let _router = router();
    }
}
