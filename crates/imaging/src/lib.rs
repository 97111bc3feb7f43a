// crates/imaging/src/lib.rs
//! Forensic imaging service.
//!
//! HTTP front end over the `dcfldd` and `ewfacquire` imaging tools.
//! Submissions run asynchronously under the job tracker in [`jobs`];
//! clients poll for status and a SHA-256 digest of the result.

pub mod jobs;
pub mod routes;
pub mod state;

pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the Axum application with all routes and middleware.
///
/// CORS is fully open, mirroring the service's role as an internal lab
/// container fronted elsewhere.
pub fn create_app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::router())
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use forenkit_core::ServiceConfig;
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn test_app() -> (Router, TempDir) {
        let tmp = tempfile::tempdir().unwrap();
        let config = ServiceConfig::new(tmp.path().join("evidence"), tmp.path().join("output"));
        config.ensure_dirs().unwrap();
        (create_app(AppState::new(config)), tmp)
    }

    async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    // ========================================================================
    // /create-image
    // ========================================================================

    #[tokio::test]
    async fn test_create_image_missing_fields() {
        let (app, _tmp) = test_app();
        let (status, body) = post(&app, "/create-image", json!({"source": "/dev/null"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "source and destination are required");
    }

    #[tokio::test]
    async fn test_create_image_unknown_method_creates_no_job() {
        let (app, _tmp) = test_app();
        let (status, body) = post(
            &app,
            "/create-image",
            json!({"source": "/dev/null", "destination": "img.dd", "method": "dd"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("dcfldd"));

        let (_, body) = get(&app, "/jobs").await;
        assert_eq!(body["count"], 0);
    }

    #[tokio::test]
    async fn test_create_image_nonexistent_source() {
        let (app, _tmp) = test_app();
        let (status, body) = post(
            &app,
            "/create-image",
            json!({"source": "/no/such/device", "destination": "img.dd"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid source path");
    }

    #[tokio::test]
    async fn test_create_image_traversal_source() {
        let (app, _tmp) = test_app();
        let (status, _) = post(
            &app,
            "/create-image",
            json!({"source": "/dev/../dev/null", "destination": "img.dd"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_image_traversal_destination() {
        let (app, _tmp) = test_app();
        let (status, body) = post(
            &app,
            "/create-image",
            json!({"source": "/dev/null", "destination": "../escape.dd"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid destination path");
    }

    #[tokio::test]
    async fn test_create_image_accepted_and_pollable() {
        let (app, _tmp) = test_app();
        let (status, body) = post(
            &app,
            "/create-image",
            json!({"source": "/dev/null", "destination": "img.dd"}),
        )
        .await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Imaging job started");
        let job = &body["job"];
        // Immediately after submission the job is pending or running.
        let s = job["status"].as_str().unwrap();
        assert!(s == "pending" || s == "running", "unexpected status {s}");
        assert_eq!(job["method"], "dcfldd");

        let id = body["job_id"].as_str().unwrap();
        let (status, body) = get(&app, &format!("/job-status/{id}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["job"]["job_id"], id);
    }

    #[tokio::test]
    async fn test_create_image_defaults_to_dcfldd() {
        let (app, _tmp) = test_app();
        let (_, body) = post(
            &app,
            "/create-image",
            json!({"source": "/dev/null", "destination": "img.dd"}),
        )
        .await;
        assert_eq!(body["job"]["method"], "dcfldd");
    }

    // ========================================================================
    // /job-status and /jobs
    // ========================================================================

    #[tokio::test]
    async fn test_job_status_unknown_id() {
        let (app, _tmp) = test_app();
        let (status, body) = get(
            &app,
            "/job-status/7f2c9d58-0000-4000-8000-000000000000",
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Job not found");
    }

    #[tokio::test]
    async fn test_job_status_malformed_id() {
        let (app, _tmp) = test_app();
        let (status, _) = get(&app, "/job-status/not-a-uuid").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_jobs_listing_counts_submissions() {
        let (app, _tmp) = test_app();
        let (_, body) = get(&app, "/jobs").await;
        assert_eq!(body["count"], 0);

        for i in 0..2 {
            let (status, _) = post(
                &app,
                "/create-image",
                json!({"source": "/dev/null", "destination": format!("img-{i}.dd")}),
            )
            .await;
            assert_eq!(status, StatusCode::ACCEPTED);
        }

        let (_, body) = get(&app, "/jobs").await;
        assert_eq!(body["count"], 2);
        assert_eq!(body["jobs"].as_array().unwrap().len(), 2);
    }

    // ========================================================================
    // /verify-image
    // ========================================================================

    #[tokio::test]
    async fn test_verify_image_missing_filename() {
        let (app, _tmp) = test_app();
        let (status, body) = post(&app, "/verify-image", json!({})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "filename is required");
    }

    #[tokio::test]
    async fn test_verify_image_traversal_rejected() {
        let (app, _tmp) = test_app();
        for name in ["../etc/passwd", "/etc/passwd"] {
            let (status, _) = post(&app, "/verify-image", json!({"filename": name})).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "for {name:?}");
        }
    }

    #[tokio::test]
    async fn test_verify_image_missing_file() {
        let (app, _tmp) = test_app();
        let (status, _) = post(&app, "/verify-image", json!({"filename": "ghost.dd"})).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_verify_image_digests_file() {
        let (app, tmp) = test_app();
        std::fs::write(tmp.path().join("output").join("empty.dd"), b"").unwrap();

        let (status, body) = post(&app, "/verify-image", json!({"filename": "empty.dd"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["algorithm"], "SHA256");
        assert_eq!(
            body["sha256"],
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    // ========================================================================
    // /health
    // ========================================================================

    #[tokio::test]
    async fn test_health_reports_tools_and_jobs() {
        let (app, _tmp) = test_app();
        let (status, body) = get(&app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "Forensic Imaging API");
        // Tool availability depends on the machine; the field must exist
        // either way.
        assert!(body["tools"]["dcfldd"].is_string());
        assert!(body["active_jobs"].is_number());
    }
}
