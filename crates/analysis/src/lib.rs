// crates/analysis/src/lib.rs
//! Network capture analysis service.
//!
//! HTTP front end over `tshark`: each request validates a filename in
//! the evidence directory, runs one bounded tshark invocation, and
//! returns the output verbatim or lightly reshaped. There is no job
//! state; every request is self-contained.

pub mod routes;
pub mod state;
pub mod tshark;

pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the Axum application with all routes and middleware.
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
