// crates/analysis/src/state.rs
//! Application state for the analysis service.

use std::sync::Arc;

use forenkit_core::ServiceConfig;

/// Shared application state accessible from all route handlers.
///
/// The analysis service holds no mutable state: every request is
/// self-contained, so the state is just the directory configuration.
pub struct AppState {
    pub config: ServiceConfig,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Arc<Self> {
        Arc::new(Self { config })
    }
}
