// crates/imaging/src/state.rs
//! Application state for the imaging service.

use std::sync::Arc;

use forenkit_core::ServiceConfig;

use crate::jobs::JobTracker;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    /// Evidence/output root directories.
    pub config: ServiceConfig,
    /// Registry of all imaging jobs for this process.
    pub tracker: Arc<JobTracker>,
}

impl AppState {
    /// Create the application state wrapped in an Arc for sharing.
    pub fn new(config: ServiceConfig) -> Arc<Self> {
        Arc::new(Self {
            config,
            tracker: Arc::new(JobTracker::new()),
        })
    }
}
