// crates/imaging/src/jobs/mod.rs
//! Asynchronous job tracker for imaging operations.
//!
//! Provides:
//! - `JobTracker` — process-wide registry, spawns one task per job
//! - `JobState` — per-job fields owned by the running task
//! - `JobSnapshot` / `JobStatus` / `ImagingMethod` — API-facing types
//! - `build_command` — the method-to-invocation table

pub mod command;
pub mod state;
pub mod tracker;
pub mod types;

pub use command::{build_command, IMAGING_TIMEOUT};
pub use state::JobState;
pub use tracker::JobTracker;
pub use types::{ImagingMethod, JobSnapshot, JobStatus};
