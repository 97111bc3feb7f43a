// crates/imaging/src/jobs/state.rs
//! Per-job state for a single imaging operation.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::RwLock;

use uuid::Uuid;

use super::types::{ImagingMethod, JobSnapshot, JobStatus};

/// State of one imaging job.
///
/// Identity fields are immutable after creation. The mutable fields are
/// written only by the one task that runs the job; readers take
/// point-in-time snapshots. Status and progress are atomics so snapshot
/// reads never block the writer, the string fields sit behind RwLocks.
pub struct JobState {
    id: Uuid,
    source: String,
    destination: PathBuf,
    method: ImagingMethod,
    status: AtomicU8,
    progress: AtomicU8,
    error: RwLock<Option<String>>,
    hash: RwLock<Option<String>>,
    started_at: RwLock<Option<String>>,
    completed_at: RwLock<Option<String>>,
}

impl JobState {
    /// Create a new job in `pending` state with progress 0.
    pub fn new(source: String, destination: PathBuf, method: ImagingMethod) -> Self {
        Self {
            id: Uuid::new_v4(),
            source,
            destination,
            method,
            status: AtomicU8::new(JobStatus::Pending as u8),
            progress: AtomicU8::new(0),
            error: RwLock::new(None),
            hash: RwLock::new(None),
            started_at: RwLock::new(None),
            completed_at: RwLock::new(None),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn method(&self) -> ImagingMethod {
        self.method
    }

    pub fn status(&self) -> JobStatus {
        JobStatus::from_u8(self.status.load(Ordering::Relaxed))
    }

    /// Transition to `running` and record the start timestamp.
    pub fn set_running(&self) {
        self.write_field(&self.started_at, Some(now_rfc3339()));
        self.status.store(JobStatus::Running as u8, Ordering::Relaxed);
    }

    /// Transition to `completed` with the destination digest and
    /// progress 100.
    pub fn complete(&self, hash: String) {
        self.write_field(&self.hash, Some(hash));
        self.write_field(&self.completed_at, Some(now_rfc3339()));
        self.progress.store(100, Ordering::Relaxed);
        self.status.store(JobStatus::Completed as u8, Ordering::Relaxed);
    }

    /// Transition to `failed` with a human-readable message. Progress
    /// is left at its last value.
    pub fn fail(&self, error: impl Into<String>) {
        self.write_field(&self.error, Some(error.into()));
        self.status.store(JobStatus::Failed as u8, Ordering::Relaxed);
    }

    /// Point-in-time copy of all fields.
    pub fn snapshot(&self) -> JobSnapshot {
        JobSnapshot {
            job_id: self.id,
            source: self.source.clone(),
            destination: self.destination.display().to_string(),
            method: self.method,
            status: self.status(),
            progress: self.progress.load(Ordering::Relaxed),
            error: self.read_field(&self.error),
            started_at: self.read_field(&self.started_at),
            completed_at: self.read_field(&self.completed_at),
            hash: self.read_field(&self.hash),
        }
    }

    fn write_field(&self, field: &RwLock<Option<String>>, value: Option<String>) {
        match field.write() {
            Ok(mut guard) => *guard = value,
            Err(e) => tracing::error!(job_id = %self.id, "RwLock poisoned writing job field: {e}"),
        }
    }

    fn read_field(&self, field: &RwLock<Option<String>>) -> Option<String> {
        match field.read() {
            Ok(guard) => guard.clone(),
            Err(e) => {
                tracing::error!(job_id = %self.id, "RwLock poisoned reading job field: {e}");
                None
            }
        }
    }
}

fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}
