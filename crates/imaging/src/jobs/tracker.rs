// crates/imaging/src/jobs/tracker.rs
//! Job registry and background execution.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use forenkit_core::exec::{run_with_timeout, CommandOutcome};
use forenkit_core::sha256_file;

use super::command::{build_command, IMAGING_TIMEOUT};
use super::state::JobState;
use super::types::{ImagingMethod, JobSnapshot, JobStatus};

/// Process-wide registry of imaging jobs.
///
/// The map is the only shared mutable structure; its guard is held for
/// the duration of a dictionary operation, never across the external
/// process. Each job's fields are written solely by the task spawned
/// for it. Jobs are never removed — they live for the process lifetime,
/// which is an accepted limitation of the volatile design.
pub struct JobTracker {
    jobs: RwLock<HashMap<Uuid, Arc<JobState>>>,
}

impl JobTracker {
    pub fn new() -> Self {
        Self {
            jobs: RwLock::new(HashMap::new()),
        }
    }

    /// Register a new job and start it on its own task.
    ///
    /// Returns immediately with the job id; every submission spawns its
    /// own task with no pool or admission control.
    pub fn submit(&self, source: String, destination: PathBuf, method: ImagingMethod) -> Uuid {
        let state = Arc::new(JobState::new(source, destination, method));
        let id = state.id();

        match self.jobs.write() {
            Ok(mut jobs) => {
                jobs.insert(id, Arc::clone(&state));
            }
            Err(e) => tracing::error!("RwLock poisoned inserting job: {e}"),
        }

        tokio::spawn(run_job(state));

        tracing::info!(job_id = %id, "created imaging job");
        id
    }

    /// Snapshot of one job, or `None` for a never-issued id.
    pub fn get(&self, id: Uuid) -> Option<JobSnapshot> {
        match self.jobs.read() {
            Ok(jobs) => jobs.get(&id).map(|s| s.snapshot()),
            Err(e) => {
                tracing::error!("RwLock poisoned reading jobs: {e}");
                None
            }
        }
    }

    /// Snapshots of all known jobs, in no particular order.
    pub fn list(&self) -> Vec<JobSnapshot> {
        match self.jobs.read() {
            Ok(jobs) => jobs.values().map(|s| s.snapshot()).collect(),
            Err(e) => {
                tracing::error!("RwLock poisoned listing jobs: {e}");
                Vec::new()
            }
        }
    }

    /// Number of jobs currently in `running` state.
    pub fn running_count(&self) -> usize {
        match self.jobs.read() {
            Ok(jobs) => jobs
                .values()
                .filter(|s| s.status() == JobStatus::Running)
                .count(),
            Err(e) => {
                tracing::error!("RwLock poisoned counting jobs: {e}");
                0
            }
        }
    }
}

impl Default for JobTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Execute one imaging job to its terminal state.
///
/// Runs on the task spawned by `submit`; it is the only writer of this
/// job's fields. The task blocks (awaits) for the full duration of the
/// external process, bounded by `IMAGING_TIMEOUT`, then again for the
/// digest pass over the destination file.
async fn run_job(state: Arc<JobState>) {
    state.set_running();
    tracing::info!(
        job_id = %state.id(),
        source = %state.source(),
        destination = %state.destination().display(),
        method = state.method().as_str(),
        "starting imaging job"
    );

    let (program, args) = build_command(state.method(), state.source(), state.destination());

    match run_with_timeout(program, &args, IMAGING_TIMEOUT).await {
        Ok(CommandOutcome::Success { .. }) => {
            tracing::info!(job_id = %state.id(), "imaging finished, computing digest");
            let dest = state.destination().to_path_buf();
            match tokio::task::spawn_blocking(move || sha256_file(&dest)).await {
                Ok(Ok(hash)) => {
                    tracing::info!(job_id = %state.id(), hash = %hash, "imaging job completed");
                    state.complete(hash);
                }
                Ok(Err(e)) => {
                    tracing::error!(job_id = %state.id(), error = %e, "digest failed");
                    state.fail(format!("Error calculating hash: {e}"));
                }
                Err(e) => {
                    tracing::error!(job_id = %state.id(), error = %e, "digest task panicked");
                    state.fail(format!("Error calculating hash: {e}"));
                }
            }
        }
        Ok(CommandOutcome::Failure { exit_code, stderr }) => {
            tracing::error!(job_id = %state.id(), ?exit_code, "imaging job failed");
            state.fail(format!("Imaging failed: {stderr}"));
        }
        Ok(CommandOutcome::TimedOut { .. }) => {
            tracing::error!(job_id = %state.id(), "imaging job timed out");
            state.fail("Imaging operation timed out after 2 hours");
        }
        Err(e) => {
            tracing::error!(job_id = %state.id(), error = %e, "imaging job could not start");
            state.fail(format!("Imaging failed: {e}"));
        }
    }
}
