// crates/core/src/exec.rs
//! Bounded external command invocation.
//!
//! Both services shell out to forensic tools (dcfldd, ewfacquire,
//! tshark). The contract with every one of them is the same: pass a
//! fixed argument vector, apply a hard wall-clock timeout, interpret
//! exit code zero as success, and capture stdout/stderr text. This is
//! the only place a request task suspends on an external process.

use std::process::Stdio;
use std::time::Duration;

use thiserror::Error;
use tokio::process::Command;
use tokio::time::timeout;

/// Outcome of a bounded command run.
#[derive(Debug)]
pub enum CommandOutcome {
    /// Exit code zero; captured stdout.
    Success { stdout: String },
    /// Nonzero exit (or killed by signal, in which case `exit_code` is
    /// `None`); captured stderr.
    Failure {
        exit_code: Option<i32>,
        stderr: String,
    },
    /// The wall-clock limit expired before the process finished.
    TimedOut { limit: Duration },
}

impl CommandOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CommandOutcome::Success { .. })
    }
}

/// Failure to run the command at all (binary missing, fork failure).
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Run `program` with `args`, bounded by `limit`.
///
/// Stdin is nulled so the child can never block waiting for input
/// (ewfacquire runs unattended, tshark reads only its capture file).
/// On timeout the child is dropped and killed via `kill_on_drop`.
pub async fn run_with_timeout(
    program: &str,
    args: &[String],
    limit: Duration,
) -> Result<CommandOutcome, ExecError> {
    tracing::info!(program, ?args, limit_secs = limit.as_secs(), "executing command");

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let output = match timeout(limit, cmd.output()).await {
        Err(_) => {
            tracing::error!(program, limit_secs = limit.as_secs(), "command timed out");
            return Ok(CommandOutcome::TimedOut { limit });
        }
        Ok(Err(e)) => {
            tracing::error!(program, error = %e, "failed to spawn command");
            return Err(ExecError::Spawn {
                program: program.to_string(),
                source: e,
            });
        }
        Ok(Ok(output)) => output,
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        tracing::error!(
            program,
            exit_code = ?output.status.code(),
            stderr = %truncate_on_char_boundary(&stderr, 500),
            "command failed"
        );
        return Ok(CommandOutcome::Failure {
            exit_code: output.status.code(),
            stderr,
        });
    }

    Ok(CommandOutcome::Success {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
    })
}

/// Cap log output at `max` bytes without slicing inside a UTF-8
/// sequence. Tool stderr is arbitrary bytes; after `from_utf8_lossy`
/// it can hold multi-byte characters at any offset.
fn truncate_on_char_boundary(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
