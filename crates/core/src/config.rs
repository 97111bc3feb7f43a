// crates/core/src/config.rs
//! Service configuration from environment variables.

use std::path::PathBuf;

/// Root directories both services operate within.
///
/// All file access is confined to these two roots: evidence files are
/// read from `evidence_dir`, imaging destinations and verifiable
/// artifacts are written under `output_dir`.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Read-only input root containing capture/image files.
    pub evidence_dir: PathBuf,
    /// Root under which imaging destinations are written.
    pub output_dir: PathBuf,
}

impl ServiceConfig {
    /// Build the configuration from `EVIDENCE_DIR` / `OUTPUT_DIR`,
    /// falling back to the container-convention defaults.
    pub fn from_env() -> Self {
        Self {
            evidence_dir: env_path("EVIDENCE_DIR", "/evidence"),
            output_dir: env_path("OUTPUT_DIR", "/output"),
        }
    }

    /// Build a configuration with explicit roots (tests, embedding).
    pub fn new(evidence_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            evidence_dir: evidence_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Create both root directories if they do not exist yet.
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.evidence_dir)?;
        std::fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }
}

fn env_path(var: &str, default: &str) -> PathBuf {
    std::env::var(var)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}
