// crates/analysis/src/routes/files.rs
//! Evidence directory listing.

use std::sync::Arc;
use std::time::UNIX_EPOCH;

use axum::{extract::State, Json};
use serde::Serialize;

use forenkit_core::{ApiError, ApiResult};

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct FileEntry {
    pub filename: String,
    pub size: u64,
    /// Modification time as Unix seconds.
    pub modified: u64,
}

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct FileListResponse {
    pub success: bool,
    pub files: Vec<FileEntry>,
    pub count: usize,
}

/// GET /files — list regular files in the evidence directory.
///
/// A missing evidence directory is an empty listing, not an error;
/// subdirectories are skipped.
pub async fn list_files(State(state): State<Arc<AppState>>) -> ApiResult<Json<FileListResponse>> {
    let dir = &state.config.evidence_dir;

    if !dir.exists() {
        return Ok(Json(FileListResponse {
            success: true,
            files: Vec::new(),
            count: 0,
        }));
    }

    let mut files = Vec::new();
    let entries = std::fs::read_dir(dir)
        .map_err(|e| ApiError::Internal(format!("Error listing files: {e}")))?;

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Ok(meta) = entry.metadata() else {
            continue;
        };
        let modified = meta
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_secs())
            .unwrap_or(0);
        files.push(FileEntry {
            filename: entry.file_name().to_string_lossy().into_owned(),
            size: meta.len(),
            modified,
        });
    }

    let count = files.len();
    Ok(Json(FileListResponse {
        success: true,
        files,
        count,
    }))
}
