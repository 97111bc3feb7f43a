// crates/core/src/paths.rs
//! Filename validation confined to a configured root directory.
//!
//! Both services accept client-supplied filenames that must resolve
//! inside either the evidence root or the output root. A filename is
//! rejected if it is empty, contains a parent-directory segment, or is
//! absolute; nothing a client sends may escape its root.

use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Validation failures for client-supplied filenames.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("filename is required")]
    Empty,

    #[error("Invalid filename")]
    Traversal,

    #[error("Invalid filename")]
    Absolute,

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Not a file: {0}")]
    NotAFile(String),
}

/// Reject empty, traversing, or absolute filenames.
fn sanitize(name: &str) -> Result<(), PathError> {
    if name.is_empty() {
        return Err(PathError::Empty);
    }
    let path = Path::new(name);
    if path.is_absolute() || name.starts_with('/') {
        return Err(PathError::Absolute);
    }
    // Component-wise check catches `..` segments that a substring test
    // would miss or falsely flag (e.g. a literal `..` directory vs a
    // filename like `a..b`). The original substring behavior is kept as
    // a backstop so `a/../b` style inputs are rejected either way.
    if name.contains("..") || path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(PathError::Traversal);
    }
    Ok(())
}

/// Resolve `name` under `root`, requiring an existing regular file.
///
/// Used for evidence lookups and `/verify-image`.
pub fn resolve_existing(root: &Path, name: &str) -> Result<PathBuf, PathError> {
    sanitize(name)?;
    let path = root.join(name);
    if !path.exists() {
        return Err(PathError::NotFound(name.to_string()));
    }
    if !path.is_file() {
        return Err(PathError::NotAFile(name.to_string()));
    }
    Ok(path)
}

/// Resolve `name` under `root` as a write target.
///
/// The target may not exist yet (the imaging run creates it), so only
/// the shape of the name is checked.
pub fn resolve_destination(root: &Path, name: &str) -> Result<PathBuf, PathError> {
    sanitize(name)?;
    Ok(root.join(name))
}
