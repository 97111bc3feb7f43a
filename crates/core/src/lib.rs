// crates/core/src/lib.rs
//! Shared library for the forenkit services.
//!
//! Both the imaging service and the analysis service are thin HTTP
//! front ends over external command-line tools. The pieces they share
//! live here:
//! - `config` — evidence/output directory configuration
//! - `paths` — filename validation confined to a root directory
//! - `digest` — chunked SHA-256 file hashing
//! - `exec` — bounded external command invocation
//! - `api` — the common JSON error response shape

pub mod api;
pub mod config;
pub mod digest;
pub mod exec;
pub mod paths;

pub use api::{ApiError, ApiResult, ErrorResponse};
pub use config::ServiceConfig;
pub use digest::sha256_file;
pub use exec::{run_with_timeout, CommandOutcome, ExecError};
pub use paths::{resolve_destination, resolve_existing, PathError};
