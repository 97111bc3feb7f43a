// crates/core/src/api.rs
//! Shared HTTP error contract for both services.
//!
//! Every error body has the shape `{success: false, error, details?}`;
//! success bodies carry `success: true` plus endpoint-specific fields.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::paths::PathError;

/// Structured JSON error response.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

/// API error types that map to HTTP status codes.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Tool invocation failed (nonzero exit, timeout); the detail is
    /// surfaced so the caller can see the tool's stderr.
    #[error("{0}")]
    ToolFailure(String, String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Classify a client-supplied filename error for the imaging
    /// service: malformed names are the client's fault (400), missing
    /// files are not-found (404).
    pub fn from_path_error(err: PathError) -> Self {
        match err {
            PathError::Empty | PathError::Traversal | PathError::Absolute => {
                ApiError::BadRequest(err.to_string())
            }
            PathError::NotFound(_) | PathError::NotAFile(_) => ApiError::NotFound(err.to_string()),
        }
    }

    /// Classify a filename error for evidence lookups: any invalid or
    /// missing name reads as "no such evidence file" (404), except a
    /// missing field which is a 400.
    pub fn from_evidence_error(err: PathError) -> Self {
        match err {
            PathError::Empty => ApiError::BadRequest(err.to_string()),
            _ => ApiError::NotFound(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(message = %msg, "bad request");
                (StatusCode::BAD_REQUEST, ErrorResponse::new(msg))
            }
            ApiError::NotFound(msg) => {
                tracing::warn!(message = %msg, "not found");
                (StatusCode::NOT_FOUND, ErrorResponse::new(msg))
            }
            ApiError::ToolFailure(msg, details) => {
                tracing::error!(message = %msg, details = %details, "tool invocation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_details(msg, details),
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!(message = %msg, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_details("Internal server error", msg),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
