// LogLens - http/error.rs
//
// Error-to-response mapping. Three kinds, three statuses:
//   - caller errors -> 400, echoing what was wrong with the input;
//   - no active file (precondition) -> 409, so clients can prompt
//     "upload a file first";
//   - internal failures -> 500 with an opaque body; path context and
//     causes go to the operator log only, never to the client.

use crate::util::error::{SearchError, UploadError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// The `{"status": ..., "message": ...}` envelope used for upload
/// confirmations and every error body.
#[derive(Debug, Serialize)]
pub struct StatusBody {
    pub status: &'static str,
    pub message: String,
}

impl StatusBody {
    pub fn success(message: String) -> Self {
        Self {
            status: "success",
            message,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            status: "error",
            message,
        }
    }
}

/// Client-facing failure, already reduced to what the caller may see.
#[derive(Debug)]
pub enum ApiError {
    /// Bad input; the message names the offending parameter.
    BadRequest(String),

    /// No log file has been uploaded yet.
    NoActiveFile,

    /// Something failed on our side; details are in the operator log.
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::NoActiveFile => (
                StatusCode::CONFLICT,
                "No file has been uploaded yet.".to_string(),
            ),
            Self::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error.".to_string(),
            ),
        };
        (status, Json(StatusBody::error(message))).into_response()
    }
}

impl From<SearchError> for ApiError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::EmptyQuery => {
                Self::BadRequest("Query parameter is required.".to_string())
            }
            SearchError::InvalidPagination { .. } => {
                Self::BadRequest("Page and size must be greater than 0.".to_string())
            }
            SearchError::InvalidRegex { source, .. } => {
                // The pattern is the caller's own input; echoing the engine's
                // diagnosis leaks nothing internal.
                Self::BadRequest(format!("Invalid regular expression: {source}"))
            }
            SearchError::NoActiveFile => Self::NoActiveFile,
            SearchError::Io { .. } => Self::Internal,
        }
    }
}

impl From<UploadError> for ApiError {
    fn from(e: UploadError) -> Self {
        match e {
            UploadError::EmptyFile => Self::BadRequest("File is empty.".to_string()),
            UploadError::Write { .. } | UploadError::Pointer { .. } => {
                tracing::error!(error = %e, "Upload failed");
                Self::Internal
            }
        }
    }
}
