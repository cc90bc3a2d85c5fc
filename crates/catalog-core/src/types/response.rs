//! Wire-format error body and the `AppError` → HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorKind};

/// Standard API error response body.
///
/// `message` carries one entry per violated rule so callers get
/// deterministic feedback for every failed constraint at once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// HTTP status code, repeated in the body.
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// One human-readable message per violated rule.
    pub message: Vec<String>,
    /// The status reason phrase, e.g. "Bad Request".
    pub error: String,
}

impl ErrorBody {
    /// Build an error body for the given status.
    pub fn new(status: StatusCode, message: Vec<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            message,
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self.kind {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Database
            | ErrorKind::Configuration
            | ErrorKind::Serialization
            | ErrorKind::Internal => {
                tracing::error!(error = %self.message, "Internal server error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Internal fault details stay in the logs, not on the wire.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            vec!["Internal server error".to_string()]
        } else {
            vec![self.message]
        };

        (status, Json(ErrorBody::new(status, message))).into_response()
    }
}
