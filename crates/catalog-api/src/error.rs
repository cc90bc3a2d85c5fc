//! Rejection type for query-parameter validation.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use catalog_core::types::response::ErrorBody;

/// Rejection produced by the pagination extractors.
///
/// Carries one message per violated rule so a single bad request reports
/// every failed constraint at once.
#[derive(Debug, Clone)]
pub struct ValidationRejection(pub Vec<String>);

impl IntoResponse for ValidationRejection {
    fn into_response(self) -> Response {
        let status = StatusCode::BAD_REQUEST;
        (status, Json(ErrorBody::new(status, self.0))).into_response()
    }
}
