//! Client-facing error type.
//!
//! Every failure a request can hit collapses into one of two kinds and is
//! rendered as `{"error": "<message>"}` with HTTP 200, which is what existing
//! clients of this API expect.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::application::services::ValidationError;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed input, disallowed scheme, or a host that did not resolve.
    #[error("invalid url")]
    InvalidUrl,

    /// Well-formed short id with no stored entry.
    #[error("No short URL found for the given input")]
    NotFound,
}

impl From<ValidationError> for AppError {
    fn from(_: ValidationError) -> Self {
        Self::InvalidUrl
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(_: validator::ValidationErrors) -> Self {
        Self::InvalidUrl
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };

        (StatusCode::OK, Json(body)).into_response()
    }
}
