//! Handler for short URL redirect.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short id to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{id}`
///
/// # Response Codes
///
/// - **302 Found**: `Location` is the stored URL
/// - **200 OK** `{"error": "invalid url"}`: `id` is not a decimal number,
///   including segments that do not decode to UTF-8
/// - **200 OK** `{"error": "No short URL found for the given input"}`: unknown id
pub async fn redirect_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let Path(id) = path.map_err(|rejection| {
        debug!(error = %rejection, "Rejected short id segment");
        AppError::InvalidUrl
    })?;

    let entry = state.url_service.resolve(&id).await?;

    let location = location_header(&entry.original_url).ok_or_else(|| {
        warn!(short_id = entry.short_id, "Stored URL is not a valid Location header");
        AppError::InvalidUrl
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Builds a `Location` value from a stored URL.
///
/// ASCII text that is a legal header value is sent verbatim. Anything else
/// goes out as the parser's serialization: punycode hosts and percent-encoded
/// paths and queries.
fn location_header(original_url: &str) -> Option<HeaderValue> {
    if original_url.is_ascii()
        && let Ok(value) = HeaderValue::from_str(original_url)
    {
        return Some(value);
    }

    let url = Url::parse(original_url).ok()?;
    HeaderValue::from_str(url.as_str()).ok()
}
