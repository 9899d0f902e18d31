//! Handler for the shorten endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenPayload, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or returns the existing) short id for a URL.
///
/// # Endpoint
///
/// `POST /api/shorturl`
///
/// # Request Body
///
/// JSON `{"url": "https://www.freecodecamp.org"}` or the form-encoded
/// equivalent `url=https%3A%2F%2Fwww.freecodecamp.org`.
///
/// # Response
///
/// ```json
/// { "original_url": "https://www.freecodecamp.org", "short_url": 1 }
/// ```
///
/// # Errors
///
/// Responds `{"error": "invalid url"}` with status 200 if the body is
/// unreadable, the URL is malformed or not HTTP(S), or its host does not
/// resolve. Submitting the same URL again returns the same `short_url`.
pub async fn shorten_handler(
    State(state): State<AppState>,
    ShortenPayload(payload): ShortenPayload,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let entry = state.url_service.shorten(&payload.url).await?;

    Ok(Json(entry.into()))
}
