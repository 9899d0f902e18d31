//! DTOs for the shorten endpoint.

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

use crate::domain::entities::UrlEntry;
use crate::error::AppError;

/// Request to shorten a URL.
///
/// A missing `url` field deserializes to an empty string so that it fails
/// validation the same way an empty value does.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "URL must not be empty"))]
    pub url: String,
}

/// Successful shorten result.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: u64,
}

impl From<UrlEntry> for ShortenResponse {
    fn from(entry: UrlEntry) -> Self {
        Self {
            original_url: entry.original_url,
            short_url: entry.short_id,
        }
    }
}

/// Extracts a [`ShortenRequest`] from either a JSON or a form-encoded body.
///
/// HTML forms post `application/x-www-form-urlencoded`; API clients post JSON.
/// Any body that cannot be read as either is reported as an invalid URL.
#[derive(Debug)]
pub struct ShortenPayload(pub ShortenRequest);

impl<S> FromRequest<S> for ShortenPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("application/x-www-form-urlencoded"));

        let request = if is_form {
            Form::<ShortenRequest>::from_request(req, state)
                .await
                .map(|Form(request)| request)
                .map_err(|rejection| {
                    debug!(error = %rejection, "Rejected form body");
                    AppError::InvalidUrl
                })?
        } else {
            Json::<ShortenRequest>::from_request(req, state)
                .await
                .map(|Json(request)| request)
                .map_err(|rejection| {
                    debug!(error = %rejection, "Rejected JSON body");
                    AppError::InvalidUrl
                })?
        };

        Ok(Self(request))
    }
}
