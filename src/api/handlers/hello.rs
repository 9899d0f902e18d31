//! Static informational endpoints.

use axum::Json;

use crate::api::dto::hello::HelloResponse;

/// `GET /api/hello`
pub async fn hello_handler() -> Json<HelloResponse> {
    Json(HelloResponse {
        greeting: "hello API",
    })
}

/// `GET /`
pub async fn index_handler() -> &'static str {
    "URL Shortener Microservice - API Running"
}
