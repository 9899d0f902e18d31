//! API route configuration.

use crate::api::handlers::{hello_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes, nested under `/api` by [`crate::routes::router`].
///
/// # Endpoints
///
/// - `POST /shorturl`       - Shorten a URL
/// - `GET  /shorturl/{id}`  - Redirect to the URL stored under `id`
/// - `GET  /hello`          - Static greeting
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorturl", post(shorten_handler))
        .route("/shorturl/{id}", get(redirect_handler))
        .route("/hello", get(hello_handler))
}
