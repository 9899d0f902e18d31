//! Cross-origin policy.

use tower_http::cors::CorsLayer;

/// Allows requests from any origin.
///
/// The API is public and unauthenticated, and browser-based clients on other
/// origins call it directly.
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}
