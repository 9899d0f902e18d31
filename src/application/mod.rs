//! Application layer services implementing business logic.
//!
//! Services consume the repository and resolver traits and provide a clean API
//! for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::url_validator::UrlValidator`] - Syntactic checks plus hostname resolution
//! - [`services::url_service::UrlService`] - Shorten and resolve operations

pub mod services;
