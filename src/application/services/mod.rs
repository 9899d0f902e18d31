//! Business logic services for the application layer.

pub mod url_service;
pub mod url_validator;

pub use url_service::UrlService;
pub use url_validator::{UrlValidator, ValidationError};
