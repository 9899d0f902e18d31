//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{UrlService, UrlValidator};
use crate::domain::repositories::UrlRepository;
use crate::infrastructure::resolver::HostResolver;

/// Handles to the services built once at startup.
///
/// Cloning is cheap: every field is reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
}

impl AppState {
    /// Wires the registry and the hostname resolver into the services.
    pub fn new(repository: Arc<dyn UrlRepository>, resolver: Arc<dyn HostResolver>) -> Self {
        let validator = UrlValidator::new(resolver);

        Self {
            url_service: Arc::new(UrlService::new(repository, validator)),
        }
    }
}
