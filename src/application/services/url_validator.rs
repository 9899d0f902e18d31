//! URL validation service.

use std::sync::Arc;

use crate::infrastructure::resolver::{HostResolver, ResolveError};
use crate::utils::url_parser::{ParsedUrl, UrlParseError, parse_http_url};

/// Reasons a submitted URL is rejected.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error(transparent)]
    Parse(#[from] UrlParseError),

    #[error("host did not resolve: {0}")]
    Unresolvable(#[from] ResolveError),
}

/// Checks that a string is an absolute HTTP(S) URL whose host exists.
///
/// `localhost` and IP literals skip the resolution check. Every other host is
/// handed to the injected [`HostResolver`].
#[derive(Clone)]
pub struct UrlValidator {
    resolver: Arc<dyn HostResolver>,
}

impl UrlValidator {
    pub fn new(resolver: Arc<dyn HostResolver>) -> Self {
        Self { resolver }
    }

    /// Validates `candidate`.
    ///
    /// Syntactic failures return before any lookup is attempted.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Parse`] for empty, malformed, or non-HTTP(S) input.
    /// Returns [`ValidationError::Unresolvable`] if the hostname lookup fails.
    pub async fn validate(&self, candidate: &str) -> Result<ParsedUrl, ValidationError> {
        let parsed = parse_http_url(candidate)?;

        if let Some(host) = parsed.host_to_resolve() {
            self.resolver.resolve(host).await?;
        }

        Ok(parsed)
    }
}
