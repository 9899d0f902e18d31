//! Resolver trait and error types.

use async_trait::async_trait;
use std::time::Duration;

/// Errors that can occur while resolving a hostname.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("lookup of {host} timed out after {timeout:?}")]
    Timeout { host: String, timeout: Duration },

    #[error("lookup of {host} failed: {source}")]
    Lookup {
        host: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} resolved to no addresses")]
    NoAddresses(String),
}

/// Result type for resolver operations.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Checks whether a hostname exists.
///
/// This is a weak proxy for "the URL is reachable" and depends on the network
/// environment, so it is injected rather than called directly.
///
/// # Implementations
///
/// - [`crate::infrastructure::resolver::DnsResolver`] - system resolver with timeout
/// - [`crate::infrastructure::resolver::NullResolver`] - accepts every host
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Resolves `host` to at least one address.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] if the lookup fails, times out, or yields nothing.
    async fn resolve(&self, host: &str) -> ResolveResult<()>;
}
