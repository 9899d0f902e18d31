//! No-op resolver for disabled hostname checks.

use super::service::{HostResolver, ResolveResult};
use async_trait::async_trait;
use tracing::debug;

/// A resolver that accepts every host without a lookup.
///
/// Used when `DNS_CHECK` is disabled, e.g. in sandboxes without network access.
pub struct NullResolver;

impl NullResolver {
    /// Creates a new NullResolver instance.
    pub fn new() -> Self {
        debug!("Using NullResolver (hostname check disabled)");
        Self
    }
}

impl Default for NullResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HostResolver for NullResolver {
    async fn resolve(&self, _host: &str) -> ResolveResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_accepts_any_host() {
        let resolver = NullResolver::new();

        assert!(resolver.resolve("no-such-host.invalid").await.is_ok());
        assert!(resolver.resolve("").await.is_ok());
    }
}
