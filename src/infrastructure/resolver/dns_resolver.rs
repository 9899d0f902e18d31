//! Resolver backed by the operating system's name lookup.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::service::{HostResolver, ResolveError, ResolveResult};

/// Resolves hostnames with [`tokio::net::lookup_host`].
///
/// Every lookup is bounded by `timeout` so a slow resolver cannot stall a
/// request handler indefinitely.
#[derive(Debug, Clone)]
pub struct DnsResolver {
    timeout: Duration,
}

impl DnsResolver {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl HostResolver for DnsResolver {
    async fn resolve(&self, host: &str) -> ResolveResult<()> {
        let mut addrs = tokio::time::timeout(self.timeout, tokio::net::lookup_host((host, 0u16)))
            .await
            .map_err(|_| ResolveError::Timeout {
                host: host.to_owned(),
                timeout: self.timeout,
            })?
            .map_err(|source| ResolveError::Lookup {
                host: host.to_owned(),
                source,
            })?;

        match addrs.next() {
            Some(addr) => {
                debug!(host, ip = %addr.ip(), "Host resolved");
                Ok(())
            }
            None => Err(ResolveError::NoAddresses(host.to_owned())),
        }
    }
}
