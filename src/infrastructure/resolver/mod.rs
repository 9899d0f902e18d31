//! Hostname resolution used to check that a submitted URL points somewhere.
//!
//! Provides a [`HostResolver`] trait with two implementations:
//! - [`DnsResolver`] - System resolver lookup bounded by a timeout
//! - [`NullResolver`] - Accepts every host, for offline environments

mod dns_resolver;
mod null_resolver;
mod service;

pub use dns_resolver::DnsResolver;
pub use null_resolver::NullResolver;
pub use service::{HostResolver, ResolveError, ResolveResult};

#[cfg(test)]
pub use service::MockHostResolver;
