#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use shorturl::infrastructure::persistence::InMemoryUrlRepository;
use shorturl::infrastructure::resolver::{HostResolver, NullResolver, ResolveError, ResolveResult};
use shorturl::routes::router;
use shorturl::state::AppState;
use std::sync::Arc;

/// Resolves every host except the ones listed.
pub struct StaticResolver {
    unresolvable: Vec<String>,
}

impl StaticResolver {
    pub fn rejecting(hosts: &[&str]) -> Self {
        Self {
            unresolvable: hosts.iter().map(|h| h.to_string()).collect(),
        }
    }
}

#[async_trait]
impl HostResolver for StaticResolver {
    async fn resolve(&self, host: &str) -> ResolveResult<()> {
        if self.unresolvable.iter().any(|h| h == host) {
            Err(ResolveError::NoAddresses(host.to_string()))
        } else {
            Ok(())
        }
    }
}

pub fn create_test_state() -> AppState {
    create_test_state_with_resolver(Arc::new(NullResolver::new()))
}

pub fn create_test_state_with_resolver(resolver: Arc<dyn HostResolver>) -> AppState {
    AppState::new(Arc::new(InMemoryUrlRepository::new()), resolver)
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}
