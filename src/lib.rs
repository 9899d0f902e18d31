//! # shorturl
//!
//! A URL shortening microservice built with Axum: submit a long URL, get back a
//! sequential numeric id, and follow `/api/shorturl/{id}` to be redirected.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The stored entity and the registry trait
//! - **Application Layer** ([`application`]) - Validation and shorten/resolve logic
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory registry and hostname resolvers
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Behavior
//!
//! - Only absolute `http`/`https` URLs are accepted
//! - Hostnames must resolve, except `localhost` and IP literals
//! - Resubmitting the exact same URL returns the id it already has
//! - The table lives in process memory and is lost on restart
//!
//! ## Quick Start
//!
//! ```bash
//! export PORT=3000
//! export DNS_CHECK=false  # Optional, for offline environments
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{UrlService, UrlValidator};
    pub use crate::domain::entities::UrlEntry;
    pub use crate::domain::repositories::UrlRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryUrlRepository;
    pub use crate::infrastructure::resolver::{HostResolver, NullResolver, ResolveError};
    pub use crate::state::AppState;
}
