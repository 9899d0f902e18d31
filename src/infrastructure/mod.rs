//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer and the
//! capabilities the application layer depends on.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory registry implementation
//! - [`resolver`] - Hostname resolution (DNS-backed and no-op implementations)

pub mod persistence;
pub mod resolver;
