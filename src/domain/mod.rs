//! Domain layer containing the stored entity and the registry contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//! Implementations of [`repositories::UrlRepository`] live in
//! [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
