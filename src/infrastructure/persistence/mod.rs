//! Repository implementations.

mod memory_url_repository;

pub use memory_url_repository::InMemoryUrlRepository;
