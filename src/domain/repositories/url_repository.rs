//! Repository trait for the short id registry.

use crate::domain::entities::UrlEntry;
use async_trait::async_trait;

/// The registry: assigns sequential short ids and keeps the id-to-URL and
/// URL-to-id indexes consistent.
///
/// Neither operation can fail. Implementations must make create-or-fetch a
/// single atomic step so two concurrent submissions of the same new URL never
/// consume two ids.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - process-local tables
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Returns the entry for `original_url`, creating it with the next id if
    /// this exact string has not been stored yet.
    ///
    /// URLs are compared by string equality; no normalization is applied.
    async fn create(&self, original_url: &str) -> UrlEntry;

    /// Finds an entry by its short id.
    async fn get_by_id(&self, short_id: u64) -> Option<UrlEntry>;

    /// Number of stored entries.
    async fn count(&self) -> usize;
}
