//! Short URL creation and lookup service.

use std::sync::Arc;

use tracing::debug;

use crate::application::services::UrlValidator;
use crate::domain::entities::UrlEntry;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Service for shortening URLs and resolving short ids.
///
/// Validation, including the hostname lookup, completes before the registry
/// is touched, so no lock is held while a lookup is in flight.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
    validator: UrlValidator,
}

impl UrlService {
    /// Creates a new url service.
    pub fn new(repository: Arc<dyn UrlRepository>, validator: UrlValidator) -> Self {
        Self {
            repository,
            validator,
        }
    }

    /// Validates `candidate` and returns its registry entry, creating one if
    /// this exact URL has not been shortened before.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if validation fails. The registry is
    /// left untouched in that case.
    pub async fn shorten(&self, candidate: &str) -> Result<UrlEntry, AppError> {
        let parsed = self
            .validator
            .validate(candidate)
            .await
            .inspect_err(|e| debug!(error = %e, "Rejected URL"))?;

        Ok(self.repository.create(parsed.as_str()).await)
    }

    /// Looks up the entry for a short id taken from a request path.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if `token` is not a decimal number.
    /// Returns [`AppError::NotFound`] if no entry has that id.
    pub async fn resolve(&self, token: &str) -> Result<UrlEntry, AppError> {
        let short_id = parse_short_id(token)?;

        self.repository
            .get_by_id(short_id)
            .await
            .ok_or(AppError::NotFound)
    }

    /// Number of stored entries.
    pub async fn count(&self) -> usize {
        self.repository.count().await
    }
}

/// Parses a path token as a short id.
///
/// Only plain ASCII digits count as numeric. A digit string too large for
/// `u64` is numeric but can never have been issued, so it is reported as
/// not found.
fn parse_short_id(token: &str) -> Result<u64, AppError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::InvalidUrl);
    }

    token.parse().map_err(|_| AppError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;
    use crate::infrastructure::resolver::{MockHostResolver, ResolveError};
    use mockall::predicate::eq;

    fn accepting_resolver() -> MockHostResolver {
        let mut resolver = MockHostResolver::new();
        resolver.expect_resolve().returning(|_| Ok(()));
        resolver
    }

    fn service(repo: MockUrlRepository, resolver: MockHostResolver) -> UrlService {
        UrlService::new(Arc::new(repo), UrlValidator::new(Arc::new(resolver)))
    }

    #[tokio::test]
    async fn test_shorten_success() {
        let mut repo = MockUrlRepository::new();
        repo.expect_create()
            .withf(|url| url == "https://www.freecodecamp.org")
            .times(1)
            .returning(|url| UrlEntry::new(1, url));

        let entry = service(repo, accepting_resolver())
            .shorten("https://www.freecodecamp.org")
            .await
            .unwrap();

        assert_eq!(entry, UrlEntry::new(1, "https://www.freecodecamp.org"));
    }

    #[tokio::test]
    async fn test_shorten_invalid_scheme_leaves_registry_untouched() {
        let mut repo = MockUrlRepository::new();
        repo.expect_create().times(0);

        let result = service(repo, accepting_resolver())
            .shorten("ftp://example.com")
            .await;

        assert!(matches!(result, Err(AppError::InvalidUrl)));
    }

    #[tokio::test]
    async fn test_shorten_unresolvable_host() {
        let mut repo = MockUrlRepository::new();
        repo.expect_create().times(0);

        let mut resolver = MockHostResolver::new();
        resolver
            .expect_resolve()
            .times(1)
            .returning(|host| Err(ResolveError::NoAddresses(host.to_string())));

        let result = service(repo, resolver)
            .shorten("https://no-such-host.invalid")
            .await;

        assert!(matches!(result, Err(AppError::InvalidUrl)));
    }

    #[tokio::test]
    async fn test_resolve_found() {
        let mut repo = MockUrlRepository::new();
        repo.expect_get_by_id()
            .with(eq(3))
            .times(1)
            .returning(|id| Some(UrlEntry::new(id, "https://example.com")));

        let entry = service(repo, MockHostResolver::new())
            .resolve("3")
            .await
            .unwrap();

        assert_eq!(entry.original_url, "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut repo = MockUrlRepository::new();
        repo.expect_get_by_id().times(1).returning(|_| None);

        let result = service(repo, MockHostResolver::new())
            .resolve("9999")
            .await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_resolve_non_numeric_skips_lookup() {
        let mut repo = MockUrlRepository::new();
        repo.expect_get_by_id().times(0);
        let service = service(repo, MockHostResolver::new());

        for token in ["abc", "12abc", "-1", "+1", " 1", "1.5", ""] {
            let result = service.resolve(token).await;
            assert!(
                matches!(result, Err(AppError::InvalidUrl)),
                "{token:?} should be rejected as non-numeric"
            );
        }
    }

    #[test]
    fn test_parse_short_id() {
        assert_eq!(parse_short_id("1").unwrap(), 1);
        assert_eq!(parse_short_id("007").unwrap(), 7);
        assert!(matches!(parse_short_id("x"), Err(AppError::InvalidUrl)));
        assert!(matches!(
            parse_short_id("99999999999999999999999"),
            Err(AppError::NotFound)
        ));
    }
}
