//! Url entry entity representing a shortened URL mapping.

/// A stored mapping between a sequential short id and an original URL.
///
/// Entries are append-only: once the registry hands one out it is never
/// mutated or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlEntry {
    pub short_id: u64,
    pub original_url: String,
}

impl UrlEntry {
    /// Creates a new UrlEntry instance.
    pub fn new(short_id: u64, original_url: impl Into<String>) -> Self {
        Self {
            short_id,
            original_url: original_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_entry_creation() {
        let entry = UrlEntry::new(1, "https://www.freecodecamp.org");

        assert_eq!(entry.short_id, 1);
        assert_eq!(entry.original_url, "https://www.freecodecamp.org");
    }

    #[test]
    fn test_url_entry_equality() {
        let a = UrlEntry::new(7, "https://example.com".to_string());
        let b = UrlEntry::new(7, "https://example.com");

        assert_eq!(a, b);
        assert_ne!(a, UrlEntry::new(8, "https://example.com"));
    }
}
