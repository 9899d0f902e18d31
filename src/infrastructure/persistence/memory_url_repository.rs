//! Process-local implementation of [`UrlRepository`].

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::entities::UrlEntry;
use crate::domain::repositories::UrlRepository;

/// Both indexes and the id counter. Only ever touched under one lock.
#[derive(Debug)]
struct Tables {
    next_id: u64,
    by_id: HashMap<u64, UrlEntry>,
    by_url: HashMap<String, u64>,
}

/// In-memory registry mapping sequential ids to original URLs.
///
/// Ids start at 1 and are never reused. The table lives only as long as the
/// process does.
#[derive(Debug)]
pub struct InMemoryUrlRepository {
    tables: Mutex<Tables>,
}

impl InMemoryUrlRepository {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            tables: Mutex::new(Tables {
                next_id: 1,
                by_id: HashMap::new(),
                by_url: HashMap::new(),
            }),
        }
    }

    // A panic while holding the guard cannot leave the tables half-updated:
    // every mutation below happens after the last fallible step.
    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryUrlRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn create(&self, original_url: &str) -> UrlEntry {
        let mut tables = self.tables();

        if let Some(entry) = tables
            .by_url
            .get(original_url)
            .and_then(|id| tables.by_id.get(id))
        {
            debug!(short_id = entry.short_id, "URL already registered");
            return entry.clone();
        }

        let short_id = tables.next_id;
        tables.next_id += 1;

        let entry = UrlEntry::new(short_id, original_url);
        tables.by_url.insert(original_url.to_owned(), short_id);
        tables.by_id.insert(short_id, entry.clone());

        info!(short_id, original_url, "Registered new short URL");
        entry
    }

    async fn get_by_id(&self, short_id: u64) -> Option<UrlEntry> {
        self.tables().by_id.get(&short_id).cloned()
    }

    async fn count(&self) -> usize {
        self.tables().by_id.len()
    }
}
