//! In-memory semantic cache store

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::semantic_cache::{CacheEntry, CacheStats, SemanticCache};
use crate::domain::DomainError;

/// Entries keyed by normalized query, paired with an explicit FIFO queue
/// of keys that fixes eviction order. Both live behind one lock so evict
/// and insert share a critical section.
#[derive(Debug, Default)]
struct Store {
    entries: HashMap<String, CacheEntry>,
    order: VecDeque<String>,
}

/// Bounded in-memory cache with FIFO-by-insertion eviction.
///
/// Suitable for a single interactive session; the linear semantic scan the
/// service performs over it assumes the bounded size configured here.
#[derive(Debug)]
pub struct InMemorySemanticCache {
    store: RwLock<Store>,
    max_entries: usize,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl InMemorySemanticCache {
    /// Create a new store holding at most `max_entries` entries.
    /// `max_entries` is clamped to a minimum of 1.
    pub fn new(max_entries: usize) -> Self {
        Self {
            store: RwLock::new(Store::default()),
            max_entries: max_entries.max(1),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        }
    }

    fn read_store(&self) -> Result<std::sync::RwLockReadGuard<'_, Store>, DomainError> {
        self.store
            .read()
            .map_err(|e| DomainError::internal(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_store(&self) -> Result<std::sync::RwLockWriteGuard<'_, Store>, DomainError> {
        self.store
            .write()
            .map_err(|e| DomainError::internal(format!("Failed to acquire write lock: {}", e)))
    }
}

#[async_trait]
impl SemanticCache for InMemorySemanticCache {
    async fn get_exact(&self, key: &str) -> Result<Option<CacheEntry>, DomainError> {
        let store = self.read_store()?;

        Ok(store.entries.get(key).cloned())
    }

    async fn insert(&self, entry: CacheEntry) -> Result<(), DomainError> {
        let mut store = self.write_store()?;
        let key = entry.key().to_string();

        if store.entries.contains_key(&key) {
            // Refresh: overwrite content and move the key to the back of
            // the eviction queue. Logical size is unchanged.
            store.order.retain(|k| k != &key);
        } else if store.entries.len() >= self.max_entries {
            if let Some(oldest) = store.order.pop_front() {
                store.entries.remove(&oldest);
                self.evictions.fetch_add(1, Ordering::Relaxed);
                debug!(key = %oldest, "Evicted oldest cache entry at capacity");
            }
        }

        store.order.push_back(key.clone());
        store.entries.insert(key, entry);

        debug_assert!(store.entries.len() <= self.max_entries);
        debug_assert_eq!(store.entries.len(), store.order.len());

        Ok(())
    }

    async fn entries(&self) -> Result<Vec<CacheEntry>, DomainError> {
        let store = self.read_store()?;

        Ok(store
            .order
            .iter()
            .filter_map(|key| store.entries.get(key).cloned())
            .collect())
    }

    async fn clear(&self) -> Result<(), DomainError> {
        let mut store = self.write_store()?;

        store.entries.clear();
        store.order.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.evictions.store(0, Ordering::Relaxed);

        Ok(())
    }

    async fn len(&self) -> Result<usize, DomainError> {
        let store = self.read_store()?;

        Ok(store.entries.len())
    }

    async fn stats(&self) -> Result<CacheStats, DomainError> {
        let store = self.read_store()?;

        Ok(CacheStats {
            total_entries: store.entries.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
        })
    }

    async fn record_hit(&self, key: &str) -> Result<(), DomainError> {
        self.hits.fetch_add(1, Ordering::Relaxed);

        let mut store = self.write_store()?;

        if let Some(entry) = store.entries.get_mut(key) {
            entry.increment_hits();
        }

        Ok(())
    }

    async fn record_miss(&self) -> Result<(), DomainError> {
        self.misses.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
