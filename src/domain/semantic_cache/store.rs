//! Semantic cache storage trait

use std::fmt::Debug;

use async_trait::async_trait;

use super::{CacheEntry, CacheStats};
use crate::domain::DomainError;

/// Trait for bounded, insertion-ordered cache storage.
///
/// Implementations must enforce the capacity bound synchronously on every
/// insert: eviction of the oldest entry and insertion of the new one are
/// one atomic unit, so no observer ever sees the store above capacity.
/// Keys handed to the store are already normalized by the caller.
#[async_trait]
pub trait SemanticCache: Send + Sync + Debug {
    /// Look up an entry by exact key
    async fn get_exact(&self, key: &str) -> Result<Option<CacheEntry>, DomainError>;

    /// Insert an entry, overwriting an existing key or evicting the oldest
    /// entry when at capacity. A re-inserted key moves to the back of the
    /// eviction queue.
    async fn insert(&self, entry: CacheEntry) -> Result<(), DomainError>;

    /// Snapshot of all entries in insertion order
    async fn entries(&self) -> Result<Vec<CacheEntry>, DomainError>;

    /// Remove all entries and reset statistics. Idempotent.
    async fn clear(&self) -> Result<(), DomainError>;

    /// Number of entries currently stored
    async fn len(&self) -> Result<usize, DomainError>;

    /// Cache statistics
    async fn stats(&self) -> Result<CacheStats, DomainError>;

    /// Record a cache hit against the given key
    async fn record_hit(&self, key: &str) -> Result<(), DomainError>;

    /// Record a cache miss
    async fn record_miss(&self) -> Result<(), DomainError>;
}
