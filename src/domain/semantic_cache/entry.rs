//! Semantic cache entry and statistics types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A cached query/response pair.
///
/// The key is the normalized query string and doubles as the entry's
/// identity in the store. The embedding is computed once at insert time
/// and reused for every semantic lookup; it is `None` when the embedding
/// provider failed at insert, in which case the entry only serves exact
/// matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Normalized query string, the canonical lookup key
    key: String,
    /// Generated response text
    response: String,
    /// Embedding of the key, cached at insert time
    embedding: Option<Vec<f32>>,
    /// Insertion or last-refresh time (display only)
    created_at: DateTime<Utc>,
    /// Number of lookups served by this entry
    hit_count: u32,
}

impl CacheEntry {
    /// Create a new cache entry
    pub fn new(
        key: impl Into<String>,
        response: impl Into<String>,
        embedding: Option<Vec<f32>>,
    ) -> Self {
        Self {
            key: key.into(),
            response: response.into(),
            embedding,
            created_at: Utc::now(),
            hit_count: 0,
        }
    }

    /// Get the normalized key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the cached response
    pub fn response(&self) -> &str {
        &self.response
    }

    /// Get the cached embedding, if one was computed at insert time
    pub fn embedding(&self) -> Option<&[f32]> {
        self.embedding.as_deref()
    }

    /// Get insertion/last-refresh time
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Get hit count
    pub fn hit_count(&self) -> u32 {
        self.hit_count
    }

    /// Increment hit count
    pub fn increment_hits(&mut self) {
        self.hit_count += 1;
    }
}

/// Statistics for the semantic cache
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CacheStats {
    /// Number of entries currently stored
    pub total_entries: usize,
    /// Total cache hits (exact and semantic)
    pub hits: u64,
    /// Total cache misses
    pub misses: u64,
    /// Total entries evicted at capacity
    pub evictions: u64,
}

impl CacheStats {
    /// Fraction of lookups served from the cache
    pub fn hit_rate(&self) -> f32 {
        let total = self.hits + self.misses;

        if total == 0 {
            return 0.0;
        }

        self.hits as f32 / total as f32
    }
}
