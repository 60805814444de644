//! Semantic cache domain models and traits
//!
//! Provides vector-based caching that matches semantically similar queries
//! rather than requiring exact key matches.

mod config;
mod entry;
mod key;
mod store;

pub use config::SemanticCacheConfig;
pub use entry::{CacheEntry, CacheStats};
pub use key::{normalize_key, validate_key};
pub use store::SemanticCache;
