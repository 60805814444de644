//! Cache Augmented Generation engine.
//!
//! Answers natural-language queries from a bounded semantic cache when a
//! semantically similar query has already been answered, and only falls
//! back to the (expensive) language-model provider on a miss. Lookup is
//! two-phase: exact match on the normalized key first, then cosine
//! similarity over cached embeddings. Eviction is FIFO by insertion,
//! enforced synchronously on every insert.
//!
//! The UI layer and the actual model transports live outside this crate:
//! callers inject implementations of [`domain::EmbeddingProvider`] and
//! [`domain::GenerationProvider`].

pub mod config;
pub mod domain;
pub mod infrastructure;

use std::sync::Arc;

pub use config::AppConfig;
pub use domain::{
    cosine_similarity, find_best_match, normalize_key, BestMatch, CacheEntry, CacheStats,
    DomainError, EmbeddingProvider, GenerationProvider, SemanticCache, SemanticCacheConfig,
};
pub use infrastructure::semantic_cache::InMemorySemanticCache;
pub use infrastructure::services::{
    Answer, AnswerSource, CacheLookup, CachedGenerationService, LookupKind, QueryCacheService,
};

/// Wire up the full engine over an in-memory store.
///
/// Convenience constructor for the common case; components can also be
/// assembled by hand for custom stores.
pub fn create_engine(
    config: SemanticCacheConfig,
    embedding_provider: Arc<dyn EmbeddingProvider>,
    generation_provider: Arc<dyn GenerationProvider>,
) -> CachedGenerationService {
    let store = Arc::new(InMemorySemanticCache::new(config.max_entries));
    let cache = Arc::new(QueryCacheService::with_config(
        store,
        embedding_provider,
        config,
    ));

    CachedGenerationService::new(cache, generation_provider)
}
