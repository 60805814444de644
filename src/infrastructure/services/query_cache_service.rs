//! Two-phase semantic query cache service
//!
//! Exact key lookup first, then similarity-based lookup over the cached
//! per-entry embeddings. Insertion embeds the key once and stores the
//! vector on the entry, so a miss costs exactly one embedding call.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::embedding::{find_best_match, EmbeddingProvider};
use crate::domain::semantic_cache::{
    validate_key, CacheEntry, CacheStats, SemanticCache, SemanticCacheConfig,
};
use crate::domain::DomainError;

/// How a cached response was found
#[derive(Debug, Clone, PartialEq)]
pub enum LookupKind {
    /// The normalized query matched a stored key exactly
    Exact,
    /// A semantically similar stored key cleared the similarity threshold
    Semantic {
        /// The stored key that matched
        matched_key: String,
        /// Cosine similarity of the match
        similarity: f32,
    },
}

/// A successful cache lookup
#[derive(Debug, Clone)]
pub struct CacheLookup {
    /// The cached response text
    pub response: String,
    /// Exact or semantic provenance
    pub kind: LookupKind,
}

/// Bounded query cache with normalization and two-phase lookup.
///
/// Owns its store and embedding provider by injection; there is no global
/// cache state anywhere in the crate.
#[derive(Debug)]
pub struct QueryCacheService {
    store: Arc<dyn SemanticCache>,
    embedding_provider: Arc<dyn EmbeddingProvider>,
    config: SemanticCacheConfig,
}

impl QueryCacheService {
    /// Create a new service with the default configuration
    pub fn new(
        store: Arc<dyn SemanticCache>,
        embedding_provider: Arc<dyn EmbeddingProvider>,
    ) -> Self {
        Self::with_config(store, embedding_provider, SemanticCacheConfig::default())
    }

    /// Create a new service with a custom configuration
    pub fn with_config(
        store: Arc<dyn SemanticCache>,
        embedding_provider: Arc<dyn EmbeddingProvider>,
        config: SemanticCacheConfig,
    ) -> Self {
        Self {
            store,
            embedding_provider,
            config,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &SemanticCacheConfig {
        &self.config
    }

    /// Look up a response for the given query.
    ///
    /// Phase one checks the normalized key against stored keys without
    /// touching the embedding provider. Phase two (when semantic lookup is
    /// enabled) embeds the query and scans the cached entry embeddings for
    /// the best match at or above the configured threshold. An embedding
    /// failure during phase two downgrades to a miss so the caller can
    /// still fall back to generation.
    pub async fn get_from_cache(&self, query: &str) -> Result<Option<CacheLookup>, DomainError> {
        let key = validate_key(query)?;

        // Exact phase
        if let Some(entry) = self.store.get_exact(&key).await? {
            debug!(key = %key, "Exact cache hit");
            self.store.record_hit(&key).await?;

            return Ok(Some(CacheLookup {
                response: entry.response().to_string(),
                kind: LookupKind::Exact,
            }));
        }

        if !self.config.enabled {
            self.store.record_miss().await?;
            return Ok(None);
        }

        // Semantic phase
        let query_embedding = match self.embedding_provider.embed(&key).await {
            Ok(embedding) => embedding,
            Err(e) => {
                warn!("Failed to embed query for semantic lookup, treating as miss: {}", e);
                self.store.record_miss().await?;
                return Ok(None);
            }
        };

        let entries = self.store.entries().await?;
        // Entries whose embedding failed at insert time can only serve
        // exact hits, so skip them here.
        let candidates: Vec<&CacheEntry> = entries
            .iter()
            .filter(|entry| entry.embedding().is_some())
            .collect();

        let best = find_best_match(
            &query_embedding,
            candidates.iter().filter_map(|entry| entry.embedding()),
            self.config.similarity_threshold,
        )?;

        match best {
            Some(best) => {
                let matched = candidates[best.index];
                debug!(
                    matched_key = %matched.key(),
                    similarity = best.similarity,
                    "Semantic cache hit"
                );
                self.store.record_hit(matched.key()).await?;

                Ok(Some(CacheLookup {
                    response: matched.response().to_string(),
                    kind: LookupKind::Semantic {
                        matched_key: matched.key().to_string(),
                        similarity: best.similarity,
                    },
                }))
            }
            None => {
                debug!(key = %key, "Cache miss in both phases");
                self.store.record_miss().await?;
                Ok(None)
            }
        }
    }

    /// Store a response under the normalized query key.
    ///
    /// Overwrites an existing key (refreshing its eviction position) or
    /// inserts a new entry, evicting the oldest one at capacity. When the
    /// embedding provider fails the entry is still stored, without an
    /// embedding, so the key keeps serving exact hits.
    pub async fn add_to_cache(&self, query: &str, response: &str) -> Result<(), DomainError> {
        let key = validate_key(query)?;

        let embedding = match self.embedding_provider.embed(&key).await {
            Ok(embedding) => Some(embedding),
            Err(e) => {
                warn!("Failed to embed key at insert, storing without embedding: {}", e);
                None
            }
        };

        self.store
            .insert(CacheEntry::new(key, response, embedding))
            .await
    }

    /// Atomically empty the cache. Idempotent.
    pub async fn clear_cache(&self) -> Result<(), DomainError> {
        self.store.clear().await
    }

    /// Read-only snapshot of the cache contents in insertion order
    pub async fn entries(&self) -> Result<Vec<CacheEntry>, DomainError> {
        self.store.entries().await
    }

    /// Number of entries currently stored
    pub async fn len(&self) -> Result<usize, DomainError> {
        self.store.len().await
    }

    /// Cache statistics
    pub async fn stats(&self) -> Result<CacheStats, DomainError> {
        self.store.stats().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::embedding::MockEmbeddingProvider;
    use crate::infrastructure::semantic_cache::InMemorySemanticCache;

    fn service_with(
        provider: Arc<MockEmbeddingProvider>,
        config: SemanticCacheConfig,
    ) -> QueryCacheService {
        let store = Arc::new(InMemorySemanticCache::new(config.max_entries));
        QueryCacheService::with_config(store, provider, config)
    }

    fn default_service() -> (QueryCacheService, Arc<MockEmbeddingProvider>) {
        let provider = Arc::new(MockEmbeddingProvider::new(32));
        let service = service_with(provider.clone(), SemanticCacheConfig::default());
        (service, provider)
    }

    #[tokio::test]
    async fn test_round_trip() {
        let (service, _) = default_service();

        service.add_to_cache("query1", "response1").await.unwrap();

        let lookup = service.get_from_cache("query1").await.unwrap().unwrap();
        assert_eq!(lookup.response, "response1");
        assert_eq!(lookup.kind, LookupKind::Exact);
    }

    #[tokio::test]
    async fn test_normalization_applied_on_both_paths() {
        let (service, _) = default_service();

        service.add_to_cache("  Hello World  ", "hi").await.unwrap();

        let lookup = service.get_from_cache("hello world").await.unwrap().unwrap();
        assert_eq!(lookup.response, "hi");
        assert_eq!(lookup.kind, LookupKind::Exact);
    }

    #[tokio::test]
    async fn test_exact_hit_never_embeds() {
        let provider = Arc::new(MockEmbeddingProvider::new(32));
        let service = service_with(provider.clone(), SemanticCacheConfig::default());

        service.add_to_cache("query", "response").await.unwrap();
        let calls_after_insert = provider.embed_calls();

        let lookup = service.get_from_cache("query").await.unwrap();

        assert!(lookup.is_some());
        assert_eq!(provider.embed_calls(), calls_after_insert);
    }

    #[tokio::test]
    async fn test_semantic_hit_on_similar_query() {
        let provider = Arc::new(
            MockEmbeddingProvider::new(3)
                .with_vector("what is rust", vec![1.0, 0.0, 0.0])
                .with_vector("what's rust", vec![0.98, 0.1, 0.0])
                .with_vector("how do i cook pasta", vec![0.0, 1.0, 0.0]),
        );
        let config = SemanticCacheConfig::new().with_similarity_threshold(0.9);
        let service = service_with(provider, config);

        service
            .add_to_cache("what is rust", "a systems language")
            .await
            .unwrap();
        service
            .add_to_cache("how do i cook pasta", "boil water first")
            .await
            .unwrap();

        let lookup = service.get_from_cache("what's rust").await.unwrap().unwrap();

        assert_eq!(lookup.response, "a systems language");
        match lookup.kind {
            LookupKind::Semantic {
                matched_key,
                similarity,
            } => {
                assert_eq!(matched_key, "what is rust");
                assert!(similarity >= 0.9);
            }
            other => panic!("expected semantic hit, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_semantic_miss_below_threshold() {
        let provider = Arc::new(
            MockEmbeddingProvider::new(3)
                .with_vector("what is rust", vec![1.0, 0.0, 0.0])
                .with_vector("how do i cook pasta", vec![0.0, 1.0, 0.0]),
        );
        let config = SemanticCacheConfig::new().with_similarity_threshold(0.9);
        let service = service_with(provider, config);

        service
            .add_to_cache("what is rust", "a systems language")
            .await
            .unwrap();

        let lookup = service.get_from_cache("how do i cook pasta").await.unwrap();

        assert!(lookup.is_none());
    }

    #[tokio::test]
    async fn test_semantic_phase_skipped_when_disabled() {
        let provider = Arc::new(MockEmbeddingProvider::new(32));
        let config = SemanticCacheConfig::new().with_enabled(false);
        let service = service_with(provider.clone(), config);

        service.add_to_cache("query", "response").await.unwrap();

        // Inserts always embed once (for the entry's cached vector); only
        // the lookup path must stay away from the provider when disabled.
        let calls_after_insert = provider.embed_calls();
        let lookup = service.get_from_cache("different query").await.unwrap();

        assert!(lookup.is_none());
        assert_eq!(provider.embed_calls(), calls_after_insert);
    }

    #[tokio::test]
    async fn test_embedding_failure_degrades_to_miss() {
        let provider = Arc::new(MockEmbeddingProvider::new(32).with_error("model offline"));
        let service = service_with(provider, SemanticCacheConfig::default());

        let lookup = service.get_from_cache("anything").await.unwrap();

        assert!(lookup.is_none());
    }

    #[tokio::test]
    async fn test_embedding_failure_at_insert_still_stores_entry() {
        let provider = Arc::new(MockEmbeddingProvider::new(32).with_error("model offline"));
        let service = service_with(provider, SemanticCacheConfig::default());

        service.add_to_cache("query", "response").await.unwrap();

        // Exact phase still works for the embedding-less entry.
        let lookup = service.get_from_cache("query").await.unwrap().unwrap();
        assert_eq!(lookup.response, "response");
        assert_eq!(lookup.kind, LookupKind::Exact);
    }

    #[tokio::test]
    async fn test_eviction_through_service() {
        // Orthogonal vectors so the evicted key cannot sneak back in
        // through the semantic phase.
        let provider = Arc::new(
            MockEmbeddingProvider::new(3)
                .with_vector("q1", vec![1.0, 0.0, 0.0])
                .with_vector("q2", vec![0.0, 1.0, 0.0])
                .with_vector("q3", vec![0.0, 0.0, 1.0]),
        );
        let config = SemanticCacheConfig::new().with_max_entries(2);
        let service = service_with(provider, config);

        service.add_to_cache("q1", "r1").await.unwrap();
        service.add_to_cache("q2", "r2").await.unwrap();
        service.add_to_cache("q3", "r3").await.unwrap();

        assert!(service.get_from_cache("q1").await.unwrap().is_none());
        assert_eq!(
            service.get_from_cache("q2").await.unwrap().unwrap().response,
            "r2"
        );
        assert_eq!(
            service.get_from_cache("q3").await.unwrap().unwrap().response,
            "r3"
        );
        assert_eq!(service.len().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_clear_cache() {
        let (service, _) = default_service();

        service.add_to_cache("q1", "r1").await.unwrap();
        service.clear_cache().await.unwrap();

        assert!(service.get_from_cache("q1").await.unwrap().is_none());

        // Idempotent
        service.clear_cache().await.unwrap();
    }

    #[tokio::test]
    async fn test_invalid_key_rejected() {
        let (service, _) = default_service();

        assert!(matches!(
            service.add_to_cache("   ", "response").await,
            Err(DomainError::InvalidKey { .. })
        ));
        assert!(matches!(
            service.get_from_cache("\t \n").await,
            Err(DomainError::InvalidKey { .. })
        ));
    }

    #[tokio::test]
    async fn test_entries_snapshot_in_insertion_order() {
        let (service, _) = default_service();

        service.add_to_cache("First", "1").await.unwrap();
        service.add_to_cache("Second", "2").await.unwrap();

        let entries = service.entries().await.unwrap();
        let keys: Vec<&str> = entries.iter().map(|e| e.key()).collect();

        assert_eq!(keys, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_stats_track_hits_and_misses() {
        let provider = Arc::new(
            MockEmbeddingProvider::new(2)
                .with_vector("q1", vec![1.0, 0.0])
                .with_vector("totally unrelated", vec![0.0, 1.0]),
        );
        let service = service_with(provider, SemanticCacheConfig::default());

        service.add_to_cache("q1", "r1").await.unwrap();
        let _ = service.get_from_cache("q1").await.unwrap(); // hit
        let _ = service.get_from_cache("totally unrelated").await.unwrap(); // miss

        let stats = service.stats().await.unwrap();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert!((stats.hit_rate() - 0.5).abs() < 0.01);
    }
}
