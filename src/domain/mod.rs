//! Domain layer - Core business logic and entities

pub mod embedding;
pub mod error;
pub mod llm;
pub mod semantic_cache;

pub use embedding::{cosine_similarity, find_best_match, BestMatch, EmbeddingProvider};
pub use error::DomainError;
pub use llm::GenerationProvider;
pub use semantic_cache::{
    normalize_key, CacheEntry, CacheStats, SemanticCache, SemanticCacheConfig,
};
