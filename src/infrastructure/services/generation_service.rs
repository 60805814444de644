//! Cache-augmented generation flow
//!
//! Answers a query from the semantic cache when possible and falls back to
//! the language-model provider on a miss, inserting the fresh response back
//! into the cache.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::domain::llm::GenerationProvider;
use crate::domain::DomainError;
use crate::infrastructure::services::{CacheLookup, LookupKind, QueryCacheService};

/// Where an answer came from
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerSource {
    /// Served from the cache by exact key match
    ExactCache,
    /// Served from the cache by similarity match
    SemanticCache { similarity: f32 },
    /// Freshly generated by the language-model provider
    Generated,
}

/// An answered query with provenance and timing
#[derive(Debug, Clone)]
pub struct Answer {
    /// The response text
    pub text: String,
    /// Cache hit or fresh generation
    pub source: AnswerSource,
    /// Wall time spent answering
    pub elapsed: Duration,
}

impl Answer {
    /// Whether this answer was served from the cache
    pub fn is_cache_hit(&self) -> bool {
        self.source != AnswerSource::Generated
    }
}

/// Orchestrates the lookup -> generate -> insert round-trip.
#[derive(Debug)]
pub struct CachedGenerationService {
    cache: Arc<QueryCacheService>,
    provider: Arc<dyn GenerationProvider>,
}

impl CachedGenerationService {
    /// Create a new service over an injected cache and provider
    pub fn new(cache: Arc<QueryCacheService>, provider: Arc<dyn GenerationProvider>) -> Self {
        Self { cache, provider }
    }

    /// Get the underlying query cache (for display and maintenance calls)
    pub fn cache(&self) -> &QueryCacheService {
        &self.cache
    }

    /// Answer a query, preferring the cache over generation.
    ///
    /// Generation errors propagate untouched; a failed semantic match never
    /// blocks the generation fallback.
    pub async fn answer(&self, query: &str) -> Result<Answer, DomainError> {
        let started = Instant::now();

        if let Some(lookup) = self.cache.get_from_cache(query).await? {
            let CacheLookup { response, kind } = lookup;
            let source = match kind {
                LookupKind::Exact => AnswerSource::ExactCache,
                LookupKind::Semantic { similarity, .. } => {
                    AnswerSource::SemanticCache { similarity }
                }
            };

            debug!(?source, "Answered from cache");

            return Ok(Answer {
                text: response,
                source,
                elapsed: started.elapsed(),
            });
        }

        info!(provider = self.provider.provider_name(), "Cache miss, generating response");
        let text = self.provider.generate(query).await?;

        self.cache.add_to_cache(query, &text).await?;

        Ok(Answer {
            text,
            source: AnswerSource::Generated,
            elapsed: started.elapsed(),
        })
    }
}
