//! Service layer - orchestration over the domain ports

mod generation_service;
mod query_cache_service;

pub use generation_service::{Answer, AnswerSource, CachedGenerationService};
pub use query_cache_service::{CacheLookup, LookupKind, QueryCacheService};
