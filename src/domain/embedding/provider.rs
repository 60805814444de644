//! Embedding provider trait definition

use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::DomainError;

/// Trait for embedding providers (OpenAI, Cohere, local models, etc.)
///
/// Implementations must be deterministic for a given (text, model) pair:
/// embedding the same text twice yields the same vector.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync + Debug {
    /// Generate a fixed-length embedding vector for the given text
    async fn embed(&self, text: &str) -> Result<Vec<f32>, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;

    /// Get the embedding dimensionality this provider produces
    fn dimensions(&self) -> usize;
}
