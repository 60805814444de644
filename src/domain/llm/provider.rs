//! Generation provider trait definition

use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::DomainError;

/// Trait for language-model providers.
///
/// The cache core consumes exactly one capability from the model: turn a
/// query into generated text. Transport, retries and API keys are the
/// implementation's concern; failures surface as `DomainError::Generation`
/// and are never retried here.
#[async_trait]
pub trait GenerationProvider: Send + Sync + Debug {
    /// Generate a response for the given query
    async fn generate(&self, query: &str) -> Result<String, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}
