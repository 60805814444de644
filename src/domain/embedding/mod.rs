//! Embedding provider trait and similarity utilities

mod provider;
mod similarity;

pub use provider::EmbeddingProvider;
pub use similarity::{cosine_similarity, find_best_match, BestMatch};

#[cfg(test)]
pub use provider::mock::MockEmbeddingProvider;
