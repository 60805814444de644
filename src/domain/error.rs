use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid key: {message}")]
    InvalidKey { message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Embedding unavailable: {provider} - {message}")]
    EmbeddingUnavailable { provider: String, message: String },

    #[error("Generation error: {provider} - {message}")]
    Generation { provider: String, message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn invalid_key(message: impl Into<String>) -> Self {
        Self::InvalidKey {
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn embedding_unavailable(
        provider: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::EmbeddingUnavailable {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn generation(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Generation {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
