//! Language-model provider port

mod provider;

pub use provider::GenerationProvider;

#[cfg(test)]
pub use provider::mock::MockGenerationProvider;
