//! Infrastructure layer - adapters and service implementations

pub mod logging;
pub mod semantic_cache;
pub mod services;
