//! Lookup key normalization

use crate::domain::DomainError;

/// Canonicalize a raw query into a lookup key.
///
/// Surrounding whitespace is trimmed, internal whitespace runs collapse to
/// a single space, and the result is lowercased, so queries differing only
/// in casing or spacing share one key. Applied to every stored and lookup
/// key - never bypassed.
pub fn normalize_key(query: &str) -> String {
    query
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Normalize and reject keys that are empty after normalization
pub fn validate_key(query: &str) -> Result<String, DomainError> {
    let key = normalize_key(query);

    if key.is_empty() {
        return Err(DomainError::invalid_key(
            "query is empty after normalization",
        ));
    }

    Ok(key)
}
