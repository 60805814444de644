//! Cosine similarity and best-match selection over embedding vectors

use crate::domain::DomainError;

/// Calculate cosine similarity between two vectors.
///
/// Returns a value in [-1, 1]: 1.0 for identical direction, values near 0
/// for unrelated vectors, negative values for opposing direction.
/// Mismatched or empty dimensionality is a precondition violation.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32, DomainError> {
    if a.is_empty() || b.is_empty() {
        return Err(DomainError::invalid_input("embedding vectors must be non-empty"));
    }

    if a.len() != b.len() {
        return Err(DomainError::invalid_input(format!(
            "embedding dimensionality mismatch: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok(dot_product / (norm_a * norm_b))
}

/// A candidate selected by [`find_best_match`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestMatch {
    /// Index of the winning candidate in the scanned sequence
    pub index: usize,
    /// Cosine similarity of the winning candidate
    pub similarity: f32,
}

/// Scan `candidates` in order and return the one most similar to `query`.
///
/// The highest-similarity candidate at or above `threshold` wins, not the
/// first one that clears the bar; exact ties keep the earliest candidate.
/// Returns `Ok(None)` when no candidate reaches the threshold.
///
/// This is a deliberate O(n) linear scan - the caller's store is bounded,
/// so no nearest-neighbor index is built.
pub fn find_best_match<'a, I>(
    query: &[f32],
    candidates: I,
    threshold: f32,
) -> Result<Option<BestMatch>, DomainError>
where
    I: IntoIterator<Item = &'a [f32]>,
{
    let mut best: Option<BestMatch> = None;

    for (index, candidate) in candidates.into_iter().enumerate() {
        let similarity = cosine_similarity(query, candidate)?;

        if similarity < threshold {
            continue;
        }

        // Strict comparison keeps the first candidate on an exact tie.
        match best {
            Some(current) if similarity <= current.similarity => {}
            _ => best = Some(BestMatch { index, similarity }),
        }
    }

    Ok(best)
}
