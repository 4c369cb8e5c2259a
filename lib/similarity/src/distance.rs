//! Cosine similarity between count vectors
//!
//! Accumulation happens in `f64` whatever the slot width, so long or heavy
//! vectors neither overflow nor lose precision.

use crate::vectorizer::CountVector;
use rayon::prelude::*;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimilarityError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimilarityError {
    #[error("Vector length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("Invalid vocabulary: {0}")]
    InvalidVocabulary(String),
}

/// Cosine similarity of two count slices.
///
/// Returns `0.0` when either vector is all zeros.
pub fn cosine_similarity(a: &[u8], b: &[u8]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(SimilarityError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (&x, &y) in a.iter().zip(b) {
        let x = f64::from(x);
        let y = f64::from(y);
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }
    Ok(dot / (norm_a.sqrt() * norm_b.sqrt()))
}

impl CountVector {
    #[inline]
    pub fn cosine_similarity(&self, other: &CountVector) -> Result<f64> {
        cosine_similarity(self.as_slice(), other.as_slice())
    }
}

/// Score `query` against each candidate independently.
///
/// Results are in candidate order; a length mismatch only fails its own entry.
pub fn score_against(query: &CountVector, candidates: &[CountVector]) -> Vec<Result<f64>> {
    candidates
        .par_iter()
        .map(|candidate| query.cosine_similarity(candidate))
        .collect()
}
