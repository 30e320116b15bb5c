//! Cosine-similarity scoring between predicted and annotated spans.

use anyhow::{bail, Result};
use serde::Serialize;

use crate::eval::embedder::Embedder;

/// Cosine score in [-1, 1] paired with the threshold decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarityScore {
    pub score: f32,
    pub accepted: bool,
}

/// Compare a score against the acceptance threshold. Scores at the
/// threshold are accepted.
pub fn decide(score: f32, threshold: f32) -> SimilarityScore {
    SimilarityScore {
        score,
        accepted: score >= threshold,
    }
}

/// Cosine of the angle between two vectors. Zero-norm input scores 0.0.
pub fn cosine(a: &[f32], b: &[f32]) -> f32 {
    let dot = a.iter().zip(b).map(|(x, y)| x * y).sum::<f32>();
    let norm_a = a.iter().map(|v| v * v).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// Score a predicted span against the annotated one.
///
/// Empty input on either side scores 0.0 and is rejected without
/// touching the embedding backend. Pure apart from the embedding call;
/// deterministic and symmetric for a fixed backend.
pub fn score_pair(
    embedder: &dyn Embedder,
    predicted: &str,
    truth: &str,
    threshold: f32,
) -> Result<SimilarityScore> {
    if predicted.trim().is_empty() || truth.trim().is_empty() {
        return Ok(decide(0.0, threshold));
    }

    let vectors = embedder.embed(&[predicted, truth])?;
    let (first, second) = match (vectors.first(), vectors.get(1)) {
        (Some(first), Some(second)) => (first, second),
        _ => bail!(
            "embedding backend returned {} vectors for 2 inputs",
            vectors.len()
        ),
    };
    Ok(decide(cosine(first, second), threshold))
}
