//! Review corpus and ground-truth ingestion.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

/// A single customer review. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct Review {
    /// Zero-based row index within the corpus file.
    pub id: usize,
    pub text: String,
    /// Corpus sentiment label; carried for exploration only.
    pub sentiment: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReviewRecord {
    review: String,
    #[serde(default)]
    sentiment: Option<String>,
}

/// Hand-annotated entity and aspect for one review.
#[derive(Debug, Clone, Deserialize)]
pub struct GroundTruth {
    /// The review text the annotation refers to.
    pub review: String,
    pub true_entity: String,
    pub true_aspect: String,
}

/// Load the review corpus from a two-column CSV (`review`, `sentiment`).
pub fn load_reviews(path: &Path) -> Result<Vec<Review>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("open review corpus {}", path.display()))?;
    let mut reviews = Vec::new();
    for (id, record) in reader.deserialize::<ReviewRecord>().enumerate() {
        let record =
            record.with_context(|| format!("parse review row {id} in {}", path.display()))?;
        reviews.push(Review {
            id,
            text: record.review,
            sentiment: record.sentiment,
        });
    }
    info!(rows = reviews.len(), path = %path.display(), "loaded reviews");
    Ok(reviews)
}

/// Load the single annotated sample. Rows beyond the first are ignored.
pub fn load_ground_truth(path: &Path) -> Result<GroundTruth> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("open ground truth {}", path.display()))?;
    let mut rows = reader.deserialize::<GroundTruth>();
    let truth = match rows.next() {
        Some(row) => row.with_context(|| format!("parse ground truth in {}", path.display()))?,
        None => bail!("ground truth file {} contains no rows", path.display()),
    };
    if rows.next().is_some() {
        warn!(path = %path.display(), "ground truth has extra rows; using the first");
    }
    Ok(truth)
}
