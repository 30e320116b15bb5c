//! LLM-driven entity/aspect extraction orchestration.

pub mod openai;
pub mod prompt;
pub mod response;

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

use crate::{config::Settings, data::reviews::Review};
use openai::{ChatClient, ResponseFormat};
use prompt::PromptTemplate;
pub use response::PredictedPair;

/// Extraction output for one review.
#[derive(Debug, Clone)]
pub struct ExtractedReview {
    pub review_id: usize,
    pub pairs: Vec<PredictedPair>,
}

/// Extract pairs from the first `limit` corpus reviews.
///
/// Reviews are processed sequentially; a failed completion is reported
/// and that review skipped, the rest continue.
pub async fn extract_reviews(
    settings: &Settings,
    reviews: &[Review],
    limit: usize,
) -> Result<Vec<ExtractedReview>> {
    let client = ChatClient::from_settings(settings)?;
    let template = PromptTemplate::default();

    let mut extracted = Vec::new();
    for review in reviews.iter().take(limit) {
        match extract_one(&client, &template, &review.text).await {
            Ok(pairs) => {
                info!(review = review.id, pairs = pairs.len(), "extracted pairs");
                extracted.push(ExtractedReview {
                    review_id: review.id,
                    pairs,
                });
            }
            Err(err) => warn!(review = review.id, %err, "extraction failed; skipping review"),
        }
    }
    Ok(extracted)
}

/// Extract the first pair from a single review text.
pub async fn extract_single(settings: &Settings, review: &str) -> Result<Option<PredictedPair>> {
    let client = ChatClient::from_settings(settings)?;
    let template = PromptTemplate::default();
    let pairs = extract_one(&client, &template, review).await?;
    Ok(pairs.into_iter().next())
}

async fn extract_one(
    client: &ChatClient,
    template: &PromptTemplate,
    review: &str,
) -> Result<Vec<PredictedPair>> {
    let messages = template.messages(review);
    let raw = client.complete(&messages, ResponseFormat::JsonObject).await?;
    Ok(response::parse_pairs(&raw)?)
}

#[derive(Debug, Deserialize)]
struct PredictionRow {
    #[allow(dead_code)]
    review_id: usize,
    entity: String,
    opinion: String,
}

/// Persist extracted pairs as a CSV under the outputs directory.
pub fn persist_predictions(
    settings: &Settings,
    extracted: &[ExtractedReview],
) -> Result<PathBuf> {
    let path = settings.join_output("predictions.csv");
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("create predictions file {}", path.display()))?;
    writer.write_record(["review_id", "entity", "opinion"])?;

    let mut rows = 0usize;
    for review in extracted {
        for pair in &review.pairs {
            writer.write_record([
                review.review_id.to_string(),
                pair.entity.clone(),
                pair.opinion.clone(),
            ])?;
            rows += 1;
        }
    }
    writer.flush()?;
    info!(path = %path.display(), rows, "wrote predictions");
    Ok(path)
}

/// Load the first persisted prediction, if any.
pub fn load_prediction(settings: &Settings) -> Result<Option<PredictedPair>> {
    let path = settings.join_output("predictions.csv");
    if !path.exists() {
        return Ok(None);
    }
    let mut reader = csv::Reader::from_path(&path)
        .with_context(|| format!("open predictions file {}", path.display()))?;
    match reader.deserialize::<PredictionRow>().next() {
        Some(row) => {
            let row = row.with_context(|| format!("parse predictions in {}", path.display()))?;
            Ok(Some(PredictedPair {
                entity: row.entity,
                opinion: row.opinion,
            }))
        }
        None => Ok(None),
    }
}
