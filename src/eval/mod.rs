//! Evaluation of predicted pairs against annotated ground truth.

pub mod embedder;
pub mod similarity;

use std::fmt;

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;
use strsim::jaro_winkler;
use tracing::{info, warn};

use crate::config::Settings;
use embedder::Embedder;
use similarity::score_pair;

/// Which annotated field an outcome refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Entity,
    Opinion,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Entity => write!(f, "entity"),
            Field::Opinion => write!(f, "opinion"),
        }
    }
}

/// A predicted/true pair labelled with its field.
#[derive(Debug, Clone)]
pub struct LabelledPair {
    pub field: Field,
    pub predicted: String,
    pub truth: String,
}

/// Scored outcome for one field.
#[derive(Debug, Clone, Serialize)]
pub struct FieldOutcome {
    pub field: Field,
    pub predicted: String,
    pub truth: String,
    pub score: f32,
    pub accepted: bool,
    /// Jaro-Winkler similarity, a lexical diagnostic alongside the
    /// semantic score.
    pub lexical: f64,
}

/// Invoke the scorer once per labelled pair, preserving input order.
///
/// A scorer failure is reported and the affected pair skipped; nothing
/// else is dropped.
pub fn evaluate(
    embedder: &dyn Embedder,
    pairs: &[LabelledPair],
    threshold: f32,
) -> Vec<FieldOutcome> {
    let mut outcomes = Vec::with_capacity(pairs.len());
    for pair in pairs {
        match score_pair(embedder, &pair.predicted, &pair.truth, threshold) {
            Ok(similarity) => outcomes.push(FieldOutcome {
                field: pair.field,
                predicted: pair.predicted.clone(),
                truth: pair.truth.clone(),
                score: similarity.score,
                accepted: similarity.accepted,
                lexical: jaro_winkler(
                    &pair.predicted.to_lowercase(),
                    &pair.truth.to_lowercase(),
                ),
            }),
            Err(err) => warn!(field = %pair.field, %err, "scoring failed; skipping field"),
        }
    }
    outcomes
}

/// Print outcomes and persist them as a timestamped CSV report.
pub fn report(settings: &Settings, outcomes: &[FieldOutcome]) -> Result<()> {
    for outcome in outcomes {
        let verdict = if outcome.accepted { "keep" } else { "reject" };
        info!(
            field = %outcome.field,
            score = outcome.score,
            lexical = outcome.lexical,
            verdict,
            "scored field"
        );
        println!(
            "{}: \"{}\" vs \"{}\" -> cosine {:.4} ({verdict})",
            outcome.field, outcome.predicted, outcome.truth, outcome.score
        );
    }
    persist_report(settings, outcomes)
}

fn persist_report(settings: &Settings, outcomes: &[FieldOutcome]) -> Result<()> {
    let path = settings.join_output("evaluation.csv");
    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record([
        "field",
        "predicted",
        "truth",
        "score",
        "accepted",
        "lexical",
        "generated_at",
    ])?;
    let stamp = Utc::now().to_rfc3339();
    for outcome in outcomes {
        writer.write_record([
            outcome.field.to_string(),
            outcome.predicted.clone(),
            outcome.truth.clone(),
            format!("{:.6}", outcome.score),
            outcome.accepted.to_string(),
            format!("{:.6}", outcome.lexical),
            stamp.clone(),
        ])?;
    }
    writer.flush()?;
    info!(path = %path.display(), rows = outcomes.len(), "wrote evaluation report");
    Ok(())
}
