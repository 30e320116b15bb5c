//! Parsing of the structured extraction response.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Entity/opinion pair produced by the model for one review. Transient;
/// discarded after scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictedPair {
    pub entity: String,
    pub opinion: String,
}

/// Failures turning a completion into predicted pairs.
#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("completion was not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("completion contained no extraction entries")]
    Empty,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    named_entity: String,
    #[serde(default)]
    aspect: AspectField,
}

/// The aspect slot arrives as either a bare string or a list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AspectField {
    One(String),
    Many(Vec<String>),
}

impl Default for AspectField {
    fn default() -> Self {
        AspectField::Many(Vec::new())
    }
}

impl AspectField {
    fn first(&self) -> &str {
        match self {
            AspectField::One(value) => value,
            AspectField::Many(values) => values.first().map(String::as_str).unwrap_or(""),
        }
    }
}

static FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^```(?:json)?\s*(.*?)\s*```$").expect("valid regex"));

/// Parse the model's JSON object, keyed by incremental numbers, into
/// ordered pairs. Entries answering "None" are dropped.
pub fn parse_pairs(raw: &str) -> Result<Vec<PredictedPair>, ResponseError> {
    let body = strip_fences(raw.trim());
    let entries: HashMap<String, RawEntry> = serde_json::from_str(body)?;
    if entries.is_empty() {
        return Err(ResponseError::Empty);
    }

    let mut keys: Vec<&String> = entries.keys().collect();
    keys.sort_by_key(|key| key.parse::<u64>().unwrap_or(u64::MAX));

    let mut pairs = Vec::new();
    for key in keys {
        let entry = &entries[key];
        let entity = entry.named_entity.trim();
        let opinion = entry.aspect.first().trim();
        if is_placeholder(entity) || is_placeholder(opinion) {
            continue;
        }
        pairs.push(PredictedPair {
            entity: entity.to_string(),
            opinion: opinion.to_string(),
        });
    }
    Ok(pairs)
}

fn strip_fences(raw: &str) -> &str {
    match FENCE.captures(raw) {
        Some(captures) => captures.get(1).map(|m| m.as_str()).unwrap_or(raw),
        None => raw,
    }
}

fn is_placeholder(value: &str) -> bool {
    value.is_empty() || value.eq_ignore_ascii_case("none")
}
