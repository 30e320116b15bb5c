//! Corpus exploration summaries.

use std::fs::File;
use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use indexmap::IndexMap;
use polars::prelude::{CsvWriter, DataFrame, NamedFrom, SerWriter, Series};
use tracing::info;

use crate::{config::Settings, data::reviews::Review};

/// Descriptive statistics over the loaded review corpus.
#[derive(Debug, Clone)]
pub struct CorpusProfile {
    pub rows: usize,
    pub empty_reviews: usize,
    pub min_words: usize,
    pub mean_words: f64,
    pub max_words: usize,
    /// Sentiment label counts in first-seen order.
    pub sentiment_counts: IndexMap<String, u32>,
}

/// Compute corpus-level statistics in a single pass.
pub fn profile_corpus(reviews: &[Review]) -> CorpusProfile {
    let mut empty_reviews = 0usize;
    let mut min_words = usize::MAX;
    let mut max_words = 0usize;
    let mut total_words = 0usize;
    let mut sentiment_counts: IndexMap<String, u32> = IndexMap::new();

    for review in reviews {
        let words = review.text.split_whitespace().count();
        if words == 0 {
            empty_reviews += 1;
        }
        min_words = min_words.min(words);
        max_words = max_words.max(words);
        total_words += words;
        if let Some(label) = review.sentiment.as_deref() {
            let label = label.trim();
            if !label.is_empty() {
                *sentiment_counts.entry(label.to_string()).or_insert(0) += 1;
            }
        }
    }

    let rows = reviews.len();
    let mean_words = if rows == 0 {
        0.0
    } else {
        total_words as f64 / rows as f64
    };

    CorpusProfile {
        rows,
        empty_reviews,
        min_words: if rows == 0 { 0 } else { min_words },
        mean_words,
        max_words,
        sentiment_counts,
    }
}

/// Render the profile as DataFrames on stdout.
pub fn print_profile(profile: &CorpusProfile) -> Result<()> {
    let summary = summary_frame(profile)?;
    println!("{summary}");
    if !profile.sentiment_counts.is_empty() {
        let sentiments = sentiment_frame(profile)?;
        println!("{sentiments}");
    }
    Ok(())
}

/// Persist the profile under the outputs directory.
pub fn persist_profile(settings: &Settings, profile: &CorpusProfile) -> Result<PathBuf> {
    let mut summary = summary_frame(profile)?;
    let path = settings.join_output("eda_summary.csv");
    let file = File::create(&path)?;
    CsvWriter::new(file).finish(&mut summary)?;

    if !profile.sentiment_counts.is_empty() {
        let mut sentiments = sentiment_frame(profile)?;
        let sentiment_path = settings.join_output("sentiment_counts.csv");
        let file = File::create(&sentiment_path)?;
        CsvWriter::new(file).finish(&mut sentiments)?;
    }

    info!(path = %path.display(), rows = profile.rows, "wrote corpus profile");
    Ok(path)
}

fn summary_frame(profile: &CorpusProfile) -> Result<DataFrame> {
    let metrics = vec![
        "rows",
        "empty_reviews",
        "min_words",
        "mean_words",
        "max_words",
    ];
    let values = vec![
        profile.rows as f64,
        profile.empty_reviews as f64,
        profile.min_words as f64,
        profile.mean_words,
        profile.max_words as f64,
    ];
    let stamps = vec![Utc::now().to_rfc3339(); metrics.len()];
    let df = DataFrame::new(vec![
        Series::new("metric".into(), metrics),
        Series::new("value".into(), values),
        Series::new("generated_at".into(), stamps),
    ])?;
    Ok(df)
}

fn sentiment_frame(profile: &CorpusProfile) -> Result<DataFrame> {
    let labels: Vec<String> = profile.sentiment_counts.keys().cloned().collect();
    let counts: Vec<i64> = profile.sentiment_counts.values().map(|c| *c as i64).collect();
    let df = DataFrame::new(vec![
        Series::new("sentiment".into(), labels),
        Series::new("count".into(), counts),
    ])?;
    Ok(df)
}
