//! Runtime configuration utilities for review-assistant.

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context};
use serde::Deserialize;

/// Default acceptance threshold for cosine similarity.
///
/// Tuned against a single annotated sample; override with
/// `SIMILARITY_THRESHOLD` rather than assuming it generalises.
pub const DEFAULT_SIMILARITY_THRESHOLD: f32 = 0.85;

/// Application configuration resolved from `.env` and defaults.
///
/// Loaded once at startup and read-only for the process lifetime.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// OpenAI-compatible API credential. Absent until an LLM call is needed.
    pub openai_api_key: Option<String>,
    /// Base URL of the chat-completions endpoint.
    pub openai_api_base: String,
    /// Model identifier sent with completion requests.
    pub openai_model: String,
    /// Cosine-similarity acceptance threshold.
    pub similarity_threshold: f32,
    /// Path to the review corpus CSV (`review`, `sentiment`).
    pub reviews_path: PathBuf,
    /// Path to the single-row ground-truth CSV.
    pub ground_truth_path: PathBuf,
    /// Root folder for cached data artefacts.
    pub data_dir: PathBuf,
    /// Root folder for analytic outputs.
    pub outputs_dir: PathBuf,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let openai_api_key = env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty());
        let openai_api_base = env::var("OPENAI_API_BASE")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
        let openai_model =
            env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo-1106".to_string());
        let similarity_threshold = env::var("SIMILARITY_THRESHOLD")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_SIMILARITY_THRESHOLD);
        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));
        let outputs_dir = env::var("OUTPUTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./outputs"));
        let reviews_path = env::var("REVIEWS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("reviews.csv"));
        let ground_truth_path = env::var("GROUND_TRUTH_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("ground_truth.csv"));

        std::fs::create_dir_all(&data_dir).context("creating data dir")?;
        std::fs::create_dir_all(&outputs_dir).context("creating outputs dir")?;

        Ok(Self {
            openai_api_key,
            openai_api_base,
            openai_model,
            similarity_threshold,
            reviews_path,
            ground_truth_path,
            data_dir,
            outputs_dir,
        })
    }

    /// Credential required before any completion call can proceed.
    pub fn require_api_key(&self) -> anyhow::Result<&str> {
        match self.openai_api_key.as_deref() {
            Some(key) => Ok(key),
            None => bail!("OPENAI_API_KEY is not set; extraction requires an API credential"),
        }
    }

    /// Convenience helper for derived output path segments.
    pub fn join_output<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.outputs_dir.join(path)
    }
}
