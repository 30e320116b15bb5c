//! CLI entry-point for entity/aspect extraction.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{config::Settings, data, llm};

/// Args for the `extract` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Number of corpus reviews to process.
    #[arg(long, default_value_t = 1)]
    pub limit: usize,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let reviews = data::reviews::load_reviews(&settings.reviews_path)?;
    let extracted = llm::extract_reviews(&settings, &reviews, args.limit).await?;
    llm::persist_predictions(&settings, &extracted)?;
    Ok(())
}
