//! CLI entry-point for corpus exploration.

use anyhow::Result;
use tracing::instrument;

use crate::{
    config::Settings,
    data::{self, profile},
};

#[instrument(skip(settings))]
pub async fn run(settings: Settings) -> Result<()> {
    let reviews = data::reviews::load_reviews(&settings.reviews_path)?;
    let corpus = profile::profile_corpus(&reviews);
    profile::print_profile(&corpus)?;
    profile::persist_profile(&settings, &corpus)?;
    Ok(())
}
