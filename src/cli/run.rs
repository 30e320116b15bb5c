//! CLI entry-point for the end-to-end pipeline.

use anyhow::Result;
use tracing::{info, instrument, warn};

use crate::{
    config::Settings,
    data::{self, profile},
    eval::{self, embedder, Field, LabelledPair},
    llm,
};

#[instrument(skip(settings))]
pub async fn run(settings: Settings) -> Result<()> {
    let reviews = data::reviews::load_reviews(&settings.reviews_path)?;
    let corpus = profile::profile_corpus(&reviews);
    info!(
        rows = corpus.rows,
        mean_words = corpus.mean_words,
        "loaded review corpus"
    );

    let truth = data::reviews::load_ground_truth(&settings.ground_truth_path)?;

    // Missing credential is fatal; a failed service call is not.
    settings.require_api_key()?;
    let predicted = match llm::extract_single(&settings, &truth.review).await {
        Ok(predicted) => predicted,
        Err(err) => {
            warn!(%err, "extraction failed; nothing to score for the annotated review");
            return Ok(());
        }
    };

    let (entity, opinion) = match predicted {
        Some(pair) => (pair.entity, pair.opinion),
        None => {
            // An absent extraction scores as an empty prediction.
            warn!("no entity/aspect pair extracted from the annotated review");
            (String::new(), String::new())
        }
    };

    let pairs = vec![
        LabelledPair {
            field: Field::Entity,
            predicted: entity,
            truth: truth.true_entity.clone(),
        },
        LabelledPair {
            field: Field::Opinion,
            predicted: opinion,
            truth: truth.true_aspect.clone(),
        },
    ];

    let model = embedder::load_model()?;
    let outcomes = eval::evaluate(model.as_ref(), &pairs, settings.similarity_threshold);
    eval::report(&settings, &outcomes)?;
    Ok(())
}
