//! CLI entry-point for scoring persisted predictions.

use anyhow::Result;
use tracing::{instrument, warn};

use crate::{
    config::Settings,
    data,
    eval::{self, embedder, Field, LabelledPair},
    llm,
};

#[instrument(skip(settings))]
pub async fn run(settings: Settings) -> Result<()> {
    let truth = data::reviews::load_ground_truth(&settings.ground_truth_path)?;
    let Some(prediction) = llm::load_prediction(&settings)? else {
        warn!("predictions file missing or empty; run extract first");
        return Ok(());
    };

    let pairs = vec![
        LabelledPair {
            field: Field::Entity,
            predicted: prediction.entity,
            truth: truth.true_entity.clone(),
        },
        LabelledPair {
            field: Field::Opinion,
            predicted: prediction.opinion,
            truth: truth.true_aspect.clone(),
        },
    ];

    let model = embedder::load_model()?;
    let outcomes = eval::evaluate(model.as_ref(), &pairs, settings.similarity_threshold);
    eval::report(&settings, &outcomes)?;
    Ok(())
}
