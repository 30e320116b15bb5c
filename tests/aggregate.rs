use review_assistant::eval::embedder::HashedEmbedder;
use review_assistant::eval::{evaluate, Field, LabelledPair};

fn pair(field: Field, predicted: &str, truth: &str) -> LabelledPair {
    LabelledPair {
        field,
        predicted: predicted.to_string(),
        truth: truth.to_string(),
    }
}

#[test]
fn aggregator_preserves_input_order_and_count() {
    let embedder = HashedEmbedder::default();
    let pairs = vec![
        pair(Field::Entity, "the restaurant", "restaurant"),
        pair(Field::Opinion, "somewhat tasty", "tasty"),
    ];
    let outcomes = evaluate(&embedder, &pairs, 0.85);
    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0].field, Field::Entity);
    assert_eq!(outcomes[1].field, Field::Opinion);
}

#[test]
fn empty_prediction_is_scored_not_dropped() {
    let embedder = HashedEmbedder::default();
    let pairs = vec![pair(Field::Entity, "", "restaurant")];
    let outcomes = evaluate(&embedder, &pairs, 0.85);
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].score, 0.0);
    assert!(!outcomes[0].accepted);
}

#[test]
fn identical_fields_accept_with_full_lexical_overlap() {
    let embedder = HashedEmbedder::default();
    let pairs = vec![pair(Field::Opinion, "tasty", "tasty")];
    let outcomes = evaluate(&embedder, &pairs, 0.85);
    assert!(outcomes[0].accepted);
    assert!((outcomes[0].lexical - 1.0).abs() < 1e-9);
}
