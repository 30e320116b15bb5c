use proptest::prelude::*;
use review_assistant::eval::embedder::{Embedder, HashedEmbedder};
use review_assistant::eval::similarity::{cosine, decide, score_pair};

#[test]
fn identical_strings_score_one() {
    let embedder = HashedEmbedder::default();
    let score = score_pair(&embedder, "tasty", "tasty", 0.85).unwrap();
    assert!((score.score - 1.0).abs() < 1e-5);
    assert!(score.accepted);
}

#[test]
fn threshold_boundary_is_inclusive() {
    assert!(decide(0.85, 0.85).accepted);
    assert!(!decide(0.8499, 0.85).accepted);
}

#[test]
fn empty_prediction_scores_zero_and_rejects() {
    let embedder = HashedEmbedder::default();
    let score = score_pair(&embedder, "", "tasty", 0.85).unwrap();
    assert_eq!(score.score, 0.0);
    assert!(!score.accepted);
}

#[test]
fn whitespace_prediction_scores_zero() {
    let embedder = HashedEmbedder::default();
    let score = score_pair(&embedder, "   ", "tasty", 0.85).unwrap();
    assert_eq!(score.score, 0.0);
    assert!(!score.accepted);
}

#[test]
fn zero_norm_vector_scores_zero() {
    assert_eq!(cosine(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
}

#[test]
fn unrelated_strings_are_rejected() {
    let embedder = HashedEmbedder::default();
    let score = score_pair(&embedder, "waitress", "menu", 0.85).unwrap();
    assert!(score.score < 0.85);
    assert!(!score.accepted);
}

#[test]
fn embedding_is_deterministic() {
    let embedder = HashedEmbedder::default();
    let first = embedder.embed(&["the service is top-notch"]).unwrap();
    let second = embedder.embed(&["the service is top-notch"]).unwrap();
    assert_eq!(first, second);
}

proptest! {
    #[test]
    fn cosine_is_symmetric(
        a in prop::collection::vec(-1.0f32..1.0, 8),
        b in prop::collection::vec(-1.0f32..1.0, 8),
    ) {
        let ab = cosine(&a, &b);
        let ba = cosine(&b, &a);
        prop_assert!((ab - ba).abs() < 1e-6);
    }

    #[test]
    fn self_similarity_is_one(s in "[a-z]{1,12}") {
        let embedder = HashedEmbedder::default();
        let score = score_pair(&embedder, &s, &s, 0.85).unwrap();
        prop_assert!((score.score - 1.0).abs() < 1e-5);
    }

    #[test]
    fn string_scores_are_symmetric(a in "[a-z ]{1,16}", b in "[a-z ]{1,16}") {
        let embedder = HashedEmbedder::default();
        let ab = score_pair(&embedder, &a, &b, 0.85).unwrap();
        let ba = score_pair(&embedder, &b, &a, 0.85).unwrap();
        prop_assert!((ab.score - ba.score).abs() < 1e-6);
    }
}
