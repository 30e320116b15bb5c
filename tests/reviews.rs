use std::io::Write;

use review_assistant::data::reviews::{load_ground_truth, load_reviews};
use tempfile::NamedTempFile;

fn write_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write csv");
    file
}

#[test]
fn loads_reviews_with_sentiment() {
    let file = write_csv(
        "review,sentiment\nThe food is decent,positive\nI won't come back again,negative\n",
    );
    let reviews = load_reviews(file.path()).unwrap();
    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0].id, 0);
    assert_eq!(reviews[0].text, "The food is decent");
    assert_eq!(reviews[0].sentiment.as_deref(), Some("positive"));
    assert_eq!(reviews[1].sentiment.as_deref(), Some("negative"));
}

#[test]
fn sentiment_column_is_optional() {
    let file = write_csv("review\nAmbience is delightful\n");
    let reviews = load_reviews(file.path()).unwrap();
    assert_eq!(reviews.len(), 1);
    assert!(reviews[0].sentiment.is_none());
}

#[test]
fn missing_review_column_is_an_error() {
    let file = write_csv("text,sentiment\nhello,positive\n");
    assert!(load_reviews(file.path()).is_err());
}

#[test]
fn loads_single_ground_truth_row() {
    let file = write_csv(
        "review,true_entity,true_aspect\nThe food was somewhat tasty,food,somewhat tasty\n",
    );
    let truth = load_ground_truth(file.path()).unwrap();
    assert_eq!(truth.review, "The food was somewhat tasty");
    assert_eq!(truth.true_entity, "food");
    assert_eq!(truth.true_aspect, "somewhat tasty");
}

#[test]
fn extra_ground_truth_rows_use_the_first() {
    let file = write_csv(
        "review,true_entity,true_aspect\nfirst review,food,tasty\nsecond review,staff,rude\n",
    );
    let truth = load_ground_truth(file.path()).unwrap();
    assert_eq!(truth.true_entity, "food");
}

#[test]
fn empty_ground_truth_is_fatal() {
    let file = write_csv("review,true_entity,true_aspect\n");
    assert!(load_ground_truth(file.path()).is_err());
}
