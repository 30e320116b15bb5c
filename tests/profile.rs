use review_assistant::data::{profile::profile_corpus, reviews::Review};

fn review(id: usize, text: &str, sentiment: Option<&str>) -> Review {
    Review {
        id,
        text: text.to_string(),
        sentiment: sentiment.map(str::to_string),
    }
}

#[test]
fn profile_counts_words_and_sentiments() {
    let reviews = vec![
        review(0, "The food is decent", Some("positive")),
        review(1, "", Some("negative")),
        review(2, "Great", Some("positive")),
    ];
    let profile = profile_corpus(&reviews);
    assert_eq!(profile.rows, 3);
    assert_eq!(profile.empty_reviews, 1);
    assert_eq!(profile.min_words, 0);
    assert_eq!(profile.max_words, 4);
    assert!((profile.mean_words - 5.0 / 3.0).abs() < 1e-9);

    let labels: Vec<&str> = profile.sentiment_counts.keys().map(String::as_str).collect();
    assert_eq!(labels, vec!["positive", "negative"]);
    assert_eq!(profile.sentiment_counts["positive"], 2);
}

#[test]
fn empty_corpus_profile_is_zeroed() {
    let profile = profile_corpus(&[]);
    assert_eq!(profile.rows, 0);
    assert_eq!(profile.min_words, 0);
    assert_eq!(profile.max_words, 0);
    assert_eq!(profile.mean_words, 0.0);
    assert!(profile.sentiment_counts.is_empty());
}
