//! End-to-end classification behavior over the built-in lexicon

use proptest::prelude::*;
use ulasan_classifiers::{Lexicon, ReviewClassifier};
use ulasan_core::{Axis, ReviewInput, Sentiment};

#[tokio::test]
async fn test_negative_review_end_to_end() {
    let classifier = ReviewClassifier::rule_based().unwrap();

    let input = ReviewInput::new("Aplikasi lemot dan sering error, saya bingung cara pakainya", 2);
    let result = classifier.classify(&input).await.unwrap();

    // bug and performance both score 1; the tie resolves to the
    // earlier-declared bug label
    assert_eq!(result.topic, "Bug atau error aplikasi");
    assert_eq!(result.ict_literacy, "Low ICT literacy");
    assert_eq!(result.emotion, "confusion");
    assert_eq!(result.sentiment, Sentiment::Negative);
}

#[tokio::test]
async fn test_positive_review_end_to_end() {
    let classifier = ReviewClassifier::rule_based().unwrap();

    let input = ReviewInput::new("Fiturnya bagus dan sangat membantu, saya puas", 5);
    let result = classifier.classify(&input).await.unwrap();

    // no topic keyword present: all-zero defaults to the first-declared topic
    assert_eq!(result.topic, "Akses kelas dan materi");
    assert_eq!(result.ict_literacy, "Medium ICT literacy");
    assert_eq!(result.emotion, "satisfaction");
    assert_eq!(result.sentiment, Sentiment::Positive);
}

#[tokio::test]
async fn test_technical_review_end_to_end() {
    let classifier = ReviewClassifier::rule_based().unwrap();

    let input = ReviewInput::new(
        "Sudah coba reinstall tapi masih force close saat video call",
        3,
    );
    let result = classifier.classify(&input).await.unwrap();

    // video call and force close tie 1-1; video conference is declared first
    assert_eq!(result.topic, "Video conference bermasalah");
    // High literacy signals outrank the technical-issue category
    assert_eq!(result.ict_literacy, "High ICT literacy");
    assert_eq!(result.sentiment, Sentiment::Neutral);
}

#[tokio::test]
async fn test_repeated_calls_are_identical() {
    let classifier = ReviewClassifier::rule_based().unwrap();
    let input = ReviewInput::new("notifikasi tidak muncul dan aplikasinya berat", 2);

    let first = classifier.classify(&input).await.unwrap();
    for _ in 0..5 {
        let again = classifier.classify(&input).await.unwrap();
        assert_eq!(again, first);
    }
}

proptest! {
    /// Same input, same configuration, same result
    #[test]
    fn prop_classification_is_deterministic(text in "\\PC{1,80}", rating in 1u8..=5) {
        prop_assume!(!text.trim().is_empty());

        let rt = tokio::runtime::Runtime::new().unwrap();
        let classifier = ReviewClassifier::rule_based().unwrap();

        let a = rt
            .block_on(classifier.classify(&ReviewInput::new(text.clone(), rating)))
            .unwrap();
        let b = rt
            .block_on(classifier.classify(&ReviewInput::new(text, rating)))
            .unwrap();
        prop_assert_eq!(a, b);
    }

    /// Every label comes from its axis's declared set and sentiment follows
    /// the rating mapping
    #[test]
    fn prop_labels_come_from_declared_sets(text in "\\PC{1,80}", rating in 1u8..=5) {
        prop_assume!(!text.trim().is_empty());

        let rt = tokio::runtime::Runtime::new().unwrap();
        let classifier = ReviewClassifier::rule_based().unwrap();
        let lexicon = Lexicon::builtin();

        let result = rt
            .block_on(classifier.classify(&ReviewInput::new(text, rating)))
            .unwrap();

        prop_assert!(lexicon.label_set(Axis::Topic).contains(&result.topic));
        prop_assert!(lexicon.label_set(Axis::IctLiteracy).contains(&result.ict_literacy));
        prop_assert!(lexicon.label_set(Axis::Emotion).contains(&result.emotion));
        prop_assert_eq!(result.sentiment, Sentiment::from_rating(rating));
    }
}
