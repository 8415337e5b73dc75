//! Review classification facade
//!
//! Validates a review submission, runs the active strategy once per axis, and
//! derives sentiment from the star rating. Classification is all-or-nothing:
//! an axis failure fails the whole call and no partial result escapes.

use crate::lexicon::{LabelSet, Lexicon};
use crate::strategy::ClassificationStrategy;
use std::sync::Arc;
use tracing::debug;
use ulasan_core::{Axis, ClassificationResult, Error, Result, ReviewInput, Sentiment};

/// Facade over one `ClassificationStrategy` and the three axis label sets.
///
/// Stateless between calls; safe to share across tasks and call concurrently.
pub struct ReviewClassifier {
    strategy: Arc<dyn ClassificationStrategy>,
    topic_labels: LabelSet,
    ict_labels: LabelSet,
    emotion_labels: LabelSet,
}

impl ReviewClassifier {
    /// Create a classifier from a strategy and the lexicon's label sets
    pub fn new(strategy: Arc<dyn ClassificationStrategy>, lexicon: &Lexicon) -> Self {
        Self {
            strategy,
            topic_labels: lexicon.label_set(Axis::Topic),
            ict_labels: lexicon.label_set(Axis::IctLiteracy),
            emotion_labels: lexicon.label_set(Axis::Emotion),
        }
    }

    /// Rule-based classifier over the built-in lexicon
    pub fn rule_based() -> Result<Self> {
        let lexicon = Lexicon::builtin();
        let strategy = crate::rules::RuleBasedStrategy::new(&lexicon)?;
        Ok(Self::new(Arc::new(strategy), &lexicon))
    }

    /// Name of the active strategy
    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// Classify one review into its four labels.
    ///
    /// Fails with `EmptyInput` when the text is empty after trimming (a
    /// user-correctable condition, not a fault) and `InvalidInput` when the
    /// rating is outside 1..=5.
    pub async fn classify(&self, input: &ReviewInput) -> Result<ClassificationResult> {
        if input.text.trim().is_empty() {
            return Err(Error::EmptyInput);
        }
        if !(1..=5).contains(&input.rating) {
            return Err(Error::invalid_input(format!(
                "rating {} is outside 1..=5",
                input.rating
            )));
        }

        debug!(strategy = self.strategy.name(), rating = input.rating, "classifying review");

        let topic = self.strategy.classify(&input.text, &self.topic_labels).await?;
        let ict_literacy = self.strategy.classify(&input.text, &self.ict_labels).await?;
        let emotion = self.strategy.classify(&input.text, &self.emotion_labels).await?;
        let sentiment = Sentiment::from_rating(input.rating);

        Ok(ClassificationResult {
            topic,
            ict_literacy,
            emotion,
            sentiment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_text_rejected() {
        let classifier = ReviewClassifier::rule_based().unwrap();

        for text in ["", "   ", "\n\t"] {
            let result = classifier.classify(&ReviewInput::new(text, 3)).await;
            assert!(matches!(result, Err(Error::EmptyInput)), "text: {text:?}");
        }
    }

    #[tokio::test]
    async fn test_out_of_domain_rating_rejected() {
        let classifier = ReviewClassifier::rule_based().unwrap();

        for rating in [0, 6, 255] {
            let result = classifier
                .classify(&ReviewInput::new("lumayan mudah", rating))
                .await;
            assert!(matches!(result, Err(Error::InvalidInput(_))), "rating: {rating}");
        }
    }

    #[tokio::test]
    async fn test_sentiment_follows_rating() {
        let classifier = ReviewClassifier::rule_based().unwrap();

        for (rating, sentiment) in [
            (1, Sentiment::Negative),
            (2, Sentiment::Negative),
            (3, Sentiment::Neutral),
            (4, Sentiment::Positive),
            (5, Sentiment::Positive),
        ] {
            let result = classifier
                .classify(&ReviewInput::new("materi tidak muncul", rating))
                .await
                .unwrap();
            assert_eq!(result.sentiment, sentiment, "rating: {rating}");
        }
    }
}
