//! Rule-based classification strategy
//!
//! Deterministic lexicon evaluation: scored first-max selection for the topic
//! and emotion axes, fixed-precedence first-match for ICT literacy.
//! Synchronous and sub-millisecond; the async signature exists only to match
//! the strategy contract.

use crate::keyword::{IctMatcher, KeywordScorer};
use crate::lexicon::{LabelSet, Lexicon};
use crate::strategy::ClassificationStrategy;
use async_trait::async_trait;
use tracing::debug;
use ulasan_core::{Axis, Error, Result};

pub struct RuleBasedStrategy {
    name: String,
    topic: KeywordScorer,
    emotion: KeywordScorer,
    ict: IctMatcher,
    topic_labels: LabelSet,
    ict_labels: LabelSet,
    emotion_labels: LabelSet,
}

impl RuleBasedStrategy {
    /// Build the strategy from a validated lexicon
    pub fn new(lexicon: &Lexicon) -> Result<Self> {
        lexicon.validate()?;

        Ok(Self {
            name: "rule-based".to_string(),
            topic: KeywordScorer::new(&lexicon.topic)?,
            emotion: KeywordScorer::new(&lexicon.emotion)?,
            ict: IctMatcher::new(&lexicon.ict)?,
            topic_labels: lexicon.label_set(Axis::Topic),
            ict_labels: lexicon.label_set(Axis::IctLiteracy),
            emotion_labels: lexicon.label_set(Axis::Emotion),
        })
    }

    /// Build the strategy over the built-in Indonesian lexicon
    pub fn builtin() -> Result<Self> {
        Self::new(&Lexicon::builtin())
    }

    /// The labels this strategy was configured with for one axis
    pub fn label_set(&self, axis: Axis) -> &LabelSet {
        match axis {
            Axis::Topic => &self.topic_labels,
            Axis::IctLiteracy => &self.ict_labels,
            Axis::Emotion => &self.emotion_labels,
        }
    }
}

#[async_trait]
impl ClassificationStrategy for RuleBasedStrategy {
    async fn classify(&self, text: &str, labels: &LabelSet) -> Result<String> {
        if labels != self.label_set(labels.axis) {
            return Err(Error::invalid_input(format!(
                "label set does not match the configured {} lexicon",
                labels.axis
            )));
        }

        let label = match labels.axis {
            Axis::Topic => self.topic.classify(text),
            Axis::IctLiteracy => self.ict.classify(text),
            Axis::Emotion => self.emotion.classify(text),
        };
        debug!(axis = %labels.axis, label, "rule-based classification");

        Ok(label.to_string())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strategy() -> RuleBasedStrategy {
        RuleBasedStrategy::builtin().unwrap()
    }

    async fn classify(s: &RuleBasedStrategy, text: &str, axis: Axis) -> String {
        ClassificationStrategy::classify(s, text, s.label_set(axis))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_topic_max_score_wins() {
        let s = strategy();
        let topic = classify(&s, "aplikasinya lemot, loading lama, berat sekali", Axis::Topic).await;
        assert_eq!(topic, "Masalah performa atau lemot");
    }

    #[tokio::test]
    async fn test_topic_tie_resolves_to_first_declared() {
        let s = strategy();
        // one keyword from each of two labels, declared in a known order
        let topic = classify(&s, "pemberitahuan dan upload", Axis::Topic).await;
        assert_eq!(topic, "Notifikasi tidak muncul");
    }

    #[tokio::test]
    async fn test_topic_all_zero_defaults_to_first_declared() {
        let s = strategy();
        let topic = classify(&s, "halo semuanya", Axis::Topic).await;
        assert_eq!(topic, "Akses kelas dan materi");
    }

    #[tokio::test]
    async fn test_ict_low_priority_beats_technical() {
        let s = strategy();
        let ict = classify(&s, "saya bingung kenapa sering error", Axis::IctLiteracy).await;
        assert_eq!(ict, "Low ICT literacy");
    }

    #[tokio::test]
    async fn test_ict_defaults_to_medium() {
        let s = strategy();
        let ict = classify(&s, "halo semuanya", Axis::IctLiteracy).await;
        assert_eq!(ict, "Medium ICT literacy");
    }

    #[tokio::test]
    async fn test_emotion_all_zero_is_neutral() {
        let s = strategy();
        let emotion = classify(&s, "halo semuanya", Axis::Emotion).await;
        assert_eq!(emotion, "neutral");
    }

    #[tokio::test]
    async fn test_case_insensitive_matching() {
        let s = strategy();
        let topic = classify(&s, "ERROR terjadi", Axis::Topic).await;
        assert_eq!(topic, "Bug atau error aplikasi");

        let ict = classify(&s, "ERROR terjadi", Axis::IctLiteracy).await;
        assert_eq!(ict, "Technical issue (not ICT literacy)");
    }

    #[tokio::test]
    async fn test_foreign_label_set_rejected() {
        let s = strategy();
        let foreign = LabelSet::new(Axis::Topic, ["bugs", "performance"]);
        let result = s.classify("error", &foreign).await;
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }
}
