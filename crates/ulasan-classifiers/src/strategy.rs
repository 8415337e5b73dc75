//! Classification strategy trait and common types

use crate::lexicon::LabelSet;
use async_trait::async_trait;
use ulasan_core::Result;

/// Trait for label-selection strategies.
///
/// A strategy selects exactly one label from an axis's candidate set for the
/// given text. The active strategy is chosen at configuration time, not per
/// call; the facade treats it as an opaque capability so the rule engine and
/// the zero-shot delegate are interchangeable.
#[async_trait]
pub trait ClassificationStrategy: Send + Sync {
    /// Select one label from `labels` for the given text
    async fn classify(&self, text: &str, labels: &LabelSet) -> Result<String>;

    /// Get the strategy name
    fn name(&self) -> &str;
}
