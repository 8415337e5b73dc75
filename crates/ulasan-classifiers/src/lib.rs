//! Ulasan Classifiers
//!
//! Multi-axis triage classification for e-learning product reviews: problem
//! topic, ICT-literacy level, and emotional tone are selected from fixed
//! label sets by a pluggable strategy, and sentiment is derived from the
//! star rating.
//!
//! Two strategies implement the same contract:
//! - A deterministic keyword rule engine (scored first-max for topic and
//!   emotion, fixed-precedence first-match for ICT literacy)
//! - A delegate to an external zero-shot inference endpoint

pub mod config;
pub mod keyword;
pub mod lexicon;
pub mod review;
pub mod rules;
pub mod strategy;
pub mod zeroshot;

pub use config::{StrategySpec, TriageConfig};
pub use keyword::{IctMatcher, KeywordScorer};
pub use lexicon::{IctRules, KeywordEntry, KeywordTable, LabelSet, Lexicon};
pub use review::ReviewClassifier;
pub use rules::RuleBasedStrategy;
pub use strategy::ClassificationStrategy;
pub use zeroshot::{ZeroShotConfig, ZeroShotStrategy};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{StrategySpec, TriageConfig};
    pub use crate::lexicon::{LabelSet, Lexicon};
    pub use crate::review::ReviewClassifier;
    pub use crate::rules::RuleBasedStrategy;
    pub use crate::strategy::ClassificationStrategy;
    pub use crate::zeroshot::{ZeroShotConfig, ZeroShotStrategy};
}
