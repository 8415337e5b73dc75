//! Configuration for strategy selection and lexicon loading
//!
//! The strategy is a deployment-time choice, not a per-call one: a config
//! file selects either the rule-based engine or the zero-shot delegate, and
//! may point at a lexicon file overriding the built-in Indonesian lexicon.

use crate::lexicon::Lexicon;
use crate::review::ReviewClassifier;
use crate::rules::RuleBasedStrategy;
use crate::strategy::ClassificationStrategy;
use crate::zeroshot::{ZeroShotConfig, ZeroShotStrategy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use ulasan_core::{Error, Result};

/// Top-level triage configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriageConfig {
    /// Active classification strategy
    #[serde(default)]
    pub strategy: StrategySpec,

    /// Optional lexicon file overriding the built-in lexicon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lexicon: Option<PathBuf>,
}

/// Strategy selection specification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StrategySpec {
    /// Deterministic keyword rule engine
    #[default]
    RuleBased,

    /// Delegate to an external zero-shot inference endpoint
    ZeroShot(ZeroShotConfig),
}

impl TriageConfig {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| Error::config(format!("invalid config: {e}")))
    }

    /// Load from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// The active lexicon: the configured file, or the built-in default
    pub fn load_lexicon(&self) -> Result<Lexicon> {
        let lexicon = match &self.lexicon {
            Some(path) => {
                info!(path = %path.display(), "loading lexicon");
                Lexicon::from_file(path)?
            }
            None => Lexicon::builtin(),
        };
        lexicon.validate()?;
        Ok(lexicon)
    }

    /// Assemble the review classifier this configuration describes
    pub fn build_classifier(&self) -> Result<ReviewClassifier> {
        let lexicon = self.load_lexicon()?;

        let strategy: Arc<dyn ClassificationStrategy> = match &self.strategy {
            StrategySpec::RuleBased => {
                info!("initializing rule-based strategy");
                Arc::new(RuleBasedStrategy::new(&lexicon)?)
            }
            StrategySpec::ZeroShot(config) => {
                info!(endpoint = %config.endpoint, model = %config.model,
                    "initializing zero-shot strategy");
                Arc::new(ZeroShotStrategy::new(config.clone()))
            }
        };

        Ok(ReviewClassifier::new(strategy, &lexicon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_selects_rule_based() {
        let config = TriageConfig::from_yaml("{}").unwrap();
        assert_eq!(config.strategy, StrategySpec::RuleBased);
        assert!(config.lexicon.is_none());

        let classifier = config.build_classifier().unwrap();
        assert_eq!(classifier.strategy_name(), "rule-based");
    }

    #[test]
    fn test_zero_shot_config() {
        let yaml = r#"
strategy:
  type: zero_shot
  endpoint: http://localhost:8080
  model: facebook/bart-large-mnli
  timeout_ms: 5000
"#;

        let config = TriageConfig::from_yaml(yaml).unwrap();
        match &config.strategy {
            StrategySpec::ZeroShot(zs) => {
                assert_eq!(zs.endpoint, "http://localhost:8080");
                assert_eq!(zs.timeout_ms, 5000);
            }
            other => panic!("unexpected strategy: {other:?}"),
        }

        let classifier = config.build_classifier().unwrap();
        assert_eq!(classifier.strategy_name(), "zero-shot");
    }

    #[test]
    fn test_rule_based_tag() {
        let config = TriageConfig::from_yaml("strategy:\n  type: rule_based\n").unwrap();
        assert_eq!(config.strategy, StrategySpec::RuleBased);
    }

    #[test]
    fn test_invalid_strategy_rejected() {
        let result = TriageConfig::from_yaml("strategy:\n  type: crystal_ball\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_missing_lexicon_file_is_an_error() {
        let config = TriageConfig {
            lexicon: Some(PathBuf::from("/nonexistent/lexicon.yaml")),
            ..Default::default()
        };
        assert!(config.load_lexicon().is_err());
    }
}
