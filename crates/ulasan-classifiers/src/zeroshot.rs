//! Zero-shot delegate strategy
//!
//! Forwards classification to an external zero-shot inference endpoint
//! (Hugging Face inference API shape): the request carries the text and the
//! candidate labels in single-label mode, the response is a ranked sequence
//! of (label, confidence) pairs, and only the top-ranked label is used.
//!
//! The HTTP handle is built lazily exactly once per process and shared
//! read-only across calls. The delegate never retries: connect failures,
//! timeouts, and malformed responses all surface as `ExternalClassifier`
//! errors for the caller to handle (retry, or fall back to the rule-based
//! strategy).

use crate::lexicon::LabelSet;
use crate::strategy::ClassificationStrategy;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::debug;
use ulasan_core::{Error, Result};

/// Configuration for the zero-shot inference endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZeroShotConfig {
    /// Base URL of the inference service
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model identifier on the inference service
    #[serde(default = "default_model")]
    pub model: String,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Optional bearer token for the inference service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
}

impl Default for ZeroShotConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            timeout_ms: default_timeout_ms(),
            api_token: None,
        }
    }
}

impl ZeroShotConfig {
    fn url(&self) -> String {
        format!("{}/models/{}", self.endpoint.trim_end_matches('/'), self.model)
    }
}

fn default_endpoint() -> String {
    "https://api-inference.huggingface.co".to_string()
}

fn default_model() -> String {
    "facebook/bart-large-mnli".to_string()
}

fn default_timeout_ms() -> u64 {
    30_000
}

#[derive(Debug, Serialize)]
struct ZeroShotRequest<'a> {
    inputs: &'a str,
    parameters: ZeroShotParameters<'a>,
}

#[derive(Debug, Serialize)]
struct ZeroShotParameters<'a> {
    candidate_labels: &'a [String],
    multi_label: bool,
}

/// Ranked response: `labels[0]` is the top-ranked candidate
#[derive(Debug, Deserialize)]
struct ZeroShotResponse {
    labels: Vec<String>,
    #[serde(default)]
    scores: Vec<f32>,
}

pub struct ZeroShotStrategy {
    name: String,
    config: ZeroShotConfig,
    client: OnceCell<reqwest::Client>,
}

impl ZeroShotStrategy {
    pub fn new(config: ZeroShotConfig) -> Self {
        Self {
            name: "zero-shot".to_string(),
            config,
            client: OnceCell::new(),
        }
    }

    async fn client(&self) -> Result<&reqwest::Client> {
        self.client
            .get_or_try_init(|| async {
                debug!(endpoint = %self.config.endpoint, model = %self.config.model,
                    "initializing zero-shot inference client");
                reqwest::Client::builder()
                    .timeout(Duration::from_millis(self.config.timeout_ms))
                    .build()
                    .map_err(|e| {
                        Error::external_classifier(format!(
                            "failed to initialize inference client: {e}"
                        ))
                    })
            })
            .await
    }
}

#[async_trait]
impl ClassificationStrategy for ZeroShotStrategy {
    async fn classify(&self, text: &str, labels: &LabelSet) -> Result<String> {
        let client = self.client().await?;

        let request = ZeroShotRequest {
            inputs: text,
            parameters: ZeroShotParameters {
                candidate_labels: &labels.labels,
                multi_label: false,
            },
        };

        let mut builder = client.post(self.config.url()).json(&request);
        if let Some(token) = &self.config.api_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::external_classifier("inference request timed out")
            } else {
                Error::external_classifier(format!("inference request failed: {e}"))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::external_classifier(format!(
                "inference endpoint returned {status}"
            )));
        }

        let ranked: ZeroShotResponse = response.json().await.map_err(|e| {
            Error::external_classifier(format!("malformed inference response: {e}"))
        })?;

        select_top_label(ranked, labels)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Validate the ranked response against the candidate set and take the
/// top-ranked label; confidence scores are only logged.
fn select_top_label(ranked: ZeroShotResponse, labels: &LabelSet) -> Result<String> {
    let top = ranked
        .labels
        .into_iter()
        .next()
        .ok_or_else(|| Error::external_classifier("inference response contains no labels"))?;

    if !labels.contains(&top) {
        return Err(Error::external_classifier(format!(
            "inference returned {top:?}, which is not a candidate {} label",
            labels.axis
        )));
    }

    debug!(axis = %labels.axis, label = %top, score = ranked.scores.first().copied(),
        "zero-shot classification");

    Ok(top)
}
