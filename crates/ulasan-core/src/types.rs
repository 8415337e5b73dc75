//! Core types for ulasan

use serde::{Deserialize, Serialize};
use std::fmt;

/// One strategy-classified dimension of a review.
///
/// Sentiment is not an axis: it is derived from the star rating, never from
/// the review text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Problem topic reported by the review
    Topic,
    /// Apparent ICT-literacy level of the reviewer
    IctLiteracy,
    /// Emotional tone of the review
    Emotion,
}

impl Axis {
    /// All strategy-classified axes, in classification order
    pub const ALL: [Axis; 3] = [Axis::Topic, Axis::IctLiteracy, Axis::Emotion];

    /// Stable identifier used in logs and configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Topic => "topic",
            Self::IctLiteracy => "ict_literacy",
            Self::Emotion => "emotion",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A review submission: free text plus a 1-5 star rating
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewInput {
    /// Raw review text; may be empty or whitespace-only, rejected by the facade
    pub text: String,

    /// Star rating, must be within 1..=5
    pub rating: u8,
}

impl ReviewInput {
    /// Create a new review input
    pub fn new(text: impl Into<String>, rating: u8) -> Self {
        Self {
            text: text.into(),
            rating,
        }
    }
}

/// Sentiment derived from the star rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Map a validated rating to a sentiment: >=4 positive, ==3 neutral,
    /// <=2 negative.
    ///
    /// Callers must validate `rating` is within 1..=5 first; this mapping is
    /// total and does not re-check the domain.
    pub fn from_rating(rating: u8) -> Self {
        if rating >= 4 {
            Self::Positive
        } else if rating == 3 {
            Self::Neutral
        } else {
            Self::Negative
        }
    }

    /// The canonical label string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four labels produced for one review.
///
/// Plain value with no identity beyond its fields; created fresh per
/// classification call and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Problem topic label
    pub topic: String,

    /// ICT-literacy label
    pub ict_literacy: String,

    /// Emotional tone label
    pub emotion: String,

    /// Sentiment derived from the rating
    pub sentiment: Sentiment,
}
