//! Error types for ulasan

/// Result type alias using ulasan's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for classification operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input outside the validated domain (non-text value, rating out of 1..=5,
    /// or a label set the active strategy does not recognize)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Review text is empty or whitespace-only after trimming.
    ///
    /// User-correctable: callers should re-prompt rather than abort.
    #[error("review text is empty")]
    EmptyInput,

    /// The external zero-shot classifier failed: connect/load failure,
    /// inference timeout, or a malformed response
    #[error("external classifier error: {0}")]
    ExternalClassifier(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a new invalid-input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new external-classifier error
    pub fn external_classifier(msg: impl Into<String>) -> Self {
        Self::ExternalClassifier(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether the caller can recover by correcting the submitted review
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, Self::EmptyInput | Self::InvalidInput(_))
    }
}
