//! Error types for summarization.
//!
//! Every failure is classified into an [`ErrorKind`] so that the request
//! boundary can translate it into a response without inspecting variants.

use thiserror::Error;

/// Result type alias for summarization operations.
pub type Result<T> = std::result::Result<T, SummarizeError>;

/// Broad classification of a [`SummarizeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller sent something unusable. Reported, never retried.
    InputValidation,
    /// The pipeline could not produce a summary for otherwise valid input.
    Computation,
    /// Language resources or configuration could not be loaded.
    Startup,
}

/// Errors that can occur while loading resources or summarizing text.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// The request carried no `text` field.
    #[error("No text provided")]
    MissingText,

    /// The `text` field was present but not a string.
    #[error("Text must be a string")]
    InvalidText,

    /// The `method` field named an unknown scoring strategy.
    #[error("Invalid summarization method: {method}")]
    InvalidMethod { method: String },

    /// The request body could not be parsed at all.
    #[error("malformed request body: {0}")]
    MalformedRequest(String),

    /// Ratio is NaN or infinite.
    #[error("invalid ratio {0}: must be a finite number")]
    InvalidRatio(f64),

    /// Ratio could not be interpreted as a number.
    #[error("could not convert ratio to float: {0}")]
    NonNumericRatio(String),

    /// No stopword list exists for the requested language.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// A language resource loaded but was unusable.
    #[error("language resource unavailable: {0}")]
    ResourceUnavailable(String),

    /// Server configuration was invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error while reading configuration or input.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl SummarizeError {
    /// Create an invalid method error.
    #[must_use]
    pub fn invalid_method(method: impl Into<String>) -> Self {
        Self::InvalidMethod {
            method: method.into(),
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingText
            | Self::InvalidText
            | Self::InvalidMethod { .. }
            | Self::MalformedRequest(_) => ErrorKind::InputValidation,
            Self::InvalidRatio(_) | Self::NonNumericRatio(_) => ErrorKind::Computation,
            Self::UnsupportedLanguage(_)
            | Self::ResourceUnavailable(_)
            | Self::Config(_)
            | Self::Io(_) => ErrorKind::Startup,
        }
    }

    /// Returns `true` if the caller is at fault.
    pub fn is_client_error(&self) -> bool {
        self.kind() == ErrorKind::InputValidation
    }
}
