//! Core types shared across the pipeline.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SummarizeError};

/// Fraction of sentences kept when the caller does not specify one.
pub const DEFAULT_RATIO: f64 = 0.3;

/// Documents with at most this many sentences are returned whole.
pub const SHORT_DOCUMENT_SENTENCES: usize = 3;

/// A sentence of the normalized document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    /// Sentence text without surrounding whitespace
    pub text: String,
    /// Byte offset of the first character in the normalized document
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
    /// Position in the document (0-based)
    pub index: usize,
}

impl Sentence {
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
        }
    }
}

/// Sentence scoring strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMethod {
    /// Sum of document-level word frequencies over the sentence's words.
    #[default]
    Extractive,
    /// Count of the sentence's words that rank among the most common.
    Frequency,
}

impl ScoringMethod {
    /// Every supported method, in declaration order.
    pub const ALL: [ScoringMethod; 2] = [ScoringMethod::Extractive, ScoringMethod::Frequency];

    /// Returns the name used in requests and configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Extractive => "extractive",
            Self::Frequency => "frequency",
        }
    }
}

impl fmt::Display for ScoringMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoringMethod {
    type Err = SummarizeError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "extractive" => Ok(Self::Extractive),
            "frequency" => Ok(Self::Frequency),
            other => Err(SummarizeError::invalid_method(other)),
        }
    }
}

/// Per-request summarization settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Target fraction of sentences to keep
    pub ratio: f64,
    /// Scoring strategy
    pub method: ScoringMethod,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            ratio: DEFAULT_RATIO,
            method: ScoringMethod::default(),
        }
    }
}

impl SummarizerConfig {
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    pub fn with_method(mut self, method: ScoringMethod) -> Self {
        self.method = method;
        self
    }

    /// Reject ratios that cannot produce a sentence count.
    ///
    /// Negative ratios select a single sentence and ratios above 1.0 select
    /// every sentence.
    pub fn validate(&self) -> Result<()> {
        if !self.ratio.is_finite() {
            return Err(SummarizeError::InvalidRatio(self.ratio));
        }
        Ok(())
    }

    /// Number of sentences to select from a document of `sentence_count`.
    ///
    /// `max(1, floor(sentence_count * ratio))`, never more than
    /// `sentence_count`. Assumes the config has been validated.
    pub fn target_sentences(&self, sentence_count: usize) -> usize {
        scaled_count(sentence_count, self.ratio)
            .max(1)
            .min(sentence_count)
    }
}

/// `floor(count * ratio)`, saturating at `usize::MAX`.
pub(crate) fn scaled_count(count: usize, ratio: f64) -> usize {
    (count as f64 * ratio).floor() as usize
}

/// The result of summarizing one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Selected sentences joined by a single space
    pub text: String,
    /// Indices of the selected sentences, ascending
    pub selected: Vec<usize>,
    /// Number of sentences in the normalized document
    pub sentence_count: usize,
    /// Whether the document was short enough to return unchanged
    pub short_circuit: bool,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
