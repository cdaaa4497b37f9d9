//! Summarize request parsing.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "text": "Long document ...",
//!   "ratio": 0.3,
//!   "method": "extractive"
//! }
//! ```
//!
//! Only `text` is required. Fields are inspected as raw JSON values so each
//! kind of mistake maps to its own error: a missing or non-string `text` and
//! an unknown `method` are the caller's fault, while a `ratio` that cannot be
//! read as a number fails the summarization itself.

use serde::Deserialize;
use serde_json::Value;

use crate::errors::{Result, SummarizeError};
use crate::types::{ScoringMethod, SummarizerConfig};

/// Request fields as received, before interpretation.
#[derive(Debug, Default, Deserialize)]
struct RawRequest {
    #[serde(default)]
    text: Option<Value>,
    #[serde(default)]
    ratio: Option<Value>,
    #[serde(default)]
    method: Option<Value>,
}

/// A validated summarize request.
#[derive(Debug, Clone, PartialEq)]
pub struct SummarizeRequest {
    pub text: String,
    pub config: SummarizerConfig,
}

impl SummarizeRequest {
    /// Parse a request body, filling omitted fields from `defaults`.
    pub fn from_slice(body: &[u8], defaults: &SummarizerConfig) -> Result<Self> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| SummarizeError::MalformedRequest(e.to_string()))?;
        Self::from_value(value, defaults)
    }

    /// Interpret an already-parsed JSON value.
    ///
    /// Checks run in order `text`, `method`, `ratio`; the first failure is
    /// returned.
    pub fn from_value(value: Value, defaults: &SummarizerConfig) -> Result<Self> {
        if !value.is_object() {
            return Err(SummarizeError::MissingText);
        }
        let raw: RawRequest = serde_json::from_value(value)
            .map_err(|e| SummarizeError::MalformedRequest(e.to_string()))?;

        let text = match raw.text {
            None => return Err(SummarizeError::MissingText),
            Some(Value::String(text)) => text,
            Some(_) => return Err(SummarizeError::InvalidText),
        };

        let method = match raw.method {
            None => defaults.method,
            Some(Value::String(name)) => name.parse::<ScoringMethod>()?,
            Some(other) => return Err(SummarizeError::invalid_method(other.to_string())),
        };

        let ratio = match raw.ratio {
            None => defaults.ratio,
            Some(value) => parse_ratio(&value)?,
        };

        Ok(Self {
            text,
            config: SummarizerConfig { ratio, method },
        })
    }
}

/// Read a ratio from a JSON number or numeric string.
fn parse_ratio(value: &Value) -> Result<f64> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| SummarizeError::NonNumericRatio(n.to_string())),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| SummarizeError::NonNumericRatio(format!("'{s}'"))),
        other => Err(SummarizeError::NonNumericRatio(other.to_string())),
    }
}
