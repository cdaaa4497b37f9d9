//! Request orchestration
//!
//! [`SummarizeService`] is the only place where internal errors become
//! response shapes: client-input errors map to `400`, everything else that
//! fails while summarizing maps to `500`, always with an `{"error": ...}`
//! body. [`server`] exposes the service over HTTP.

pub mod request;
pub mod server;

pub use request::SummarizeRequest;

use serde::Serialize;

use crate::errors::{Result, SummarizeError};
use crate::pipeline::runner::Summarizer;
use crate::types::{Summary, SummarizerConfig};

/// Outcome class of a handled request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStatus {
    Ok,
    BadRequest,
    InternalError,
}

impl ResponseStatus {
    /// HTTP status code.
    pub fn code(&self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::BadRequest => 400,
            Self::InternalError => 500,
        }
    }
}

/// JSON response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Summary { summary: String },
    Error { error: String },
}

/// A status plus body, independent of any HTTP framework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceResponse {
    pub status: ResponseStatus,
    pub body: ResponseBody,
}

impl ServiceResponse {
    pub fn summary(summary: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Ok,
            body: ResponseBody::Summary {
                summary: summary.into(),
            },
        }
    }

    pub fn error(err: &SummarizeError) -> Self {
        let status = if err.is_client_error() {
            ResponseStatus::BadRequest
        } else {
            ResponseStatus::InternalError
        };
        Self {
            status,
            body: ResponseBody::Error {
                error: err.to_string(),
            },
        }
    }
}

/// Parses requests, runs the summarizer and shapes responses.
#[derive(Debug, Clone)]
pub struct SummarizeService {
    summarizer: Summarizer,
    defaults: SummarizerConfig,
}

impl SummarizeService {
    /// `defaults` fill in `ratio` and `method` when a request omits them.
    pub fn new(summarizer: Summarizer, defaults: SummarizerConfig) -> Self {
        Self {
            summarizer,
            defaults,
        }
    }

    /// Handle a raw request body.
    pub fn handle(&self, body: &[u8]) -> ServiceResponse {
        match SummarizeRequest::from_slice(body, &self.defaults)
            .and_then(|request| self.summarize(&request))
        {
            Ok(summary) => ServiceResponse::summary(summary.text),
            Err(err) => {
                if err.is_client_error() {
                    tracing::warn!(error = %err, "rejected summarize request");
                } else {
                    tracing::error!(error = %err, "summarization failed");
                }
                ServiceResponse::error(&err)
            }
        }
    }

    /// Run the pipeline for a parsed request.
    pub fn summarize(&self, request: &SummarizeRequest) -> Result<Summary> {
        let summary = self.summarizer.summarize(&request.text, &request.config)?;
        tracing::debug!(
            method = %request.config.method,
            ratio = request.config.ratio,
            sentences = summary.sentence_count,
            selected = summary.selected.len(),
            "summarize request served"
        );
        Ok(summary)
    }
}
