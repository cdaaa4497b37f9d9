//! # rapid_summarizer
//!
//! Frequency-based extractive text summarization.
//!
//! A document is normalized, split into sentences, and every sentence is
//! scored from the word frequencies of the whole document. The best
//! sentences are returned in their original order.
//!
//! ## Features
//!
//! - **Two scorers**: frequency sums (`extractive`) or counts of the most
//!   common words (`frequency`)
//! - **Unicode-aware**: UAX #29 sentence and word segmentation
//! - **Deterministic**: equal scores always resolve to the earlier sentence
//! - **HTTP service**: `POST /summarize` with JSON in and out
//!
//! ```no_run
//! use rapid_summarizer::{Summarizer, SummarizerConfig};
//!
//! let summarizer = Summarizer::english()?;
//! let summary = summarizer.summarize("Some long text. ...", &SummarizerConfig::default())?;
//! println!("{summary}");
//! # Ok::<(), rapid_summarizer::SummarizeError>(())
//! ```

pub mod config;
pub mod errors;
pub mod nlp;
pub mod pipeline;
pub mod scoring;
pub mod service;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{ErrorKind, Result, SummarizeError};
pub use types::{ScoringMethod, Sentence, Summary, SummarizerConfig, DEFAULT_RATIO};

// Re-export main functionality
pub use config::ServerConfig;
pub use nlp::{
    normalizer::normalize, stopwords::StopwordFilter, tokenizer::Tokenizer, LanguageResources,
};
pub use pipeline::runner::Summarizer;
pub use scoring::{
    ExtractiveScorer, FrequencyRankScorer, FrequencyTable, Scorer, SentenceScorer,
    SentenceScores,
};
pub use service::{ResponseBody, ResponseStatus, ServiceResponse, SummarizeService};
pub use summarizer::selector::TopSentenceSelector;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
