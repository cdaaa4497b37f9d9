//! Summarization components
//!
//! Provides top-N sentence selection for extractive summaries.

pub mod selector;
