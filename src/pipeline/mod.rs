//! Summarization pipeline
//!
//! [`runner::Summarizer`] threads a document through normalization,
//! segmentation, tokenization, frequency counting, scoring and selection.
//! [`observer`] exposes hooks at every stage boundary.

pub mod observer;
pub mod runner;
