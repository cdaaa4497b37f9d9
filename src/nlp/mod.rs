//! Natural Language Processing components
//!
//! This module provides normalization, tokenization and stopword filtering,
//! plus [`LanguageResources`], the read-only bundle shared by every request.

pub mod normalizer;
pub mod stopwords;
pub mod tokenizer;

use crate::errors::Result;
use stopwords::StopwordFilter;
use tokenizer::Tokenizer;

/// Tokenizer and stopword list, loaded once at startup.
///
/// Immutable after construction; share it with `Arc` across requests.
#[derive(Debug, Clone)]
pub struct LanguageResources {
    language: String,
    tokenizer: Tokenizer,
    stopwords: StopwordFilter,
}

impl LanguageResources {
    /// Load the resources for `language`.
    pub fn load(language: &str) -> Result<Self> {
        let stopwords = StopwordFilter::new(language)?;
        tracing::info!(language, stopwords = stopwords.len(), "loaded language resources");
        Ok(Self {
            language: language.to_string(),
            tokenizer: Tokenizer::new(),
            stopwords,
        })
    }

    /// Build resources from parts, e.g. a small fixture stopword list.
    pub fn new(tokenizer: Tokenizer, stopwords: StopwordFilter) -> Self {
        Self {
            language: "custom".to_string(),
            tokenizer,
            stopwords,
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Lowercased document words with stopwords and punctuation removed.
    pub fn meaningful_words(&self, text: &str) -> Vec<String> {
        self.stopwords.filter(self.tokenizer.words(text))
    }
}
