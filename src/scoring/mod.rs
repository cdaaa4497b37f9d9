//! Sentence scoring strategies
//!
//! This module provides the two interchangeable scorers:
//! - Extractive: sums document-level word frequencies per sentence
//! - FrequencyRank: counts occurrences of the document's most common words
//!
//! Both consume a [`ScoringInput`] and produce [`SentenceScores`]. Neither
//! filters stopwords out of the sentence tokens; stopwords simply never
//! appear in the [`FrequencyTable`] and contribute nothing.

pub mod extractive;
pub mod frequency;
pub mod frequency_rank;

pub use extractive::ExtractiveScorer;
pub use frequency::FrequencyTable;
pub use frequency_rank::FrequencyRankScorer;

use crate::types::ScoringMethod;

/// Everything a scorer may look at.
#[derive(Debug, Clone, Copy)]
pub struct ScoringInput<'a> {
    /// Lowercased, unfiltered word tokens of each sentence, by sentence index
    pub sentence_words: &'a [Vec<String>],
    /// Frequencies of the filtered document words
    pub frequencies: &'a FrequencyTable,
    /// Summary ratio; also sizes the important-word set
    pub ratio: f64,
}

/// Non-negative integer score per sentence, indexed by sentence index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentenceScores(Vec<usize>);

impl SentenceScores {
    pub fn new(scores: Vec<usize>) -> Self {
        Self(scores)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Sentence indices ordered best first: score descending, then index
    /// ascending.
    pub fn ranked(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.0.len()).collect();
        indices.sort_by(|&a, &b| self.0[b].cmp(&self.0[a]).then(a.cmp(&b)));
        indices
    }
}

impl From<Vec<usize>> for SentenceScores {
    fn from(scores: Vec<usize>) -> Self {
        Self(scores)
    }
}

/// A sentence scoring strategy.
pub trait SentenceScorer {
    /// Short, stable identifier (e.g. `"extractive"`).
    fn name(&self) -> &'static str;

    /// Score every sentence in `input.sentence_words`.
    fn score(&self, input: &ScoringInput<'_>) -> SentenceScores;
}

/// Statically dispatched scorer chosen from a [`ScoringMethod`].
#[derive(Debug, Clone, Copy)]
pub enum Scorer {
    Extractive(ExtractiveScorer),
    FrequencyRank(FrequencyRankScorer),
}

impl Scorer {
    pub fn for_method(method: ScoringMethod) -> Self {
        match method {
            ScoringMethod::Extractive => Scorer::Extractive(ExtractiveScorer),
            ScoringMethod::Frequency => Scorer::FrequencyRank(FrequencyRankScorer),
        }
    }
}

impl From<ScoringMethod> for Scorer {
    fn from(method: ScoringMethod) -> Self {
        Self::for_method(method)
    }
}

impl SentenceScorer for Scorer {
    fn name(&self) -> &'static str {
        match self {
            Scorer::Extractive(s) => s.name(),
            Scorer::FrequencyRank(s) => s.name(),
        }
    }

    #[inline]
    fn score(&self, input: &ScoringInput<'_>) -> SentenceScores {
        match self {
            Scorer::Extractive(s) => s.score(input),
            Scorer::FrequencyRank(s) => s.score(input),
        }
    }
}
