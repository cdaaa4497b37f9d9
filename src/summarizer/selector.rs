//! Top-N sentence selection
//!
//! Picks the highest-scoring sentences and returns them in document order.
//! Equal scores are resolved in favour of the earlier sentence, so the
//! selection is a pure function of the scores.

use crate::scoring::SentenceScores;
use crate::types::Sentence;

/// Top-N sentence selector
#[derive(Debug, Clone, Copy, Default)]
pub struct TopSentenceSelector {
    num_sentences: usize,
}

impl TopSentenceSelector {
    /// Create a selector keeping `num_sentences` sentences.
    pub fn new(num_sentences: usize) -> Self {
        Self { num_sentences }
    }

    /// Select sentence indices.
    ///
    /// Returns `min(num_sentences, scores.len())` distinct indices in
    /// ascending (document) order.
    pub fn select(&self, scores: &SentenceScores) -> Vec<usize> {
        let mut selected = scores.ranked();
        selected.truncate(self.num_sentences);
        // Sort by document order
        selected.sort_unstable();
        selected
    }
}

/// Join the sentences at `indices` with a single space.
pub fn join_sentences(sentences: &[Sentence], indices: &[usize]) -> String {
    indices
        .iter()
        .filter_map(|&i| sentences.get(i))
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
