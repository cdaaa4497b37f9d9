//! Frequency-rank scoring
//!
//! Picks the `floor(distinct_words * ratio)` most common document words and
//! scores each sentence by how many of its tokens fall in that set.

use super::{ScoringInput, SentenceScorer, SentenceScores};

/// Important-word count scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyRankScorer;

impl SentenceScorer for FrequencyRankScorer {
    fn name(&self) -> &'static str {
        "frequency"
    }

    fn score(&self, input: &ScoringInput<'_>) -> SentenceScores {
        let important = input.frequencies.important_words(input.ratio);
        tracing::trace!(important = important.len(), "important word set");

        input
            .sentence_words
            .iter()
            .map(|words| {
                words
                    .iter()
                    .filter(|w| important.contains(w.as_str()))
                    .count()
            })
            .collect::<Vec<_>>()
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::FrequencyTable;

    fn words(sentences: &[&[&str]]) -> Vec<Vec<String>> {
        sentences
            .iter()
            .map(|s| s.iter().map(|w| w.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_counts_important_words() {
        // distinct = 4, ratio 0.5 -> {"graph", "rank"}
        let table =
            FrequencyTable::from_words(["graph", "graph", "graph", "rank", "rank", "node", "edge"]);
        let sentence_words = words(&[
            &["graph", "rank", "graph"],
            &["node", "edge"],
            &["rank", "node"],
        ]);
        let input = ScoringInput {
            sentence_words: &sentence_words,
            frequencies: &table,
            ratio: 0.5,
        };

        let scores = FrequencyRankScorer.score(&input);
        assert_eq!(scores.as_slice(), &[3, 0, 1]);
    }

    #[test]
    fn test_ties_in_word_ranking_use_first_encounter() {
        // All counts equal; ratio 0.34 of 3 distinct -> 1 word, the first seen.
        let table = FrequencyTable::from_words(["beta", "alpha", "gamma"]);
        let sentence_words = words(&[&["alpha"], &["beta"], &["gamma"]]);
        let input = ScoringInput {
            sentence_words: &sentence_words,
            frequencies: &table,
            ratio: 0.34,
        };

        assert_eq!(FrequencyRankScorer.score(&input).as_slice(), &[0, 1, 0]);
    }

    #[test]
    fn test_empty_important_set_scores_zero() {
        let table = FrequencyTable::from_words(["solo"]);
        let sentence_words = words(&[&["solo"], &["solo", "solo"]]);
        let input = ScoringInput {
            sentence_words: &sentence_words,
            frequencies: &table,
            ratio: 0.3,
        };

        assert_eq!(FrequencyRankScorer.score(&input).as_slice(), &[0, 0]);
    }
}
