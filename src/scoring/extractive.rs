//! Extractive scoring
//!
//! score(sentence) = sum of the document frequency of every word token in
//! the sentence. Tokens are counted once per occurrence; stopwords and
//! punctuation score zero because the frequency table never holds them.

use super::{ScoringInput, SentenceScorer, SentenceScores};

/// Frequency-sum scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractiveScorer;

impl SentenceScorer for ExtractiveScorer {
    fn name(&self) -> &'static str {
        "extractive"
    }

    fn score(&self, input: &ScoringInput<'_>) -> SentenceScores {
        input
            .sentence_words
            .iter()
            .map(|words| {
                words
                    .iter()
                    .map(|w| input.frequencies.count(w))
                    .sum::<usize>()
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
    fn test_sums_frequencies() {
        let table = FrequencyTable::from_words(["rust", "rust", "memory", "safety"]);
        let sentence_words = words(&[
            &["rust", "is", "fast", "."],
            &["memory", "safety", "in", "rust", "."],
        ]);
        let input = ScoringInput {
            sentence_words: &sentence_words,
            frequencies: &table,
            ratio: 0.3,
        };

        let scores = ExtractiveScorer.score(&input);
        assert_eq!(scores.as_slice(), &[2, 4]);
    }

    #[test]
    fn test_repeated_words_count_each_time() {
        let table = FrequencyTable::from_words(["echo", "echo"]);
        let sentence_words = words(&[&["echo", "echo", "echo"]]);
        let input = ScoringInput {
            sentence_words: &sentence_words,
            frequencies: &table,
            ratio: 0.3,
        };

        assert_eq!(ExtractiveScorer.score(&input).as_slice(), &[6]);
    }

    #[test]
    fn test_stopwords_score_zero() {
        // "the" was filtered before counting, so it is absent from the table.
        let table = FrequencyTable::from_words(["cat"]);
        let sentence_words = words(&[&["the", "the", "."], &["the", "cat"]]);
        let input = ScoringInput {
            sentence_words: &sentence_words,
            frequencies: &table,
            ratio: 0.3,
        };

        assert_eq!(ExtractiveScorer.score(&input).as_slice(), &[0, 1]);
    }

    #[test]
    fn test_no_sentences() {
        let table = FrequencyTable::default();
        let input = ScoringInput {
            sentence_words: &[],
            frequencies: &table,
            ratio: 0.3,
        };
        assert!(ExtractiveScorer.score(&input).is_empty());
    }
}
