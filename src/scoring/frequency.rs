//! Word frequency distribution
//!
//! Counts filtered document words and remembers the order in which each
//! distinct word was first seen, so that "most common" queries break ties
//! deterministically.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::types::scaled_count;

/// Word -> occurrence count over one document.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: FxHashMap<String, usize>,
    /// Distinct words in first-encounter order
    order: Vec<String>,
    total: usize,
}

impl FrequencyTable {
    /// Count every word in `words`.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::default();
        for word in words {
            table.add(word.as_ref());
        }
        table
    }

    fn add(&mut self, word: &str) {
        self.total += 1;
        if let Some(count) = self.counts.get_mut(word) {
            *count += 1;
            return;
        }
        self.counts.insert(word.to_string(), 1);
        self.order.push(word.to_string());
    }

    /// Occurrences of `word`; zero if it was never counted.
    #[inline]
    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn distinct(&self) -> usize {
        self.order.len()
    }

    /// Number of counted words, repeats included.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The `n` most frequent words, highest count first.
    ///
    /// Equal counts keep first-encounter order.
    pub fn most_common(&self, n: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .order
            .iter()
            .map(|w| (w.as_str(), self.count(w)))
            .collect();
        // Stable sort keeps encounter order among ties.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    /// The `floor(distinct * ratio)` most common words.
    pub fn important_words(&self, ratio: f64) -> FxHashSet<&str> {
        let n = scaled_count(self.distinct(), ratio);
        self.most_common(n).into_iter().map(|(w, _)| w).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let table = FrequencyTable::from_words(["rust", "fast", "rust", "safe", "rust"]);

        assert_eq!(table.count("rust"), 3);
        assert_eq!(table.count("fast"), 1);
        assert_eq!(table.count("missing"), 0);
        assert_eq!(table.distinct(), 3);
        assert_eq!(table.total(), 5);
    }

    #[test]
    fn test_most_common_orders_by_count() {
        let table = FrequencyTable::from_words(["a", "b", "b", "c", "c", "c"]);
        assert_eq!(table.most_common(2), vec![("c", 3), ("b", 2)]);
    }

    #[test]
    fn test_most_common_ties_follow_first_encounter() {
        let table = FrequencyTable::from_words(["zeta", "alpha", "mid", "alpha", "zeta"]);
        assert_eq!(
            table.most_common(3),
            vec![("zeta", 2), ("alpha", 2), ("mid", 1)]
        );
    }

    #[test]
    fn test_most_common_more_than_available() {
        let table = FrequencyTable::from_words(["one"]);
        assert_eq!(table.most_common(10).len(), 1);
    }

    #[test]
    fn test_important_words() {
        let table = FrequencyTable::from_words([
            "graph", "graph", "graph", "rank", "rank", "node", "edge", "score",
        ]);
        // 5 distinct words * 0.4 = 2
        let important = table.important_words(0.4);
        assert_eq!(important.len(), 2);
        assert!(important.contains("graph"));
        assert!(important.contains("rank"));

        assert!(table.important_words(0.1).is_empty());
        assert!(table.important_words(-1.0).is_empty());
    }

    #[test]
    fn test_empty_table() {
        let table = FrequencyTable::from_words(Vec::<String>::new());
        assert!(table.is_empty());
        assert!(table.most_common(3).is_empty());
        assert!(table.important_words(1.0).is_empty());
    }
}
