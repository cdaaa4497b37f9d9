//! Stopword filtering
//!
//! Stopword lists are the NLTK lists shipped by the `stop-words` crate. Every
//! filter built by [`StopwordFilter::new`] also treats ASCII punctuation as stopwords, and
//! [`StopwordFilter::is_filtered`] additionally drops any token made only of
//! punctuation.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

use crate::errors::{Result, SummarizeError};

/// ASCII punctuation, each character treated as a stopword.
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// A filter for removing stopwords from word token streams
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Create a filter for the given language, punctuation included.
    ///
    /// Fails for languages the `stop-words` crate has no list for.
    pub fn new(language: &str) -> Result<Self> {
        let lang = Self::parse_language(language)?;
        let stopwords: FxHashSet<String> = get(lang).iter().map(|s| s.to_string()).collect();
        if stopwords.is_empty() {
            return Err(SummarizeError::ResourceUnavailable(format!(
                "empty stopword list for '{language}'"
            )));
        }

        let mut filter = Self { stopwords };
        filter.add_punctuation();
        Ok(filter)
    }

    /// English stopwords plus punctuation.
    pub fn english() -> Result<Self> {
        Self::new("en")
    }

    /// Create an empty stopword filter (punctuation-only tokens still filtered)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords: FxHashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Add every ASCII punctuation character as a stopword.
    pub fn add_punctuation(&mut self) {
        for c in PUNCTUATION.chars() {
            self.stopwords.insert(c.to_string());
        }
    }

    /// Check if a word is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word) || self.stopwords.contains(&word.to_lowercase())
    }

    /// Whether a token should be excluded from frequency counting.
    ///
    /// True for stopwords and for tokens without a single alphanumeric
    /// character (`"..."`, `"?!"`).
    pub fn is_filtered(&self, token: &str) -> bool {
        is_punctuation_only(token) || self.is_stopword(token)
    }

    /// Drop filtered tokens, keeping order.
    pub fn filter<I, S>(&self, tokens: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String> + AsRef<str>,
    {
        tokens
            .into_iter()
            .filter(|t| !self.is_filtered(AsRef::<str>::as_ref(t)))
            .map(Into::into)
            .collect()
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    fn parse_language(language: &str) -> Result<LANGUAGE> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "el" | "greek" => LANGUAGE::Greek,
            "ro" | "romanian" => LANGUAGE::Romanian,
            _ => return Err(SummarizeError::UnsupportedLanguage(language.to_string())),
        };
        Ok(lang)
    }
}

/// Token contains no alphanumeric character.
fn is_punctuation_only(token: &str) -> bool {
    !token.chars().any(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::english().unwrap();

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The")); // case insensitive
        assert!(filter.is_stopword("is"));
        assert!(!filter.is_stopword("machine"));
        assert!(!filter.is_stopword("learning"));
    }

    #[test]
    fn test_english_list_keeps_content_words() {
        let filter = StopwordFilter::english().unwrap();

        for word in ["important", "research", "information", "system", "results", "new"] {
            assert!(!filter.is_filtered(word), "{word} should be counted");
        }
        // 179 NLTK words plus punctuation
        assert!(filter.len() < 250);
    }

    #[test]
    fn test_punctuation_included() {
        let filter = StopwordFilter::english().unwrap();

        assert!(filter.is_stopword("."));
        assert!(filter.is_stopword("!"));
        assert!(filter.is_stopword("?"));
        assert!(filter.is_stopword(","));
    }

    #[test]
    fn test_unsupported_language() {
        let err = StopwordFilter::new("klingon").unwrap_err();
        assert!(matches!(err, SummarizeError::UnsupportedLanguage(_)));
    }

    #[test]
    fn test_german_stopwords() {
        let filter = StopwordFilter::new("de").unwrap();

        assert!(filter.is_stopword("der"));
        assert!(filter.is_stopword("und"));
        assert!(!filter.is_stopword("machine"));
    }

    #[test]
    fn test_custom_stopwords() {
        let mut filter = StopwordFilter::from_list(&["custom", "Words"]);

        assert!(filter.is_stopword("custom"));
        assert!(filter.is_stopword("words"));
        assert!(!filter.is_stopword("the"));

        filter.add_stopwords(&["extra"]);
        assert!(filter.is_stopword("extra"));
        assert_eq!(filter.len(), 3);
    }

    #[test]
    fn test_punctuation_only_tokens_filtered() {
        let filter = StopwordFilter::empty();

        assert!(filter.is_empty());
        assert!(filter.is_filtered("..."));
        assert!(filter.is_filtered("?!"));
        assert!(!filter.is_filtered("the"));
        assert!(!filter.is_filtered("3.14"));
    }

    #[test]
    fn test_filter_keeps_order() {
        let filter = StopwordFilter::from_list(&["the", "is"]);
        let tokens = vec!["the", "cat", "is", "here", "."];

        assert_eq!(filter.filter(tokens), vec!["cat", "here"]);
    }
}
