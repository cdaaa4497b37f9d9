//! Sentence and word tokenization
//!
//! Both levels follow Unicode UAX #29 segmentation rules via the
//! `unicode-segmentation` crate. Word tokens are lowercased and keep
//! punctuation as separate tokens; filtering happens in
//! [`StopwordFilter`](super::stopwords::StopwordFilter).

use unicode_segmentation::UnicodeSegmentation;

use crate::types::Sentence;

/// Unicode-aware tokenizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Split text into sentences.
    ///
    /// A UAX #29 boundary only counts when whitespace or the end of the text
    /// follows it, so `"Wow!Great."` stays one sentence. Each sentence is
    /// trimmed; offsets point into `text`. Whitespace-only spans are dropped,
    /// so indices stay contiguous.
    pub fn sentences(&self, text: &str) -> Vec<Sentence> {
        let mut sentences = Vec::new();
        let mut start = 0;

        for (offset, segment) in text.split_sentence_bound_indices() {
            let end = offset + segment.len();
            if end < text.len() && !segment.ends_with(char::is_whitespace) {
                continue;
            }
            push_trimmed(&mut sentences, text, start, end);
            start = end;
        }

        sentences
    }

    /// Lowercase `text` and split it into word tokens.
    ///
    /// Punctuation marks come back as their own tokens; whitespace does not.
    pub fn words(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split_word_bounds()
            .filter(|token| !token.trim().is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Push `text[start..end]`, trimmed, unless it is blank.
fn push_trimmed(sentences: &mut Vec<Sentence>, text: &str, start: usize, end: usize) {
    let span = &text[start..end];
    let trimmed = span.trim();
    if trimmed.is_empty() {
        return;
    }
    let start = start + (span.len() - span.trim_start().len());
    sentences.push(Sentence::new(
        trimmed,
        start,
        start + trimmed.len(),
        sentences.len(),
    ));
}
