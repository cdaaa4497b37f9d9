//! Text normalization
//!
//! Collapses whitespace and strips every character that is neither a word
//! character nor sentence-ending punctuation. Runs before segmentation so
//! that sentence offsets refer to the normalized text.

/// Sentence-ending punctuation kept by [`normalize`].
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Normalize raw input text.
///
/// Whitespace runs become a single ASCII space, leading and trailing
/// whitespace is dropped, and characters other than alphanumerics, `_`,
/// whitespace and `. ! ?` are removed. A removed character never leaves a
/// doubled space behind, so `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars() {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if !is_retained(c) {
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(c);
    }

    out
}

/// Whether `c` survives normalization (whitespace aside).
#[inline]
pub fn is_retained(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || SENTENCE_TERMINATORS.contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("  Hello \t\n world.  "), "Hello world.");
    }

    #[test]
    fn test_strips_special_characters() {
        assert_eq!(
            normalize("Rust's \"borrow\" checker, (mostly) works!"),
            "Rusts borrow checker mostly works!"
        );
    }

    #[test]
    fn test_keeps_sentence_punctuation() {
        assert_eq!(normalize("Why? Because. Yes!"), "Why? Because. Yes!");
    }

    #[test]
    fn test_removed_tokens_leave_single_space() {
        assert_eq!(normalize("a - b"), "a b");
        assert_eq!(normalize("- leading"), "leading");
        assert_eq!(normalize("trailing --"), "trailing");
    }

    #[test]
    fn test_keeps_unicode_letters_and_underscore() {
        assert_eq!(normalize("café snake_case 42"), "café snake_case 42");
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t "), "");
        assert_eq!(normalize("@#$%"), "");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("  One,  two;\tthree...  Four?! ");
        assert_eq!(normalize(&once), once);
    }
}
