//! Text processing utilities.
//!
//! Provides the sentence splitting and tokenization shared by the
//! statistical analyzers and the pairwise comparator.

use regex::Regex;
use std::sync::LazyLock;

/// Runs of sentence-terminal punctuation.
static SENTENCE_TERMINATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Split text into sentences on runs of `.`, `!` and `?`.
///
/// Each piece is trimmed and empty pieces are discarded, so trailing
/// punctuation and ellipses never produce phantom sentences.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_TERMINATORS
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Count whitespace-delimited words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Lower-cased whitespace tokens made up solely of alphabetic characters.
///
/// Tokens carrying punctuation or digits (`"reasons."`, `"42"`) are dropped
/// rather than cleaned, which keeps the type-token ratio conservative.
pub fn alphabetic_tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|w| w.chars().all(char::is_alphabetic))
        .map(str::to_string)
        .collect()
}

/// Extract words from text, splitting on whitespace and stripping edge punctuation.
pub fn extract_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'' && c != '-'))
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Number of Unicode scalar values in `text`.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_sentences() {
        let sentences = split_sentences("This is a sentence. This is another sentence.");
        assert_eq!(sentences, vec!["This is a sentence", "This is another sentence"]);
    }

    #[test]
    fn punctuation_runs_collapse() {
        let sentences = split_sentences("Wait... What?! Really.");
        assert_eq!(sentences, vec!["Wait", "What", "Really"]);
    }

    #[test]
    fn trailing_text_without_terminator_counts() {
        let sentences = split_sentences("One. Two");
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("  ...  ").is_empty());
    }

    #[test]
    fn word_count_ignores_extra_whitespace() {
        assert_eq!(word_count("  one\ttwo \n three  "), 3);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn alphabetic_tokens_drop_punctuated_words() {
        let tokens = alphabetic_tokens("In conclusion, the Cat sat 42 times.");
        assert_eq!(tokens, vec!["in", "the", "cat", "sat"]);
    }

    #[test]
    fn extract_words_basic() {
        let words = extract_words("Hello, world! This is a test.");
        assert_eq!(words, vec!["hello", "world", "this", "is", "a", "test"]);
    }

    #[test]
    fn char_len_counts_scalars() {
        assert_eq!(char_len("cliché"), 6);
    }
}
