//! Pairwise text comparison for duplicate-submission checks.
//!
//! Independent of the scoring pipeline: similarity is the Jaccard index of
//! the two texts' word sets, and shared phrases are common four-word
//! sequences.

use std::collections::HashSet;

use crate::analysis::reports::ComparisonReport;
use crate::text;

/// Words must be longer than this (in characters) to count toward similarity.
const SIMILARITY_MIN_WORD_LEN: usize = 3;
/// Words must be longer than this (in characters) to form phrases.
const PHRASE_MIN_WORD_LEN: usize = 2;
/// Words per shared phrase.
const PHRASE_LEN: usize = 4;
/// Most shared phrases reported.
const MAX_COMMON_PHRASES: usize = 10;

/// Compare two texts.
///
/// Similarity is symmetric in its arguments. Shared phrases follow the
/// order in which they first appear in `a`.
#[tracing::instrument(skip_all, fields(a_len = a.len(), b_len = b.len()))]
pub fn compare(a: &str, b: &str) -> ComparisonReport {
    let report = ComparisonReport {
        similarity: jaccard_similarity(a, b),
        common_phrases: common_phrases(a, b),
    };
    tracing::debug!(
        similarity = report.similarity,
        phrases = report.common_phrases.len(),
        "comparison complete"
    );
    report
}

/// Jaccard index of the long-word sets of `a` and `b`, as a rounded percentage.
///
/// Two texts with no qualifying words are 0% similar.
pub fn jaccard_similarity(a: &str, b: &str) -> u8 {
    let set_a = word_set(a);
    let set_b = word_set(b);

    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0;
    }
    let intersection = set_a.intersection(&set_b).count();

    (intersection as f64 / union as f64 * 100.0).round() as u8
}

/// Four-word phrases present in both texts, in `a`'s order, at most ten.
pub fn common_phrases(a: &str, b: &str) -> Vec<String> {
    let in_b: HashSet<String> = phrases(b).into_iter().collect();
    let mut seen = HashSet::new();

    phrases(a)
        .into_iter()
        .filter(|p| in_b.contains(p))
        .filter(|p| seen.insert(p.clone()))
        .take(MAX_COMMON_PHRASES)
        .collect()
}

fn word_set(text: &str) -> HashSet<String> {
    text::extract_words(text)
        .into_iter()
        .filter(|w| w.chars().count() > SIMILARITY_MIN_WORD_LEN)
        .collect()
}

/// Every four-word window over the qualifying words, in order (with repeats).
fn phrases(text: &str) -> Vec<String> {
    let words: Vec<String> = text::extract_words(text)
        .into_iter()
        .filter(|w| w.chars().count() > PHRASE_MIN_WORD_LEN)
        .collect();

    words
        .windows(PHRASE_LEN)
        .map(|window| window.join(" "))
        .collect()
}
