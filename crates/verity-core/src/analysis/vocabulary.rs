//! Vocabulary richness via type-token ratio.

use std::collections::HashSet;

use crate::text;

use super::scoring::ScoringWeights;

/// Vocabulary richness of `text`, 0–100.
///
/// Type-token ratio over purely alphabetic, lower-cased tokens, as a
/// percentage scaled by `weights.vocabulary_multiplier`. Returns
/// `weights.neutral_signal` when no alphabetic tokens remain.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn vocabulary_richness(text: &str, weights: &ScoringWeights) -> f64 {
    let tokens = text::alphabetic_tokens(text);
    if tokens.is_empty() {
        return weights.neutral_signal;
    }

    let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
    let ratio = distinct.len() as f64 / tokens.len() as f64 * 100.0;

    (ratio * weights.vocabulary_multiplier).clamp(0.0, 100.0)
}
