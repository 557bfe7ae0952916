//! Sentence-length variability ("burstiness").
//!
//! Human prose tends to mix short and long sentences; templated text
//! trends uniform. The score is the coefficient of variation of sentence
//! word counts, expressed as a percentage and scaled.

use crate::text;

use super::scoring::ScoringWeights;

/// Word count of every non-empty sentence in `text`.
pub fn sentence_lengths(text: &str) -> Vec<usize> {
    text::split_sentences(text)
        .into_iter()
        .map(text::word_count)
        .collect()
}

/// Burstiness of `text`, 0–100.
///
/// Returns `weights.neutral_signal` when there are no sentences or fewer
/// than `weights.min_sentences`.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn burstiness(text: &str, weights: &ScoringWeights) -> f64 {
    burstiness_from_lengths(&sentence_lengths(text), weights)
}

/// Burstiness computed from precomputed sentence word counts.
pub fn burstiness_from_lengths(lengths: &[usize], weights: &ScoringWeights) -> f64 {
    if lengths.is_empty() || lengths.len() < weights.min_sentences {
        return weights.neutral_signal;
    }

    let count = lengths.len() as f64;
    let mean = lengths.iter().sum::<usize>() as f64 / count;
    if mean == 0.0 {
        return weights.neutral_signal;
    }

    let variance = lengths
        .iter()
        .map(|&l| (l as f64 - mean).powi(2))
        .sum::<f64>()
        / count;
    let coefficient = variance.sqrt() / mean * 100.0;

    (coefficient * weights.burstiness_multiplier).clamp(0.0, 100.0)
}
