//! Score fusion.
//!
//! Combines pattern density, burstiness and vocabulary richness into the
//! two headline scores. Every constant is a named field on
//! [`ScoringWeights`]; the defaults are the reference calibration and
//! changing them changes every score.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Weighting constants for score fusion and the statistical analyzers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoringWeights {
    /// Weight of the pattern sub-score in the AI score.
    pub pattern_weight: f64,
    /// Weight of `100 - burstiness` in the AI score.
    pub burstiness_weight: f64,
    /// Weight of `100 - vocabulary_richness` in the AI score.
    pub vocabulary_weight: f64,
    /// Multiplier turning AI-pattern density (per 100 words) into the pattern sub-score.
    pub density_multiplier: f64,
    /// Originality points deducted per match of any category.
    pub match_penalty_per_match: u32,
    /// Maximum originality points deducted for match volume.
    pub match_penalty_cap: u32,
    /// Multiplier applied to the sentence-length coefficient of variation.
    pub burstiness_multiplier: f64,
    /// Multiplier applied to the type-token ratio.
    pub vocabulary_multiplier: f64,
    /// Fewest sentences for which burstiness is computed.
    pub min_sentences: usize,
    /// Value reported by an analyzer when the input is too small to measure.
    pub neutral_signal: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            pattern_weight: 0.5,
            burstiness_weight: 0.25,
            vocabulary_weight: 0.25,
            density_multiplier: 15.0,
            match_penalty_per_match: 2,
            match_penalty_cap: 30,
            burstiness_multiplier: 2.0,
            vocabulary_multiplier: 1.5,
            min_sentences: 3,
            neutral_signal: 50.0,
        }
    }
}

impl ScoringWeights {
    /// Reject weights that would make scores meaningless.
    ///
    /// Every floating-point weight must be finite and non-negative,
    /// `neutral_signal` must lie in 0–100, and `min_sentences` must be at
    /// least 1.
    pub fn validate(&self) -> ConfigResult<()> {
        let floats = [
            ("weights.pattern_weight", self.pattern_weight),
            ("weights.burstiness_weight", self.burstiness_weight),
            ("weights.vocabulary_weight", self.vocabulary_weight),
            ("weights.density_multiplier", self.density_multiplier),
            ("weights.burstiness_multiplier", self.burstiness_multiplier),
            ("weights.vocabulary_multiplier", self.vocabulary_multiplier),
            ("weights.neutral_signal", self.neutral_signal),
        ];
        for (field, value) in floats {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a finite, non-negative number (got {value})"),
                });
            }
        }
        if self.neutral_signal > 100.0 {
            return Err(ConfigError::Invalid {
                field: "weights.neutral_signal",
                reason: format!("must be at most 100 (got {})", self.neutral_signal),
            });
        }
        if self.min_sentences == 0 {
            return Err(ConfigError::Invalid {
                field: "weights.min_sentences",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Everything the aggregator needs from the analyzers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreInputs {
    /// Whitespace-delimited word count.
    pub word_count: usize,
    /// Matches of AI-pattern families.
    pub ai_pattern_count: usize,
    /// Matches of every category.
    pub total_match_count: usize,
    /// Burstiness, 0–100.
    pub burstiness: f64,
    /// Vocabulary richness, 0–100.
    pub vocabulary_richness: f64,
}

/// Headline scores and the intermediate terms behind them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scores {
    /// Originality, 0–100.
    pub overall: u8,
    /// Machine-generation likelihood, 0–100.
    pub ai_generated: u8,
    /// Pattern-density sub-score, 0–100.
    pub pattern_score: f64,
    /// Originality points deducted for match volume.
    pub match_penalty: u32,
}

/// Pattern sub-score: AI-pattern matches per 100 words, scaled and capped at 100.
pub fn pattern_score(ai_pattern_count: usize, word_count: usize, weights: &ScoringWeights) -> f64 {
    if word_count == 0 {
        return 0.0;
    }
    let density = ai_pattern_count as f64 / word_count as f64 * 100.0;
    (density * weights.density_multiplier).min(100.0)
}

/// Originality deduction for raw match volume, capped.
pub fn match_penalty(total_match_count: usize, weights: &ScoringWeights) -> u32 {
    let count = u32::try_from(total_match_count).unwrap_or(u32::MAX);
    count
        .saturating_mul(weights.match_penalty_per_match)
        .min(weights.match_penalty_cap)
}

/// Fuse analyzer outputs into the headline scores.
///
/// Text with zero words has no density to measure; both headline scores
/// fall back to the neutral signal.
#[tracing::instrument(skip_all, fields(word_count = inputs.word_count))]
pub fn aggregate(inputs: &ScoreInputs, weights: &ScoringWeights) -> Scores {
    if inputs.word_count == 0 {
        let neutral = to_score(weights.neutral_signal);
        return Scores {
            overall: neutral,
            ai_generated: neutral,
            pattern_score: 0.0,
            match_penalty: 0,
        };
    }

    let pattern = pattern_score(inputs.ai_pattern_count, inputs.word_count, weights);
    let ai_raw = weights.pattern_weight * pattern
        + weights.burstiness_weight * (100.0 - inputs.burstiness)
        + weights.vocabulary_weight * (100.0 - inputs.vocabulary_richness);
    let ai_generated = to_score(ai_raw.round());

    let penalty = match_penalty(inputs.total_match_count, weights);
    let overall = (100_i64 - i64::from(ai_generated) - i64::from(penalty)).max(0);

    tracing::debug!(
        pattern_score = pattern,
        ai_generated,
        penalty,
        overall,
        "scores aggregated"
    );

    Scores {
        overall: to_score(overall as f64),
        ai_generated,
        pattern_score: pattern,
        match_penalty: penalty,
    }
}

/// Clamp to 0–100 and narrow.
fn to_score(value: f64) -> u8 {
    value.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(
        word_count: usize,
        ai: usize,
        total: usize,
        burstiness: f64,
        vocab: f64,
    ) -> ScoreInputs {
        ScoreInputs {
            word_count,
            ai_pattern_count: ai,
            total_match_count: total,
            burstiness,
            vocabulary_richness: vocab,
        }
    }

    #[test]
    fn default_weights_match_reference_calibration() {
        let w = ScoringWeights::default();
        assert_eq!(w.pattern_weight, 0.5);
        assert_eq!(w.burstiness_weight, 0.25);
        assert_eq!(w.vocabulary_weight, 0.25);
        assert_eq!(w.density_multiplier, 15.0);
        assert_eq!(w.match_penalty_per_match, 2);
        assert_eq!(w.match_penalty_cap, 30);
        assert_eq!(w.burstiness_multiplier, 2.0);
        assert_eq!(w.vocabulary_multiplier, 1.5);
    }

    #[test]
    fn penalty_is_capped() {
        let w = ScoringWeights::default();
        assert_eq!(match_penalty(0, &w), 0);
        assert_eq!(match_penalty(1, &w), 2);
        assert_eq!(match_penalty(15, &w), 30);
        assert_eq!(match_penalty(100, &w), 30);
        assert_eq!(match_penalty(usize::MAX, &w), 30);
    }

    #[test]
    fn pattern_score_saturates() {
        let w = ScoringWeights::default();
        // 1 per 100 words -> density 1 -> 15
        assert!((pattern_score(1, 100, &w) - 15.0).abs() < 1e-9);
        assert_eq!(pattern_score(10, 40, &w), 100.0);
        assert_eq!(pattern_score(0, 100, &w), 0.0);
    }

    #[test]
    fn worked_fusion() {
        let w = ScoringWeights::default();
        // pattern 100, burstiness 0, vocabulary 30:
        // 50 + 25 + 17.5 = 92.5 -> 93
        let scores = aggregate(&inputs(40, 10, 10, 0.0, 30.0), &w);
        assert_eq!(scores.ai_generated, 93);
        assert_eq!(scores.match_penalty, 20);
        assert_eq!(scores.overall, 0);
    }

    #[test]
    fn clean_varied_text_scores_original() {
        let w = ScoringWeights::default();
        let scores = aggregate(&inputs(200, 0, 0, 100.0, 100.0), &w);
        assert_eq!(scores.ai_generated, 0);
        assert_eq!(scores.overall, 100);
    }

    #[test]
    fn overall_never_negative() {
        let w = ScoringWeights::default();
        let scores = aggregate(&inputs(10, 10, 100, 0.0, 0.0), &w);
        assert_eq!(scores.ai_generated, 100);
        assert_eq!(scores.overall, 0);
    }

    #[test]
    fn zero_words_are_neutral() {
        let w = ScoringWeights::default();
        let scores = aggregate(&inputs(0, 0, 0, 50.0, 50.0), &w);
        assert_eq!(scores.ai_generated, 50);
        assert_eq!(scores.overall, 50);
        assert_eq!(scores.match_penalty, 0);
    }

    #[test]
    fn overridden_weights_take_effect() {
        let w = ScoringWeights {
            pattern_weight: 0.0,
            burstiness_weight: 1.0,
            vocabulary_weight: 0.0,
            match_penalty_cap: 5,
            ..ScoringWeights::default()
        };
        let scores = aggregate(&inputs(100, 50, 50, 40.0, 0.0), &w);
        assert_eq!(scores.ai_generated, 60);
        assert_eq!(scores.match_penalty, 5);
        assert_eq!(scores.overall, 35);
    }

    #[test]
    fn default_weights_are_valid() {
        assert!(ScoringWeights::default().validate().is_ok());
    }

    #[test]
    fn zero_min_sentences_rejected() {
        let w = ScoringWeights {
            min_sentences: 0,
            ..ScoringWeights::default()
        };
        let err = w.validate().unwrap_err();
        assert!(err.to_string().contains("weights.min_sentences"));
    }

    #[test]
    fn non_finite_or_negative_weights_rejected() {
        for bad in [f64::NAN, f64::INFINITY, -0.5] {
            let w = ScoringWeights {
                pattern_weight: bad,
                ..ScoringWeights::default()
            };
            assert!(w.validate().is_err(), "{bad} accepted");
        }
        let w = ScoringWeights {
            neutral_signal: 150.0,
            ..ScoringWeights::default()
        };
        assert!(w.validate().is_err());
    }

    #[test]
    fn weights_deserialize_partially() {
        let w: ScoringWeights = serde_json::from_str(r#"{"match_penalty_cap": 10}"#).unwrap();
        assert_eq!(w.match_penalty_cap, 10);
        assert_eq!(w.pattern_weight, 0.5);
    }
}
