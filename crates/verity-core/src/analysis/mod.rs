//! Originality and machine-authorship analysis.
//!
//! The pipeline runs three independent analyzers over the text (pattern
//! matching, burstiness, vocabulary richness), fuses their outputs into two
//! headline scores, then attaches a summary and suggestions. Each stage is
//! a pure function in its own module; [`Engine`] wires them together with
//! an explicit [`PatternLibrary`] and [`ScoringWeights`].
//!
//! ```
//! use verity_core::analysis::Engine;
//!
//! let engine = Engine::default();
//! let report = engine.analyze("In conclusion, the results speak for themselves.");
//! assert!(report.ai_generated_score <= 100);
//! assert_eq!(report.matches[0].text, "In conclusion,");
//! ```

pub mod burstiness;
pub mod matcher;
pub mod reports;
pub mod scoring;
pub mod suggestions;
pub mod vocabulary;

use std::sync::LazyLock;

pub use reports::{AnalysisReport, ComparisonReport, Match, MatchType, Signals};
pub use scoring::ScoringWeights;

use crate::patterns::{PatternCategory, PatternLibrary};
use crate::text;

use self::scoring::ScoreInputs;

/// Default engine shared by [`analyze`]. Immutable once built.
static DEFAULT_ENGINE: LazyLock<Engine> = LazyLock::new(Engine::default);

/// Scoring engine: a pattern library plus weighting constants.
///
/// Holds no mutable state; [`Engine::analyze`] is a pure function of its
/// input and can be called from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    library: PatternLibrary,
    weights: ScoringWeights,
}

impl Engine {
    /// Build an engine from an explicit library and weights.
    pub const fn new(library: PatternLibrary, weights: ScoringWeights) -> Self {
        Self { library, weights }
    }

    /// The pattern library in use.
    pub const fn library(&self) -> &PatternLibrary {
        &self.library
    }

    /// The weighting constants in use.
    pub const fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a text.
    ///
    /// Total over all strings: degenerate input (empty, no sentences, no
    /// alphabetic words) yields neutral signals instead of an error.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn analyze(&self, text: &str) -> AnalysisReport {
        let matches = matcher::find_matches(text, &self.library);
        let lengths = burstiness::sentence_lengths(text);
        let burstiness = burstiness::burstiness_from_lengths(&lengths, &self.weights);
        let vocabulary_richness = vocabulary::vocabulary_richness(text, &self.weights);
        let word_count = text::word_count(text);

        let ai_pattern_count = count_type(&matches, PatternCategory::AiPattern);
        let cliche_count = count_type(&matches, PatternCategory::Cliche);

        let scores = scoring::aggregate(
            &ScoreInputs {
                word_count,
                ai_pattern_count,
                total_match_count: matches.len(),
                burstiness,
                vocabulary_richness,
            },
            &self.weights,
        );

        let signals = Signals {
            word_count,
            sentence_count: lengths.len(),
            burstiness,
            vocabulary_richness,
            ai_pattern_count,
            cliche_count,
            pattern_score: scores.pattern_score,
            match_penalty: scores.match_penalty,
        };

        tracing::debug!(
            overall = scores.overall,
            ai_generated = scores.ai_generated,
            matches = matches.len(),
            "analysis complete"
        );

        AnalysisReport {
            overall_score: scores.overall,
            ai_generated_score: scores.ai_generated,
            summary: suggestions::summary(scores.overall).to_string(),
            suggestions: suggestions::suggestions(scores.ai_generated, &signals),
            matches,
            signals,
        }
    }
}

/// Score a text with the built-in library and default weights.
pub fn analyze(text: &str) -> AnalysisReport {
    DEFAULT_ENGINE.analyze(text)
}

fn count_type(matches: &[Match], category: PatternCategory) -> usize {
    let match_type = category.match_type();
    matches.iter().filter(|m| m.match_type == match_type).count()
}
