//! Report structs for originality analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in both CLI JSON output and MCP tool responses.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How a match relates to unoriginal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum MatchType {
    /// Verbatim overlap with a known source. Reserved for source-matching
    /// collaborators; the pattern engine never emits it.
    Exact,
    /// A stock phrase that stands in for original wording (clichés).
    Paraphrase,
    /// Phrasing typical of machine-generated text.
    AiPattern,
}

/// A located occurrence of a pattern family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Match {
    /// The matched text, exactly as it appears in the input.
    pub text: String,
    /// Start offset in characters (inclusive).
    pub start_index: usize,
    /// End offset in characters (exclusive).
    pub end_index: usize,
    /// Kind of match.
    pub match_type: MatchType,
    /// Confidence 0–100.
    pub confidence: u8,
    /// Label of the originating source.
    pub source: String,
    /// Label of the pattern family that fired.
    pub pattern: String,
    /// Link to the source, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Intermediate signals the headline scores are derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Signals {
    /// Whitespace-delimited word count.
    pub word_count: usize,
    /// Number of non-empty sentences.
    pub sentence_count: usize,
    /// Sentence-length variability, 0–100 (higher = more varied).
    pub burstiness: f64,
    /// Scaled type-token ratio, 0–100 (higher = richer vocabulary).
    pub vocabulary_richness: f64,
    /// Matches of AI-pattern families.
    pub ai_pattern_count: usize,
    /// Matches of cliché families.
    pub cliche_count: usize,
    /// Pattern-density sub-score, 0–100.
    pub pattern_score: f64,
    /// Points deducted from the originality score for raw match volume.
    pub match_penalty: u32,
}

/// Result of scoring a single text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisReport {
    /// Originality score, 0–100 (higher = more original).
    pub overall_score: u8,
    /// Likelihood of machine generation, 0–100.
    pub ai_generated_score: u8,
    /// Matches in discovery order (library order, then text order).
    pub matches: Vec<Match>,
    /// One-line verdict keyed off the originality score.
    pub summary: String,
    /// Advisory suggestions in fixed order.
    pub suggestions: Vec<String>,
    /// Breakdown of the signals behind the scores.
    pub signals: Signals,
}

/// Result of comparing two texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ComparisonReport {
    /// Jaccard similarity of the two word sets, 0–100.
    pub similarity: u8,
    /// Four-word phrases present in both texts (at most 10).
    pub common_phrases: Vec<String>,
}
