//! Advisory suggestions and the one-line summary.
//!
//! Both are pure threshold lookups; the strings are stable so callers can
//! match on them.

use super::reports::Signals;

/// Suggestion emitted when the AI score is high.
pub const ADD_PERSONAL_INSIGHT: &str =
    "Add personal insights or original analysis to make the writing more distinctive.";
/// Suggestion emitted when the AI score is high.
pub const VARY_STRUCTURE: &str =
    "Vary sentence structure and length to create a more natural rhythm.";
/// Suggestion emitted when the AI score is high.
pub const REPLACE_TRANSITIONS: &str =
    "Replace generic transitional phrases with more specific connections between ideas.";
/// Suggestion emitted when many AI-pattern phrases are present.
pub const REDUCE_TRANSITIONS: &str =
    "Reduce the use of generic transitional phrases like \"furthermore\" and \"in conclusion\".";
/// Suggestion emitted when several clichés are present.
pub const REPLACE_CLICHES: &str = "Replace clichés with more specific, original phrasing.";
/// Suggestion emitted when sentence lengths are uniform.
pub const VARY_LENGTH: &str =
    "Vary sentence length: mix short, punchy sentences with longer, more complex ones.";
/// Suggestion emitted when vocabulary is repetitive.
pub const VARIED_VOCABULARY: &str = "Use more varied vocabulary to express your ideas.";

/// Summary for originality of 80 or more.
pub const SUMMARY_HIGH: &str = "Your text appears highly original with minimal AI patterns.";
/// Summary for originality of 60–79.
pub const SUMMARY_MODERATE: &str =
    "Your text shows moderate originality with some common patterns.";
/// Summary for originality of 40–59.
pub const SUMMARY_SEVERAL: &str =
    "Your text contains several patterns common in AI-generated or unoriginal content.";
/// Summary for originality below 40.
pub const SUMMARY_SIGNIFICANT: &str = "Your text shows significant AI-generated or unoriginal \
                                       patterns. Consider substantial revision.";

const AI_SCORE_THRESHOLD: u8 = 60;
const AI_PATTERN_THRESHOLD: usize = 3;
const CLICHE_THRESHOLD: usize = 2;
const BURSTINESS_FLOOR: f64 = 30.0;
const VOCABULARY_FLOOR: f64 = 40.0;

/// Suggestions for a scored text, in fixed order.
pub fn suggestions(ai_generated_score: u8, signals: &Signals) -> Vec<String> {
    let mut out = Vec::new();

    if ai_generated_score > AI_SCORE_THRESHOLD {
        out.extend(
            [ADD_PERSONAL_INSIGHT, VARY_STRUCTURE, REPLACE_TRANSITIONS].map(str::to_string),
        );
    }
    if signals.ai_pattern_count > AI_PATTERN_THRESHOLD {
        out.push(REDUCE_TRANSITIONS.to_string());
    }
    if signals.cliche_count > CLICHE_THRESHOLD {
        out.push(REPLACE_CLICHES.to_string());
    }
    if signals.burstiness < BURSTINESS_FLOOR {
        out.push(VARY_LENGTH.to_string());
    }
    if signals.vocabulary_richness < VOCABULARY_FLOOR {
        out.push(VARIED_VOCABULARY.to_string());
    }

    out
}

/// One-line verdict for an originality score.
pub const fn summary(overall_score: u8) -> &'static str {
    match overall_score {
        80.. => SUMMARY_HIGH,
        60..=79 => SUMMARY_MODERATE,
        40..=59 => SUMMARY_SEVERAL,
        _ => SUMMARY_SIGNIFICANT,
    }
}
