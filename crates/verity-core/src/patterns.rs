//! Pattern library: phrase families that flag templated or clichéd prose.
//!
//! A [`PatternLibrary`] is an immutable, compiled set of
//! [`PatternDefinition`]s. The built-in set is available through
//! [`PatternLibrary::builtin`]; callers can extend it with their own
//! families (e.g. from configuration) or replace it entirely.
//!
//! Every definition is a regular expression compiled case-insensitively.
//! One definition covers a family of variants, so
//! `\bin conclusion\b,?` matches both "In conclusion" and "in conclusion,".

use std::fmt;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analysis::reports::MatchType;
use crate::error::{PatternError, PatternResult};

/// Which kind of unoriginal phrasing a pattern family detects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum PatternCategory {
    /// Stock transitions and framings typical of machine-generated text.
    #[cfg_attr(feature = "clap", value(name = "ai-pattern"))]
    AiPattern,
    /// Worn-out idioms.
    #[cfg_attr(feature = "clap", value(name = "cliche"))]
    Cliche,
}

impl PatternCategory {
    /// Confidence assigned to matches of this category unless a definition overrides it.
    pub const fn base_confidence(self) -> u8 {
        match self {
            Self::AiPattern => 70,
            Self::Cliche => 50,
        }
    }

    /// The match type reported for occurrences of this category.
    pub const fn match_type(self) -> MatchType {
        match self {
            Self::AiPattern => MatchType::AiPattern,
            Self::Cliche => MatchType::Paraphrase,
        }
    }

    /// Human-readable source label attached to each match.
    pub const fn source_label(self) -> &'static str {
        match self {
            Self::AiPattern => "AI writing pattern",
            Self::Cliche => "Common cliché",
        }
    }

    /// Returns the category as a kebab-case string slice.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AiPattern => "ai-pattern",
            Self::Cliche => "cliche",
        }
    }
}

impl fmt::Display for PatternCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An uncompiled pattern family.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct PatternDefinition {
    /// Short name for the family, e.g. "in conclusion".
    pub label: String,
    /// Regular expression source. Compiled case-insensitively.
    pub pattern: String,
    /// Category the family belongs to.
    pub category: PatternCategory,
    /// Confidence override (0–100). Defaults to the category's base confidence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<u8>,
}

impl PatternDefinition {
    /// Create a definition with the category's base confidence.
    pub fn new(
        label: impl Into<String>,
        pattern: impl Into<String>,
        category: PatternCategory,
    ) -> Self {
        Self {
            label: label.into(),
            pattern: pattern.into(),
            category,
            confidence: None,
        }
    }

    /// The confidence matches of this family carry.
    pub fn effective_confidence(&self) -> u8 {
        self.confidence
            .unwrap_or_else(|| self.category.base_confidence())
    }
}

/// A definition paired with its compiled matcher.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    definition: PatternDefinition,
    regex: Regex,
}

impl CompiledPattern {
    fn compile(definition: PatternDefinition) -> PatternResult<Self> {
        if let Some(confidence) = definition.confidence
            && confidence > 100
        {
            return Err(PatternError::InvalidConfidence {
                label: definition.label,
                confidence,
            });
        }

        let regex = RegexBuilder::new(&definition.pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| PatternError::InvalidRegex {
                label: definition.label.clone(),
                source: Box::new(e),
            })?;

        if can_match_zero_width(&regex) {
            return Err(PatternError::EmptyMatch {
                label: definition.label,
            });
        }

        Ok(Self { definition, regex })
    }

    /// The source definition.
    pub const fn definition(&self) -> &PatternDefinition {
        &self.definition
    }

    /// The compiled, case-insensitive matcher.
    pub const fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Shorthand for the definition's category.
    pub const fn category(&self) -> PatternCategory {
        self.definition.category
    }
}

/// Immutable, compiled collection of pattern families.
///
/// Order is preserved: the matcher scans families in library order.
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    patterns: Vec<CompiledPattern>,
}

impl PatternLibrary {
    /// Compile a library from definitions.
    ///
    /// Fails on the first definition that does not compile.
    #[tracing::instrument(skip_all, fields(count = definitions.len()))]
    pub fn new(definitions: Vec<PatternDefinition>) -> PatternResult<Self> {
        let patterns = definitions
            .into_iter()
            .map(CompiledPattern::compile)
            .collect::<PatternResult<Vec<_>>>()?;
        tracing::debug!(patterns = patterns.len(), "pattern library compiled");
        Ok(Self { patterns })
    }

    /// The built-in library.
    pub fn builtin() -> Self {
        Self {
            patterns: BUILTIN_PATTERNS.clone(),
        }
    }

    /// The built-in library followed by `extra` custom families.
    pub fn builtin_with(extra: Vec<PatternDefinition>) -> PatternResult<Self> {
        let mut library = Self::builtin();
        for definition in extra {
            library.patterns.push(CompiledPattern::compile(definition)?);
        }
        Ok(library)
    }

    /// Number of pattern families.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the library has no families.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Iterate compiled families in library order.
    pub fn iter(&self) -> impl Iterator<Item = &CompiledPattern> {
        self.patterns.iter()
    }

    /// Clone out the source definitions in library order.
    pub fn definitions(&self) -> Vec<PatternDefinition> {
        self.patterns.iter().map(|p| p.definition.clone()).collect()
    }
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Short haystacks on which any zero-width pattern yields an empty match.
const ZERO_WIDTH_HAYSTACKS: &[&str] = &["", "a", "a b", "a\nb", "a. b"];

/// Whether `regex` yields an empty match on any of a few short haystacks.
fn can_match_zero_width(regex: &Regex) -> bool {
    ZERO_WIDTH_HAYSTACKS
        .iter()
        .any(|haystack| regex.find_iter(haystack).any(|m| m.is_empty()))
}

/// Built-in families, compiled once.
static BUILTIN_PATTERNS: LazyLock<Vec<CompiledPattern>> = LazyLock::new(|| {
    builtin_definitions()
        .into_iter()
        .map(|definition| CompiledPattern::compile(definition).expect("built-in patterns are valid"))
        .collect()
});

/// Built-in families: (label, regex, category).
const BUILTIN: &[(&str, &str, PatternCategory)] = &[
    // AI-style transitions and framings
    ("in conclusion", r"\bin conclusion\b,?", PatternCategory::AiPattern),
    (
        "it is important to note",
        r"\bit(?: is|'s) important to (?:note|remember|understand)(?: that)?",
        PatternCategory::AiPattern,
    ),
    (
        "it is worth noting",
        r"\bit(?: is|'s) worth (?:noting|mentioning)(?: that)?",
        PatternCategory::AiPattern,
    ),
    ("delve into", r"\bdelv(?:e|es|ed|ing) (?:into|deeper)\b", PatternCategory::AiPattern),
    (
        "in today's world",
        r"\bin today'?s (?:fast-paced |digital |modern |ever-changing )?(?:world|society|landscape|age)\b",
        PatternCategory::AiPattern,
    ),
    ("furthermore", r"\bfurthermore\b,?", PatternCategory::AiPattern),
    ("moreover", r"\bmoreover\b,?", PatternCategory::AiPattern),
    ("additionally", r"\badditionally\b,?", PatternCategory::AiPattern),
    ("in summary", r"\bin (?:summary|essence)\b,?", PatternCategory::AiPattern),
    (
        "plays a crucial role",
        r"\bplay(?:s|ed|ing)? an? (?:crucial|vital|pivotal|key|significant) role\b",
        PatternCategory::AiPattern,
    ),
    ("a testament to", r"\ba testament to\b", PatternCategory::AiPattern),
    (
        "navigate the complexities",
        r"\bnavigat(?:e|es|ed|ing) the (?:complexities|intricacies)\b",
        PatternCategory::AiPattern,
    ),
    (
        "rich tapestry",
        r"\b(?:rich|intricate|vibrant) tapestry\b",
        PatternCategory::AiPattern,
    ),
    ("in the realm of", r"\bin the realm of\b", PatternCategory::AiPattern),
    (
        "it is essential to",
        r"\bit(?: is|'s) (?:essential|crucial|imperative) to\b",
        PatternCategory::AiPattern,
    ),
    (
        "this essay will",
        r"\bthis (?:essay|paper|article) (?:will|aims to|seeks to)\b",
        PatternCategory::AiPattern,
    ),
    (
        "ever-evolving landscape",
        r"\bever-(?:evolving|changing) (?:landscape|world|field)\b",
        PatternCategory::AiPattern,
    ),
    (
        "unlock the potential",
        r"\bunlock(?:s|ed|ing)? the (?:full )?potential\b",
        PatternCategory::AiPattern,
    ),
    (
        "serves as a reminder",
        r"\bserv(?:e|es|ed) as an? (?:reminder|catalyst|cornerstone)\b",
        PatternCategory::AiPattern,
    ),
    ("overall", r"\boverall,", PatternCategory::AiPattern),
    ("ultimately", r"\bultimately,", PatternCategory::AiPattern),
    (
        "not only ... but also",
        r"\bnot only\b[^.!?]{1,80}?\bbut also\b",
        PatternCategory::AiPattern,
    ),
    // Clichés
    ("at the end of the day", r"\bat the end of the day\b", PatternCategory::Cliche),
    (
        "think outside the box",
        r"\bthink(?:s|ing)? outside (?:of )?the box\b",
        PatternCategory::Cliche,
    ),
    ("only time will tell", r"\bonly time will tell\b", PatternCategory::Cliche),
    ("last but not least", r"\blast but not least\b", PatternCategory::Cliche),
    ("in a nutshell", r"\bin a nutshell\b", PatternCategory::Cliche),
    ("needless to say", r"\bneedless to say\b", PatternCategory::Cliche),
    ("easier said than done", r"\beasier said than done\b", PatternCategory::Cliche),
    ("double-edged sword", r"\ba double[- ]edged sword\b", PatternCategory::Cliche),
    ("tip of the iceberg", r"\bthe tip of the iceberg\b", PatternCategory::Cliche),
    (
        "since the dawn of time",
        r"\bsince the (?:dawn|beginning) of (?:time|mankind|humanity)\b",
        PatternCategory::Cliche,
    ),
    (
        "avoid like the plague",
        r"\bavoid(?:s|ed|ing)? (?:it |them )?like the plague\b",
        PatternCategory::Cliche,
    ),
    ("silver lining", r"\bsilver lining\b", PatternCategory::Cliche),
    ("level playing field", r"\ba level playing field\b", PatternCategory::Cliche),
];

/// The built-in definitions, uncompiled.
pub fn builtin_definitions() -> Vec<PatternDefinition> {
    BUILTIN
        .iter()
        .map(|&(label, pattern, category)| PatternDefinition::new(label, pattern, category))
        .collect()
}
