//! Core library for verity.
//!
//! A deterministic, rule-based originality and machine-authorship scoring
//! engine. Given a block of prose it locates stock phrasing, measures
//! sentence-length variation and vocabulary diversity, and fuses these into
//! an originality score and an AI-generation likelihood score, with located
//! matches and advisory suggestions. A separate comparator measures how
//! much two submissions overlap.
//!
//! Every entry point is a pure function of its input: no I/O, no clock, no
//! randomness, no shared mutable state.
//!
//! # Modules
//!
//! - [`analysis`] - Scoring pipeline and [`Engine`]
//! - [`patterns`] - Pattern library
//! - [`compare`] - Pairwise comparison
//! - [`input`] - Caller-side length envelope
//! - [`markdown`] - Markdown-to-prose extraction
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! let report = verity_core::analyze(
//!     "In conclusion, this essay will explore many reasons. \
//!      In conclusion, this essay will explore many reasons.",
//! );
//! assert!(report.ai_generated_score <= 100);
//! println!("{} ({} matches)", report.summary, report.matches.len());
//!
//! let comparison = verity_core::compare("The tide came in.", "The tide came back.");
//! assert_eq!(comparison.similarity, 67);
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod compare;
pub mod config;
pub mod error;
pub mod input;
pub mod markdown;
pub mod patterns;
pub mod text;

pub use analysis::{
    AnalysisReport, ComparisonReport, Engine, Match, MatchType, ScoringWeights, Signals, analyze,
};
pub use compare::compare;
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{ConfigError, ConfigResult, InputError, PatternError, PatternResult};
pub use input::{DEFAULT_MAX_INPUT_BYTES, InputLimits};
pub use patterns::{PatternCategory, PatternDefinition, PatternLibrary};
