//! Error types for verity-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,

    /// A setting deserialized but its value is out of range.
    #[error("invalid configuration: `{field}` {reason}")]
    Invalid {
        /// Dotted path of the offending setting.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while building a pattern library.
///
/// These indicate a malformed pattern definition. They surface when the
/// library is constructed, never while a text is being scored.
#[derive(Error, Debug)]
pub enum PatternError {
    /// The pattern source is not a valid regular expression.
    #[error("invalid pattern `{label}`: {source}")]
    InvalidRegex {
        /// Label of the offending pattern family.
        label: String,
        /// Underlying regex compilation error.
        #[source]
        source: Box<regex::Error>,
    },

    /// The pattern can match zero characters (e.g. `x*`, `\b`, `^`).
    #[error("pattern `{label}` can match zero characters")]
    EmptyMatch {
        /// Label of the offending pattern family.
        label: String,
    },

    /// A confidence override is outside 0–100.
    #[error("pattern `{label}` has confidence {confidence} (must be 0-100)")]
    InvalidConfidence {
        /// Label of the offending pattern family.
        label: String,
        /// The rejected confidence value.
        confidence: u8,
    },
}

/// Result type alias using [`PatternError`].
pub type PatternResult<T> = Result<T, PatternError>;

/// Caller-side input envelope violations.
///
/// The scoring engine accepts any string. These errors exist for callers
/// that want to enforce the recommended operating envelope before scoring.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    /// Text is shorter than the configured minimum.
    #[error("text is too short: {chars} characters (minimum {min})")]
    TooShort {
        /// Character count of the rejected text.
        chars: usize,
        /// Configured minimum.
        min: usize,
    },

    /// Text is longer than the configured maximum.
    #[error("text is too long: {chars} characters (maximum {max})")]
    TooLong {
        /// Character count of the rejected text.
        chars: usize,
        /// Configured maximum.
        max: usize,
    },
}
