//! Recommended operating envelope for scored text.
//!
//! The engine itself accepts any string; callers use [`InputLimits`] to
//! reject text that is too short for stable statistics or too long for
//! predictable latency before handing it to the engine.

use crate::error::InputError;
use crate::text;

/// Default minimum text length, in characters.
pub const DEFAULT_MIN_CHARS: usize = 50;
/// Default maximum text length, in characters.
pub const DEFAULT_MAX_CHARS: usize = 50_000;
/// Default maximum input file size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

/// Inclusive character-length bounds for a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputLimits {
    /// Fewest characters accepted.
    pub min_chars: usize,
    /// Most characters accepted.
    pub max_chars: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            min_chars: DEFAULT_MIN_CHARS,
            max_chars: DEFAULT_MAX_CHARS,
        }
    }
}

impl InputLimits {
    /// Check that `input` falls inside the envelope.
    pub fn check(&self, input: &str) -> Result<(), InputError> {
        let chars = text::char_len(input);
        if chars < self.min_chars {
            return Err(InputError::TooShort {
                chars,
                min: self.min_chars,
            });
        }
        if chars > self.max_chars {
            return Err(InputError::TooLong {
                chars,
                max: self.max_chars,
            });
        }
        Ok(())
    }
}
