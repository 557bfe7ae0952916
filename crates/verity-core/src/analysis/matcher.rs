//! Pattern matching against a [`PatternLibrary`].

use crate::patterns::PatternLibrary;

use super::reports::Match;

/// Scan `text` with every family in `library`.
///
/// Families are scanned in library order; within a family, occurrences are
/// reported left to right and never overlap. Matches from different
/// families may overlap and are kept as-is.
#[tracing::instrument(skip_all, fields(text_len = text.len(), patterns = library.len()))]
pub fn find_matches(text: &str, library: &PatternLibrary) -> Vec<Match> {
    let mut matches = Vec::new();

    for pattern in library.iter() {
        let definition = pattern.definition();
        let category = definition.category;
        let mut offsets = CharOffsets::new(text);

        for found in pattern.regex().find_iter(text) {
            let start_index = offsets.char_index(found.start());
            let end_index = offsets.char_index(found.end());
            matches.push(Match {
                text: found.as_str().to_string(),
                start_index,
                end_index,
                match_type: category.match_type(),
                confidence: definition.effective_confidence(),
                source: category.source_label().to_string(),
                pattern: definition.label.clone(),
                url: None,
            });
        }
    }

    tracing::debug!(matches = matches.len(), "pattern scan complete");
    matches
}

/// Converts ascending byte offsets into character offsets in one pass.
struct CharOffsets<'a> {
    text: &'a str,
    byte: usize,
    chars: usize,
}

impl<'a> CharOffsets<'a> {
    const fn new(text: &'a str) -> Self {
        Self {
            text,
            byte: 0,
            chars: 0,
        }
    }

    /// Character index of `byte`. Offsets must be non-decreasing across calls.
    fn char_index(&mut self, byte: usize) -> usize {
        debug_assert!(byte >= self.byte, "offsets must be non-decreasing");
        self.chars += self.text[self.byte..byte].chars().count();
        self.byte = byte;
        self.chars
    }
}
