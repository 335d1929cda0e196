//! Diff options and configuration.

/// Options for comparing an original and an optimized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffOptions {
    /// Compute word-level highlighting for modified lines
    pub highlight_words: bool,

    /// How many lines ahead to search when disambiguating insertions and
    /// deletions from modifications (`None` = the whole remainder)
    pub max_lookahead: Option<usize>,
}

impl DiffOptions {
    /// Create new diff options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable word-level highlighting.
    pub fn with_word_highlighting(mut self, enabled: bool) -> Self {
        self.highlight_words = enabled;
        self
    }

    /// Limit the lookahead window. A window of zero never searches ahead,
    /// so every mismatch becomes a modification.
    pub fn with_max_lookahead(mut self, lines: usize) -> Self {
        self.max_lookahead = Some(lines);
        self
    }
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            highlight_words: true,
            max_lookahead: None,
        }
    }
}
