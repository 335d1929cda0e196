//! Diff record types.

use serde::{Deserialize, Serialize};

/// One line-level comparison outcome between an original and an optimized text.
///
/// Line numbers are 1-based and count lines of their own side only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiffLine {
    /// The line is identical on both sides.
    Unchanged {
        /// Line from the original text
        original_line: String,
        /// Line from the optimized text
        optimized_line: String,
        /// Position in the original text
        original_line_number: u32,
        /// Position in the optimized text
        optimized_line_number: u32,
    },

    /// The line only exists in the optimized text.
    Added {
        /// Line from the optimized text
        optimized_line: String,
        /// Position in the optimized text
        optimized_line_number: u32,
    },

    /// The line only exists in the original text.
    Removed {
        /// Line from the original text
        original_line: String,
        /// Position in the original text
        original_line_number: u32,
    },

    /// The line was rewritten; both versions are paired.
    Modified {
        /// Line from the original text
        original_line: String,
        /// Line from the optimized text
        optimized_line: String,
        /// Position in the original text
        original_line_number: u32,
        /// Position in the optimized text
        optimized_line_number: u32,
        /// Word-level highlighting of the change
        words: WordDiff,
    },
}

impl DiffLine {
    /// The original-side line and its number, if this record carries one.
    pub fn original(&self) -> Option<(&str, u32)> {
        match self {
            DiffLine::Unchanged {
                original_line,
                original_line_number,
                ..
            }
            | DiffLine::Removed {
                original_line,
                original_line_number,
            }
            | DiffLine::Modified {
                original_line,
                original_line_number,
                ..
            } => Some((original_line, *original_line_number)),
            DiffLine::Added { .. } => None,
        }
    }

    /// The optimized-side line and its number, if this record carries one.
    pub fn optimized(&self) -> Option<(&str, u32)> {
        match self {
            DiffLine::Unchanged {
                optimized_line,
                optimized_line_number,
                ..
            }
            | DiffLine::Added {
                optimized_line,
                optimized_line_number,
            }
            | DiffLine::Modified {
                optimized_line,
                optimized_line_number,
                ..
            } => Some((optimized_line, *optimized_line_number)),
            DiffLine::Removed { .. } => None,
        }
    }

    /// Check if this record represents a change.
    pub fn is_change(&self) -> bool {
        !matches!(self, DiffLine::Unchanged { .. })
    }
}

/// Word-level highlighting for a modified line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordDiff {
    /// Tokens of the original line
    pub original: Vec<WordToken>,

    /// Tokens of the optimized line
    pub optimized: Vec<WordToken>,
}

impl WordDiff {
    /// Check if no tokens were produced.
    pub fn is_empty(&self) -> bool {
        self.original.is_empty() && self.optimized.is_empty()
    }
}

/// A word or whitespace run with its highlight state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordToken {
    /// Token text, either a word or a whitespace run
    pub text: String,

    /// Highlight state
    pub change: TokenChange,
}

impl WordToken {
    /// Create a new token.
    pub fn new(text: impl Into<String>, change: TokenChange) -> Self {
        Self {
            text: text.into(),
            change,
        }
    }

    /// Check if this token is a whitespace run.
    pub fn is_whitespace(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(char::is_whitespace)
    }
}

/// Highlight state of a word token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenChange {
    /// No highlight
    Unchanged,
    /// Present only in the original line
    Removed,
    /// Present only in the optimized line
    Added,
}

/// Record counts of a diff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    /// Number of unchanged lines
    pub unchanged: u32,
    /// Number of added lines
    pub added: u32,
    /// Number of removed lines
    pub removed: u32,
    /// Number of modified line pairs
    pub modified: u32,
}

impl DiffSummary {
    /// Count the records of a diff.
    pub fn from_lines(lines: &[DiffLine]) -> Self {
        let mut summary = Self::default();
        for line in lines {
            let counter = match line {
                DiffLine::Unchanged { .. } => &mut summary.unchanged,
                DiffLine::Added { .. } => &mut summary.added,
                DiffLine::Removed { .. } => &mut summary.removed,
                DiffLine::Modified { .. } => &mut summary.modified,
            };
            *counter = counter.saturating_add(1);
        }
        summary
    }

    /// Total number of records.
    pub fn total(&self) -> u32 {
        self.unchanged.saturating_add(self.changes())
    }

    /// Number of records that are not unchanged.
    pub fn changes(&self) -> u32 {
        self.added
            .saturating_add(self.removed)
            .saturating_add(self.modified)
    }

    /// Check if both texts were identical.
    pub fn is_identical(&self) -> bool {
        self.changes() == 0
    }
}
