//! Line and word diff between an original and an optimized resume.
//!
//! # Example
//!
//! ```
//! use resumekit::diff::diff;
//! use resumekit::model::DiffLine;
//!
//! let lines = diff("A\nB\nC", "A\nX\nC");
//! assert!(matches!(lines[1], DiffLine::Modified { .. }));
//! ```

mod line;
mod options;
mod word;

pub use line::{diff, DiffEngine};
pub use options::DiffOptions;
pub use word::{diff_words, tokenize};
