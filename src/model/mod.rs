//! Document model types shared by the parser, diff engine and renderer.
//!
//! Every value here is created fresh by one engine call and never mutated
//! afterwards; callers own the results.

mod diff;
mod resume;

pub use diff::{DiffLine, DiffSummary, TokenChange, WordDiff, WordToken};
pub use resume::{Header, ParsedResume, ResumeStats, Section};
