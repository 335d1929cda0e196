//! Resume text parsing module.

mod cleanup;
mod options;
mod resume_parser;

pub use cleanup::{CleanupOptions, CleanupPipeline, CleanupPreset};
pub use options::{ParseOptions, DEFAULT_SECTION_TITLE};
pub use resume_parser::{parse, ResumeParser, BULLET_MARKERS};
