//! Error types for resumekit library.
//!
//! Parsing, diffing and rendering never fail; they degrade to empty or raw output.
//! Errors only surface at the edges: file I/O, lookups by name, and serialization.

use std::io;
use thiserror::Error;

/// Result type alias for resumekit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around the resume engine.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The template name does not match any known template.
    #[error("Unknown template: {0} (expected one of: modern, classic, accent)")]
    UnknownTemplate(String),

    /// No exporter is registered for the requested format.
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// Error during rendering (JSON serialization).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
