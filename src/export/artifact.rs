//! Downloadable export artifacts.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Error, Result};

/// File format of an exported artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExportFormat {
    /// Standalone HTML document
    #[default]
    Html,
    /// Word-compatible HTML served as `.doc`
    Doc,
    /// Print-to-PDF through the print host
    Pdf,
    /// Parsed resume as JSON
    Json,
}

impl ExportFormat {
    /// Every format, in display order.
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Html,
        ExportFormat::Doc,
        ExportFormat::Pdf,
        ExportFormat::Json,
    ];

    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Doc => "doc",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Json => "json",
        }
    }

    /// MIME type of the downloaded file.
    ///
    /// PDF is produced by the print host, so a PDF export that falls back to a
    /// download is served as HTML.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Html | ExportFormat::Pdf => "text/html",
            ExportFormat::Doc => "application/msword",
            ExportFormat::Json => "application/json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().trim_start_matches('.');
        ExportFormat::ALL
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnsupportedFormat(name.to_string()))
    }
}

/// An exported file held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// File content
    pub content: String,

    /// MIME type of the content
    pub mime_type: &'static str,

    /// Suggested file name (no directory)
    pub file_name: String,
}

impl Artifact {
    /// Create a new artifact.
    pub fn new(content: String, mime_type: &'static str, file_name: impl Into<String>) -> Self {
        Self {
            content,
            mime_type,
            file_name: file_name.into(),
        }
    }

    /// Get content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }

    /// Write the artifact into `dir` under its file name.
    ///
    /// The directory is created if it does not exist.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let path = dir.join(&self.file_name);
        fs::write(&path, &self.content)?;

        log::debug!(
            "Wrote {} ({} bytes, {})",
            path.display(),
            self.content.len(),
            self.mime_type
        );
        Ok(path)
    }
}
