//! Rendering options and configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Title used for exported documents when the resume has no header.
pub const DEFAULT_DOCUMENT_TITLE: &str = "Resume";

/// Options for rendering a resume to HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Printed page size
    pub page_size: PageSize,

    /// Document `<title>` (defaults to the header name, then "Resume")
    pub document_title: Option<String>,

    /// Open the browser's print dialog as soon as the document loads
    pub print_on_load: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size.
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.document_title = Some(title.into());
        self
    }

    /// Enable or disable the print-on-load script.
    pub fn with_print_on_load(mut self, enabled: bool) -> Self {
        self.print_on_load = enabled;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            document_title: None,
            print_on_load: false,
        }
    }
}

/// Printed page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    /// ISO A4 (210 x 297 mm)
    #[default]
    A4,
    /// US Letter (8.5 x 11 in)
    Letter,
}

impl PageSize {
    /// CSS `@page { size }` keyword.
    pub fn as_css(&self) -> &'static str {
        match self {
            PageSize::A4 => "A4",
            PageSize::Letter => "letter",
        }
    }

    /// Page width as a CSS length, used for the on-screen sheet.
    pub fn width_css(&self) -> &'static str {
        match self {
            PageSize::A4 => "210mm",
            PageSize::Letter => "8.5in",
        }
    }

    /// Page height as a CSS length, used for the on-screen sheet.
    pub fn height_css(&self) -> &'static str {
        match self {
            PageSize::A4 => "297mm",
            PageSize::Letter => "11in",
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSize::A4 => f.write_str("a4"),
            PageSize::Letter => f.write_str("letter"),
        }
    }
}

impl FromStr for PageSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a4" => Ok(PageSize::A4),
            "letter" => Ok(PageSize::Letter),
            other => Err(Error::Other(format!("Invalid page size: {}", other))),
        }
    }
}
