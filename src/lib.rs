//! # resumekit
//!
//! Resume text engine for Rust.
//!
//! This library parses free-form resume text into a structured model,
//! compares an original resume with an optimized rewrite line by line, and
//! renders the structured model into visual templates for preview and export.
//!
//! ## Quick Start
//!
//! ```
//! use resumekit::{parse, render::{render, to_html_fragment, TemplateKey}};
//!
//! let text = "Jane Doe\njane@x.com\n\nExperience\nDid X\n- Led Y";
//! let resume = parse(text);
//! assert_eq!(resume.sections.len(), 1);
//!
//! let rendered = render(&resume, text, TemplateKey::Modern);
//! let html = to_html_fragment(&rendered);
//! assert!(html.contains("Led Y"));
//! ```
//!
//! ## Features
//!
//! - **Parsing**: header detection, titled sections, paragraphs and bullets
//! - **Diffing**: line diff with lookahead and word-level highlighting
//! - **Templates**: `modern`, `classic` and `accent` from one shared skeleton
//! - **Export**: standalone HTML, Word-compatible DOC, JSON, print-to-PDF
//! - **Cleanup pipeline**: optional Unicode and bullet-glyph normalization

pub mod diff;
pub mod error;
pub mod export;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use diff::{DiffEngine, DiffOptions};
pub use error::{Error, Result};
pub use export::{
    Artifact, ArtifactExporter, ExportFormat, ExportOptions, ExporterRegistry, PdfExport,
    PrintHost, PrintOutcome,
};
pub use model::{
    DiffLine, DiffSummary, Header, ParsedResume, ResumeStats, Section, TokenChange, WordDiff,
    WordToken,
};
pub use parser::{parse, CleanupOptions, CleanupPreset, ParseOptions, ResumeParser};
pub use render::{JsonFormat, PageSize, RenderOptions, RenderedTemplate, TemplateKey};

use std::fs;
use std::path::Path;

/// Parse a resume text file.
///
/// # Example
///
/// ```no_run
/// use resumekit::parse_file;
///
/// let resume = parse_file("resume.txt").unwrap();
/// println!("Sections: {}", resume.section_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ParsedResume> {
    let text = fs::read_to_string(path)?;
    Ok(parse(&text))
}

/// Parse a resume text file with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<ParsedResume> {
    let text = fs::read_to_string(path)?;
    Ok(ResumeParser::new(options).parse(&text))
}

/// Diff two resume text files.
///
/// # Example
///
/// ```no_run
/// use resumekit::{diff_files, DiffSummary};
///
/// let lines = diff_files("original.txt", "optimized.txt").unwrap();
/// println!("{} changes", DiffSummary::from_lines(&lines).changes());
/// ```
pub fn diff_files<P: AsRef<Path>, Q: AsRef<Path>>(
    original: P,
    optimized: Q,
) -> Result<Vec<DiffLine>> {
    let original = fs::read_to_string(original)?;
    let optimized = fs::read_to_string(optimized)?;
    Ok(diff::diff(&original, &optimized))
}

/// Convert a resume text file to a standalone HTML document.
///
/// # Example
///
/// ```no_run
/// use resumekit::{to_html, TemplateKey};
///
/// let html = to_html("resume.txt", TemplateKey::Classic).unwrap();
/// std::fs::write("resume.html", html).unwrap();
/// ```
pub fn to_html<P: AsRef<Path>>(path: P, template: TemplateKey) -> Result<String> {
    let result = ResumeKit::new().with_template(template).parse_file(path)?;
    Ok(result.to_html())
}

/// Convert a resume text file to JSON.
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let resume = parse_file(path)?;
    render::to_json(&resume, format)
}

/// Builder for parsing, rendering and exporting resumes.
///
/// # Example
///
/// ```
/// use resumekit::{CleanupPreset, ExportFormat, PageSize, ResumeKit, TemplateKey};
///
/// let artifact = ResumeKit::new()
///     .with_template(TemplateKey::Accent)
///     .with_page_size(PageSize::Letter)
///     .with_cleanup(CleanupPreset::Standard)
///     .parse("Jane Doe\njane@x.com\n\nSkills\n● Rust")
///     .export(ExportFormat::Doc)?;
/// assert_eq!(artifact.mime_type, "application/msword");
/// # Ok::<(), resumekit::Error>(())
/// ```
pub struct ResumeKit {
    parse_options: ParseOptions,
    export_options: ExportOptions,
}

impl ResumeKit {
    /// Create a new ResumeKit builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            export_options: ExportOptions::default(),
        }
    }

    /// Set the visual template.
    pub fn with_template(mut self, template: TemplateKey) -> Self {
        self.export_options = self.export_options.with_template(template);
        self
    }

    /// Set the printed page size.
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.export_options.render = self.export_options.render.with_page_size(page_size);
        self
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.export_options.render = self.export_options.render.with_title(title);
        self
    }

    /// Set cleanup preset.
    pub fn with_cleanup(mut self, preset: CleanupPreset) -> Self {
        self.parse_options = self.parse_options.with_cleanup_preset(preset);
        self
    }

    /// Set the artifact file name (without extension).
    pub fn with_file_stem(mut self, stem: impl Into<String>) -> Self {
        self.export_options = self.export_options.with_file_stem(stem);
        self
    }

    /// Parse resume text and return a result wrapper.
    pub fn parse(self, text: &str) -> ResumeKitResult {
        let resume = ResumeParser::new(self.parse_options.clone()).parse(text);
        ResumeKitResult {
            text: text.to_string(),
            resume,
            export_options: self.export_options.with_parse_options(self.parse_options),
        }
    }

    /// Parse a resume text file.
    pub fn parse_file<P: AsRef<Path>>(self, path: P) -> Result<ResumeKitResult> {
        let text = fs::read_to_string(path)?;
        Ok(self.parse(&text))
    }
}

impl Default for ResumeKit {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a resume.
pub struct ResumeKitResult {
    /// The parsed resume
    pub resume: ParsedResume,
    /// Source text, used as the raw fallback
    text: String,
    /// Export options to use
    export_options: ExportOptions,
}

impl ResumeKitResult {
    /// Place the resume into the configured template.
    pub fn render(&self) -> RenderedTemplate {
        render::render(&self.resume, &self.text, self.export_options.template)
    }

    /// Convert to a standalone HTML document.
    pub fn to_html(&self) -> String {
        render::to_html_document(&self.render(), &self.export_options.render)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.resume, format)
    }

    /// Export to a downloadable artifact.
    ///
    /// PDF needs a print host; use [`ResumeKitResult::print`] for it.
    pub fn export(&self, format: ExportFormat) -> Result<Artifact> {
        match format {
            ExportFormat::Html | ExportFormat::Doc => Ok(export::html_artifact(
                &self.resume,
                &self.text,
                &self.export_options,
                format,
            )),
            ExportFormat::Json => export::json_artifact(&self.resume, &self.export_options),
            ExportFormat::Pdf => Err(Error::UnsupportedFormat(
                "pdf (requires a print host)".to_string(),
            )),
        }
    }

    /// Export to PDF through a print host, falling back to an HTML download.
    pub fn print(&self, host: &mut dyn PrintHost) -> PdfExport {
        export::print_parsed(&self.resume, &self.text, &self.export_options, host)
    }

    /// Compare the source text against a rewritten version.
    pub fn diff_with(&self, optimized: &str) -> Vec<DiffLine> {
        diff::diff(&self.text, optimized)
    }

    /// Get summary statistics.
    pub fn stats(&self) -> ResumeStats {
        self.resume.stats()
    }

    /// Get the source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the parsed resume.
    pub fn resume(&self) -> &ParsedResume {
        &self.resume
    }
}
