//! HTML, DOC and JSON artifact serializers.

use crate::error::Result;
use crate::model::ParsedResume;
use crate::parser::ResumeParser;
use crate::render::{render, to_json, HtmlRenderer, JsonFormat, RenderOptions};

use super::{Artifact, ArtifactExporter, ExportFormat, ExportOptions};

/// Export resume text as a standalone HTML document.
pub fn export_html(text: &str, options: &ExportOptions) -> Artifact {
    let parsed = parse_with(text, options);
    html_artifact(&parsed, text, options, ExportFormat::Html)
}

/// Export resume text as a Word-compatible document.
///
/// The content is the same HTML document as [`export_html`]; only the MIME
/// type and extension differ. Word opens HTML served this way.
pub fn export_doc(text: &str, options: &ExportOptions) -> Artifact {
    let parsed = parse_with(text, options);
    html_artifact(&parsed, text, options, ExportFormat::Doc)
}

/// Export the parsed resume as pretty JSON.
pub fn export_json(text: &str, options: &ExportOptions) -> Result<Artifact> {
    let parsed = parse_with(text, options);
    json_artifact(&parsed, options)
}

pub(crate) fn parse_with(text: &str, options: &ExportOptions) -> ParsedResume {
    ResumeParser::new(options.parse.clone()).parse(text)
}

pub(crate) fn html_artifact(
    parsed: &ParsedResume,
    raw_fallback: &str,
    options: &ExportOptions,
    format: ExportFormat,
) -> Artifact {
    let content = html_document(parsed, raw_fallback, options, &options.render);
    log::debug!(
        "Exported {} with {} template ({} bytes)",
        format,
        options.template,
        content.len()
    );
    Artifact::new(content, format.mime_type(), options.file_name(format))
}

pub(crate) fn json_artifact(parsed: &ParsedResume, options: &ExportOptions) -> Result<Artifact> {
    let content = to_json(parsed, JsonFormat::Pretty)?;
    Ok(Artifact::new(
        content,
        ExportFormat::Json.mime_type(),
        options.file_name(ExportFormat::Json),
    ))
}

pub(crate) fn html_document(
    parsed: &ParsedResume,
    raw_fallback: &str,
    options: &ExportOptions,
    render_options: &RenderOptions,
) -> String {
    let rendered = render(parsed, raw_fallback, options.template);
    HtmlRenderer::new(render_options.clone()).render_document(&rendered)
}

/// HTML document exporter.
#[derive(Debug, Clone, Default)]
pub struct HtmlExporter {
    _private: (),
}

impl HtmlExporter {
    /// Create a new HTML exporter.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ArtifactExporter for HtmlExporter {
    fn supported_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn name(&self) -> &str {
        "html"
    }

    fn export(&self, text: &str, options: &ExportOptions) -> Result<Artifact> {
        Ok(export_html(text, options))
    }
}

/// Word-compatible DOC exporter.
#[derive(Debug, Clone, Default)]
pub struct DocExporter {
    _private: (),
}

impl DocExporter {
    /// Create a new DOC exporter.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ArtifactExporter for DocExporter {
    fn supported_extensions(&self) -> &[&str] {
        &["doc"]
    }

    fn name(&self) -> &str {
        "doc"
    }

    fn export(&self, text: &str, options: &ExportOptions) -> Result<Artifact> {
        Ok(export_doc(text, options))
    }
}

/// JSON exporter for the parsed resume structure.
#[derive(Debug, Clone, Default)]
pub struct JsonExporter {
    _private: (),
}

impl JsonExporter {
    /// Create a new JSON exporter.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ArtifactExporter for JsonExporter {
    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn name(&self) -> &str {
        "json"
    }

    fn export(&self, text: &str, options: &ExportOptions) -> Result<Artifact> {
        export_json(text, options)
    }
}
