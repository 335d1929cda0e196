//! Export serializers providing a plugin architecture for artifact formats.
//!
//! Exporters turn resume text into downloadable [`Artifact`]s. The registry
//! dispatches on file extension or exporter name, the same way for built-in
//! formats and for formats registered by callers.
//!
//! # Example
//!
//! ```no_run
//! use resumekit::export::{ExportOptions, ExporterRegistry};
//! use resumekit::render::TemplateKey;
//!
//! fn main() -> resumekit::Result<()> {
//!     let registry = ExporterRegistry::with_defaults();
//!     let options = ExportOptions::new().with_template(TemplateKey::Classic);
//!
//!     let text = "Jane Doe\njane@x.com\n\nSkills\n- Rust";
//!     let artifact = registry.export(text, "doc", &options)?;
//!     artifact.write_to("out")?;
//!     Ok(())
//! }
//! ```

mod artifact;
mod document;
mod print;

pub(crate) use document::{html_artifact, json_artifact};
pub(crate) use print::print_parsed;

pub use artifact::{Artifact, ExportFormat};
pub use document::{
    export_doc, export_html, export_json, DocExporter, HtmlExporter, JsonExporter,
};
pub use print::{export_pdf, PdfExport, PrintHost, PrintOutcome};

use crate::error::{Error, Result};
use crate::parser::ParseOptions;
use crate::render::{RenderOptions, TemplateKey};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Default file name (without extension) for exported artifacts.
pub const DEFAULT_FILE_STEM: &str = "resume";

/// Options for exporting a resume.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Visual template
    pub template: TemplateKey,

    /// Rendering options
    pub render: RenderOptions,

    /// Parsing options applied to the input text
    pub parse: ParseOptions,

    /// File name of the artifact, without extension
    pub file_stem: String,
}

impl ExportOptions {
    /// Create new export options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the template.
    pub fn with_template(mut self, template: TemplateKey) -> Self {
        self.template = template;
        self
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }

    /// Set parsing options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse = options;
        self
    }

    /// Set the artifact file name (without extension).
    pub fn with_file_stem(mut self, stem: impl Into<String>) -> Self {
        self.file_stem = stem.into();
        self
    }

    /// Artifact file name for a format.
    pub fn file_name(&self, format: ExportFormat) -> String {
        format!("{}.{}", self.file_stem, format.extension())
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            template: TemplateKey::default(),
            render: RenderOptions::default(),
            parse: ParseOptions::default(),
            file_stem: DEFAULT_FILE_STEM.to_string(),
        }
    }
}

/// Trait for artifact exporters.
///
/// Implement this trait to add support for a new output format.
pub trait ArtifactExporter: Send + Sync {
    /// Get the file extensions this exporter produces.
    ///
    /// Extensions should be lowercase without the leading dot (e.g., `["html"]`).
    fn supported_extensions(&self) -> &[&str];

    /// Get the name of this exporter.
    fn name(&self) -> &str;

    /// Export resume text.
    fn export(&self, text: &str, options: &ExportOptions) -> Result<Artifact>;

    /// Check if this exporter supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Registry for artifact exporters.
///
/// The registry maps file extensions to exporters and provides
/// convenient methods for exporting resumes.
pub struct ExporterRegistry {
    exporters: HashMap<String, Arc<dyn ArtifactExporter>>,
    by_name: HashMap<String, Arc<dyn ArtifactExporter>>,
}

impl ExporterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            exporters: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with default exporters (HTML, DOC, JSON).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(HtmlExporter::new()));
        registry.register(Arc::new(DocExporter::new()));
        registry.register(Arc::new(JsonExporter::new()));
        registry
    }

    /// Register an exporter.
    ///
    /// The exporter will be registered for all its supported extensions.
    pub fn register(&mut self, exporter: Arc<dyn ArtifactExporter>) {
        for ext in exporter.supported_extensions() {
            self.exporters.insert(ext.to_lowercase(), exporter.clone());
        }
        self.by_name.insert(exporter.name().to_lowercase(), exporter);
    }

    /// Get an exporter by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn ArtifactExporter>> {
        self.exporters
            .get(&ext.trim_start_matches('.').to_lowercase())
            .cloned()
    }

    /// Get an exporter by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn ArtifactExporter>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.get_by_extension(ext).is_some()
    }

    /// Get all supported extensions, sorted.
    pub fn supported_extensions(&self) -> Vec<&str> {
        let mut extensions: Vec<&str> = self.exporters.keys().map(|s| s.as_str()).collect();
        extensions.sort_unstable();
        extensions
    }

    /// Export resume text with the exporter registered for `ext`.
    pub fn export(&self, text: &str, ext: &str, options: &ExportOptions) -> Result<Artifact> {
        let exporter = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedFormat(ext.to_string()))?;

        exporter.export(text, options)
    }

    /// Export resume text for a target path.
    ///
    /// The exporter is chosen by the path's extension and the artifact is
    /// named after the path's file name.
    pub fn export_for_path(
        &self,
        text: &str,
        path: &Path,
        options: &ExportOptions,
    ) -> Result<Artifact> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::Other(format!("File has no extension: {}", path.display())))?;

        let mut artifact = self.export(text, ext, options)?;
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            artifact.file_name = name.to_string();
        }
        Ok(artifact)
    }
}

impl Default for ExporterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
