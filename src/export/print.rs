//! Print-driven PDF export.
//!
//! The engine cannot produce PDF bytes itself. It builds a printable HTML
//! document and hands it to a [`PrintHost`], an adapter around whatever can
//! open a document and show a print dialog (a browser window, a headless
//! browser, a desktop opener). When the host refuses, the export falls back
//! to an HTML download.

use crate::model::ParsedResume;

use super::document::{html_document, parse_with};
use super::{Artifact, ExportFormat, ExportOptions};

/// Environment adapter able to open a printable document.
pub trait PrintHost {
    /// Open the document so the user can print it (e.g. "Save as PDF").
    fn open_printable_document(&mut self, html: &str) -> PrintOutcome;
}

/// Result of asking a print host to open a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintOutcome {
    /// The document was opened and the print flow has started
    Opened,
    /// The host could not open the document (popup blocked, no opener, ...)
    Blocked {
        /// Why the host refused
        reason: String,
    },
}

/// Outcome of a PDF export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PdfExport {
    /// The print host is showing the printable document
    Printing,
    /// The print host was blocked; the HTML document is offered as a download
    Downloaded(Artifact),
}

impl PdfExport {
    /// Check if the export fell back to a download.
    pub fn is_fallback(&self) -> bool {
        matches!(self, PdfExport::Downloaded(_))
    }

    /// Fallback artifact, if any.
    pub fn artifact(&self) -> Option<&Artifact> {
        match self {
            PdfExport::Downloaded(artifact) => Some(artifact),
            PdfExport::Printing => None,
        }
    }
}

/// Export resume text to PDF through a print host.
///
/// The printable document always carries the print-on-load script. If the
/// host is blocked, the regular HTML export is returned as a download instead.
pub fn export_pdf(text: &str, options: &ExportOptions, host: &mut dyn PrintHost) -> PdfExport {
    let parsed = parse_with(text, options);
    print_parsed(&parsed, text, options, host)
}

pub(crate) fn print_parsed(
    parsed: &ParsedResume,
    text: &str,
    options: &ExportOptions,
    host: &mut dyn PrintHost,
) -> PdfExport {
    let print_options = options.render.clone().with_print_on_load(true);
    let printable = html_document(parsed, text, options, &print_options);

    match host.open_printable_document(&printable) {
        PrintOutcome::Opened => {
            log::debug!("Print host opened {} template", options.template);
            PdfExport::Printing
        }
        PrintOutcome::Blocked { reason } => {
            log::warn!(
                "Print host blocked ({}), falling back to HTML download",
                reason
            );
            let content = html_document(parsed, text, options, &options.render);
            PdfExport::Downloaded(Artifact::new(
                content,
                ExportFormat::Html.mime_type(),
                options.file_name(ExportFormat::Html),
            ))
        }
    }
}
