//! Free-form resume text parser.

use regex::Regex;
use std::sync::OnceLock;

use crate::model::{Header, ParsedResume, Section};

use super::{CleanupPipeline, ParseOptions};

/// Bullet markers recognized at the start of a section line.
pub const BULLET_MARKERS: [char; 2] = ['-', '•'];

fn blank_line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n\s*\n").unwrap())
}

/// Resume text parser.
///
/// Parsing never fails: malformed or empty input degrades to a resume with
/// fewer (or no) sections.
#[derive(Debug, Clone, Default)]
pub struct ResumeParser {
    options: ParseOptions,
    cleanup: Option<CleanupPipeline>,
}

impl ResumeParser {
    /// Create a parser with custom options.
    pub fn new(options: ParseOptions) -> Self {
        let cleanup = options.cleanup.clone().map(CleanupPipeline::new);
        Self { options, cleanup }
    }

    /// Get the parser options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse resume text into a header and sections.
    pub fn parse(&self, content: &str) -> ParsedResume {
        let mut text = normalize_line_endings(content);
        if let Some(ref pipeline) = self.cleanup {
            text = pipeline.process(&text);
        }

        let text = text.trim();
        if text.is_empty() {
            return ParsedResume::new();
        }

        let blocks: Vec<&str> = blank_line_regex()
            .split(text)
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .collect();

        let Some((first, rest)) = blocks.split_first() else {
            return ParsedResume::new();
        };

        let mut resume = ParsedResume::new();
        let section_blocks = match detect_header(first) {
            Some(header) => {
                resume.header = Some(header);
                rest
            }
            None => &blocks[..],
        };

        for block in section_blocks {
            resume.add_section(self.parse_section(block));
        }

        log::debug!(
            "Parsed {} blocks into {} sections (header: {})",
            blocks.len(),
            resume.sections.len(),
            resume.header.is_some()
        );

        resume
    }

    fn parse_section(&self, block: &str) -> Section {
        let mut lines = block_lines(block);

        let title = lines
            .next()
            .unwrap_or(self.options.default_section_title.as_str());
        let mut section = Section::new(title);

        for line in lines {
            match strip_bullet(line) {
                Some(item) => section.add_bullet(item),
                None => section.add_paragraph(line),
            }
        }

        section
    }
}

/// Parse resume text with default options.
pub fn parse(content: &str) -> ParsedResume {
    ResumeParser::default().parse(content)
}

/// Convert `\r\n` and lone `\r` line endings to `\n`.
fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn block_lines(block: &str) -> impl Iterator<Item = &str> {
    block.lines().map(str::trim).filter(|l| !l.is_empty())
}

/// A first block is a header if it has two or more lines, or if its only
/// line looks like contact info (`|` separators or an email address).
fn detect_header(block: &str) -> Option<Header> {
    let lines: Vec<&str> = block_lines(block).collect();
    let first = lines.first()?;

    let is_header = lines.len() >= 2 || first.contains('|') || first.contains('@');
    if !is_header {
        return None;
    }

    Some(Header {
        name: first.to_string(),
        contact_lines: lines[1..].iter().map(|l| l.to_string()).collect(),
    })
}

/// Strip a leading bullet marker and the whitespace after it.
fn strip_bullet(line: &str) -> Option<&str> {
    line.strip_prefix(BULLET_MARKERS).map(str::trim_start)
}
