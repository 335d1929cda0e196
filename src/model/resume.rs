//! Resume document types.

use serde::{Deserialize, Serialize};

/// A resume parsed into a header and an ordered list of sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResume {
    /// Name and contact area, present only when the first block looks like one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<Header>,

    /// Sections in document order
    pub sections: Vec<Section>,
}

impl ParsedResume {
    /// Create a new empty resume.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header.
    pub fn with_header(mut self, header: Header) -> Self {
        self.header = Some(header);
        self
    }

    /// Add a section at the end of the document.
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Number of sections in the resume.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Check if no sections were recognized.
    ///
    /// A resume with only a header is still considered empty for rendering.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Find the first section whose title matches, ignoring ASCII case.
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|s| s.title.eq_ignore_ascii_case(title))
    }

    /// Collect summary statistics.
    pub fn stats(&self) -> ResumeStats {
        let mut stats = ResumeStats {
            has_header: self.header.is_some(),
            section_count: saturating_count(self.sections.len()),
            ..Default::default()
        };

        if let Some(ref header) = self.header {
            stats.count_text(&header.name);
            for line in &header.contact_lines {
                stats.count_text(line);
            }
        }

        for section in &self.sections {
            stats.count_text(&section.title);
            for p in &section.paragraphs {
                stats.paragraph_count = stats.paragraph_count.saturating_add(1);
                stats.count_text(p);
            }
            for b in &section.bullets {
                stats.bullet_count = stats.bullet_count.saturating_add(1);
                stats.count_text(b);
            }
        }

        stats
    }
}

/// Name and contact lines at the top of a resume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Candidate name (first line of the header block)
    pub name: String,

    /// Remaining header lines (email, phone, links)
    #[serde(default)]
    pub contact_lines: Vec<String>,
}

impl Header {
    /// Create a header with no contact lines.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact_lines: Vec::new(),
        }
    }

    /// Add a contact line.
    pub fn with_contact(mut self, line: impl Into<String>) -> Self {
        self.contact_lines.push(line.into());
        self
    }
}

/// A titled block of paragraphs and bullet items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section title (first line of the block)
    pub title: String,

    /// Non-bullet lines, in source order
    #[serde(default)]
    pub paragraphs: Vec<String>,

    /// Bullet lines with the marker stripped, in source order
    #[serde(default)]
    pub bullets: Vec<String>,
}

impl Section {
    /// Create an empty section with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            paragraphs: Vec::new(),
            bullets: Vec::new(),
        }
    }

    /// Add a paragraph line.
    pub fn add_paragraph(&mut self, text: impl Into<String>) {
        self.paragraphs.push(text.into());
    }

    /// Add a bullet item.
    pub fn add_bullet(&mut self, text: impl Into<String>) {
        self.bullets.push(text.into());
    }

    /// Total number of body lines (paragraphs plus bullets).
    pub fn line_count(&self) -> usize {
        self.paragraphs.len() + self.bullets.len()
    }

    /// Check if the section has no body lines.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty() && self.bullets.is_empty()
    }
}

/// Summary statistics of a parsed resume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeStats {
    /// Whether a header was detected
    pub has_header: bool,

    /// Number of sections
    pub section_count: u32,

    /// Number of paragraph lines across all sections
    pub paragraph_count: u32,

    /// Number of bullet items across all sections
    pub bullet_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,
}

impl ResumeStats {
    fn count_text(&mut self, text: &str) {
        let words = saturating_count(text.split_whitespace().count());
        self.word_count = self.word_count.saturating_add(words);
    }
}

/// Counters stop at `u32::MAX` instead of wrapping.
fn saturating_count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
