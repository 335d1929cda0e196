//! Visitor pattern for customizing HTML rendering.
//!
//! The visitor pattern allows callers to skip or replace parts of a resume
//! without modifying the renderer.
//!
//! # Example
//!
//! ```
//! use resumekit::render::visitor::{ResumeVisitor, VisitorAction};
//! use resumekit::model::Section;
//!
//! struct HideReferences;
//!
//! impl ResumeVisitor for HideReferences {
//!     fn visit_section(&mut self, section: &Section) -> VisitorAction {
//!         if section.title.eq_ignore_ascii_case("references") {
//!             VisitorAction::Skip
//!         } else {
//!             VisitorAction::Continue
//!         }
//!     }
//! }
//! ```

use crate::model::Section;

use super::HeaderArea;

/// Action returned by visitor methods to control rendering behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VisitorAction {
    /// Continue with default rendering.
    #[default]
    Continue,

    /// Replace the element with custom markup (inserted as-is, not escaped).
    Replace(String),

    /// Skip this element entirely (produce no output).
    Skip,
}

impl VisitorAction {
    /// Check if this action indicates the element should be skipped.
    pub fn should_skip(&self) -> bool {
        matches!(self, VisitorAction::Skip)
    }

    /// Check if this action provides replacement content.
    pub fn is_replace(&self) -> bool {
        matches!(self, VisitorAction::Replace(_))
    }

    /// Get replacement content if available.
    pub fn replacement(&self) -> Option<&str> {
        match self {
            VisitorAction::Replace(s) => Some(s),
            _ => None,
        }
    }
}

/// Trait for visiting resume elements during HTML rendering.
///
/// All methods return `VisitorAction::Continue` by default.
pub trait ResumeVisitor: Send + Sync {
    /// Called before rendering the name and contact area.
    fn visit_header(&mut self, header: &HeaderArea) -> VisitorAction {
        let _ = header;
        VisitorAction::Continue
    }

    /// Called before rendering a section block.
    ///
    /// Skipping or replacing a section also bypasses its paragraphs and bullets.
    fn visit_section(&mut self, section: &Section) -> VisitorAction {
        let _ = section;
        VisitorAction::Continue
    }

    /// Called before rendering a paragraph line of a section.
    fn visit_paragraph(&mut self, section: &Section, text: &str) -> VisitorAction {
        let _ = (section, text);
        VisitorAction::Continue
    }

    /// Called before rendering a bullet item of a section.
    fn visit_bullet(&mut self, section: &Section, text: &str) -> VisitorAction {
        let _ = (section, text);
        VisitorAction::Continue
    }
}

/// Default visitor that performs no customization.
#[derive(Debug, Clone, Default)]
pub struct DefaultVisitor;

impl DefaultVisitor {
    /// Create a new default visitor.
    pub fn new() -> Self {
        Self
    }
}

impl ResumeVisitor for DefaultVisitor {}

/// Visitor that drops sections by title, ignoring ASCII case.
#[derive(Debug, Clone, Default)]
pub struct SkipSectionsVisitor {
    titles: Vec<String>,
}

impl SkipSectionsVisitor {
    /// Create a visitor that skips the given section titles.
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
        }
    }
}

impl ResumeVisitor for SkipSectionsVisitor {
    fn visit_section(&mut self, section: &Section) -> VisitorAction {
        let title = section.title.trim();
        if self.titles.iter().any(|t| t.eq_ignore_ascii_case(title)) {
            VisitorAction::Skip
        } else {
            VisitorAction::Continue
        }
    }
}

/// Visitor that hides the contact lines (for anonymized review copies).
#[derive(Debug, Clone, Default)]
pub struct RedactContactVisitor;

impl ResumeVisitor for RedactContactVisitor {
    fn visit_header(&mut self, header: &HeaderArea) -> VisitorAction {
        if header.contact_lines.is_empty() {
            return VisitorAction::Continue;
        }
        let name = super::html::escape_html(&header.name);
        VisitorAction::Replace(format!(
            "<h1 class=\"name\">{}</h1>\n<ul class=\"contact\"><li>[contact details removed]</li></ul>\n",
            name
        ))
    }
}

/// Composite visitor that chains multiple visitors.
///
/// Visitors are called in order. The first visitor that returns
/// a non-Continue action determines the result.
pub struct CompositeVisitor {
    visitors: Vec<Box<dyn ResumeVisitor>>,
}

impl CompositeVisitor {
    /// Create a new composite visitor.
    pub fn new() -> Self {
        Self {
            visitors: Vec::new(),
        }
    }

    /// Add a visitor to the chain.
    pub fn with_visitor<V: ResumeVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitors.push(Box::new(visitor));
        self
    }

    fn first_action<F>(&mut self, mut visit: F) -> VisitorAction
    where
        F: FnMut(&mut dyn ResumeVisitor) -> VisitorAction,
    {
        for visitor in &mut self.visitors {
            let action = visit(visitor.as_mut());
            if action != VisitorAction::Continue {
                return action;
            }
        }
        VisitorAction::Continue
    }
}

impl Default for CompositeVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeVisitor for CompositeVisitor {
    fn visit_header(&mut self, header: &HeaderArea) -> VisitorAction {
        self.first_action(|v| v.visit_header(header))
    }

    fn visit_section(&mut self, section: &Section) -> VisitorAction {
        self.first_action(|v| v.visit_section(section))
    }

    fn visit_paragraph(&mut self, section: &Section, text: &str) -> VisitorAction {
        self.first_action(|v| v.visit_paragraph(section, text))
    }

    fn visit_bullet(&mut self, section: &Section, text: &str) -> VisitorAction {
        self.first_action(|v| v.visit_bullet(section, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::HeaderPlacement;

    fn header() -> HeaderArea {
        HeaderArea {
            placement: HeaderPlacement::Sidebar,
            name: "Jane <Doe>".to_string(),
            contact_lines: vec!["jane@x.com".to_string()],
        }
    }

    #[test]
    fn test_visitor_action_default() {
        assert_eq!(VisitorAction::default(), VisitorAction::Continue);
    }

    #[test]
    fn test_visitor_action_replacement() {
        assert!(VisitorAction::Continue.replacement().is_none());
        assert!(VisitorAction::Skip.should_skip());
        assert_eq!(
            VisitorAction::Replace("hello".into()).replacement(),
            Some("hello")
        );
    }

    #[test]
    fn test_skip_sections_visitor() {
        let mut visitor = SkipSectionsVisitor::new(["References"]);
        assert!(visitor.visit_section(&Section::new("references")).should_skip());
        assert!(!visitor.visit_section(&Section::new("Skills")).should_skip());
    }

    #[test]
    fn test_redact_contact_escapes_name() {
        let mut visitor = RedactContactVisitor;
        let action = visitor.visit_header(&header());
        let markup = action.replacement().unwrap();
        assert!(markup.contains("Jane &lt;Doe&gt;"));
        assert!(!markup.contains("jane@x.com"));
    }

    #[test]
    fn test_composite_visitor() {
        let mut composite = CompositeVisitor::new()
            .with_visitor(DefaultVisitor)
            .with_visitor(SkipSectionsVisitor::new(["Hobbies"]))
            .with_visitor(RedactContactVisitor);

        assert!(composite.visit_section(&Section::new("Hobbies")).should_skip());
        assert!(composite.visit_header(&header()).is_replace());

        let section = Section::new("Skills");
        assert_eq!(
            composite.visit_bullet(&section, "Rust"),
            VisitorAction::Continue
        );
    }
}
