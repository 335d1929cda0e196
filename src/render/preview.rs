//! Template-independent preview structure.
//!
//! [`render`] places the parsed resume into the template's skeleton. The result
//! is plain data; HTML generation and export work from it.

use serde::{Deserialize, Serialize};

use crate::model::{Header, ParsedResume, Section};

use super::{BannerAlign, Layout, TemplateKey};

/// A resume placed into a template skeleton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedTemplate {
    /// Template used
    pub template: TemplateKey,

    /// Skeleton of the template
    pub layout: Layout,

    /// Content placed into the skeleton
    pub body: TemplateBody,
}

impl RenderedTemplate {
    /// Check if the body fell back to raw text.
    pub fn is_unstructured(&self) -> bool {
        matches!(self.body, TemplateBody::Unstructured { .. })
    }

    /// Header area, if the resume had a header.
    pub fn header(&self) -> Option<&HeaderArea> {
        match &self.body {
            TemplateBody::Structured { header, .. } => header.as_ref(),
            TemplateBody::Unstructured { .. } => None,
        }
    }

    /// Sections in document order (empty for an unstructured body).
    pub fn sections(&self) -> &[Section] {
        match &self.body {
            TemplateBody::Structured { sections, .. } => sections,
            TemplateBody::Unstructured { .. } => &[],
        }
    }
}

/// Content of a rendered template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TemplateBody {
    /// Nothing was recognized; the raw text is shown verbatim as one block.
    Unstructured {
        /// Raw fallback text
        text: String,
    },

    /// Header area plus titled section blocks.
    Structured {
        /// Name and contact area
        #[serde(default, skip_serializing_if = "Option::is_none")]
        header: Option<HeaderArea>,
        /// Section blocks in document order
        sections: Vec<Section>,
    },
}

/// Name and contact area of a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderArea {
    /// Where the header sits in the skeleton
    pub placement: HeaderPlacement,

    /// Candidate name
    pub name: String,

    /// Contact lines
    pub contact_lines: Vec<String>,
}

/// Where the header is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HeaderPlacement {
    /// Banner across the top of the page
    Banner {
        /// Banner alignment
        align: BannerAlign,
    },
    /// Inside the colored sidebar
    Sidebar,
}

impl HeaderPlacement {
    fn for_layout(layout: Layout) -> Self {
        match layout {
            Layout::SingleColumn { banner } => HeaderPlacement::Banner { align: banner },
            Layout::Sidebar => HeaderPlacement::Sidebar,
        }
    }
}

/// Place a parsed resume into a template.
///
/// When no sections were recognized the raw fallback text is rendered as a
/// single unstructured block, so malformed content still displays.
pub fn render(
    parsed: &ParsedResume,
    raw_fallback: &str,
    template: TemplateKey,
) -> RenderedTemplate {
    let layout = template.layout();

    let body = if parsed.sections.is_empty() {
        log::debug!(
            "No sections recognized, rendering raw text with {} template",
            template
        );
        TemplateBody::Unstructured {
            text: raw_fallback.to_string(),
        }
    } else {
        TemplateBody::Structured {
            header: parsed
                .header
                .as_ref()
                .map(|h| header_area(h, HeaderPlacement::for_layout(layout))),
            sections: parsed.sections.clone(),
        }
    };

    RenderedTemplate {
        template,
        layout,
        body,
    }
}

fn header_area(header: &Header, placement: HeaderPlacement) -> HeaderArea {
    HeaderArea {
        placement,
        name: header.name.clone(),
        contact_lines: header.contact_lines.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    const SAMPLE: &str = "Jane Doe\njane@x.com\n\nExperience\nDid X\n- Led Y";

    #[test]
    fn test_empty_resume_falls_back_to_raw_text() {
        for key in TemplateKey::ALL {
            let rendered = render(&parse(""), "raw text", key);
            assert!(rendered.is_unstructured());
            assert_eq!(
                rendered.body,
                TemplateBody::Unstructured {
                    text: "raw text".to_string()
                }
            );
        }
    }

    #[test]
    fn test_header_only_resume_falls_back() {
        let text = "Jane Doe\njane@x.com";
        let rendered = render(&parse(text), text, TemplateKey::Modern);
        assert!(rendered.is_unstructured());
        assert!(rendered.header().is_none());
    }

    #[test]
    fn test_header_placement_follows_layout() {
        let parsed = parse(SAMPLE);

        let modern = render(&parsed, SAMPLE, TemplateKey::Modern);
        assert_eq!(
            modern.header().map(|h| h.placement),
            Some(HeaderPlacement::Banner {
                align: BannerAlign::Left
            })
        );

        let accent = render(&parsed, SAMPLE, TemplateKey::Accent);
        assert_eq!(
            accent.header().map(|h| h.placement),
            Some(HeaderPlacement::Sidebar)
        );
    }

    #[test]
    fn test_all_templates_share_sections() {
        let parsed = parse(SAMPLE);
        let sections: Vec<_> = TemplateKey::ALL
            .iter()
            .map(|key| render(&parsed, SAMPLE, *key).sections().to_vec())
            .collect();
        assert!(sections.iter().all(|s| *s == parsed.sections));
    }

    #[test]
    fn test_render_is_pure() {
        let parsed = parse(SAMPLE);
        assert_eq!(
            render(&parsed, SAMPLE, TemplateKey::Classic),
            render(&parsed, SAMPLE, TemplateKey::Classic)
        );
    }

    #[test]
    fn test_missing_header_is_fine() {
        let parsed = parse("Summary\n\nSkills\n- Rust");
        let rendered = render(&parsed, "", TemplateKey::Accent);
        assert!(rendered.header().is_none());
        assert_eq!(rendered.sections().len(), 2);
    }
}
