//! Integration tests for template rendering and the visitor pattern.

use std::sync::{Arc, Mutex};

use resumekit::model::Section;
use resumekit::parse;
use resumekit::render::visitor::{
    CompositeVisitor, RedactContactVisitor, ResumeVisitor, SkipSectionsVisitor, VisitorAction,
};
use resumekit::render::{
    render, to_html_document, to_html_fragment, HeaderArea, HtmlRenderer, Layout, PageSize,
    RenderOptions, TemplateBody, TemplateKey,
};

const RESUME: &str = "Jane Doe\njane@x.com\n\n\
Experience\nDid X\n- Led Y\n- Shipped Z\n\n\
References\nAvailable on request";

/// Custom visitor that tracks visit counts.
struct CountingVisitor {
    headers: usize,
    sections: usize,
    paragraphs: usize,
    bullets: usize,
}

impl CountingVisitor {
    fn new() -> Self {
        Self {
            headers: 0,
            sections: 0,
            paragraphs: 0,
            bullets: 0,
        }
    }
}

impl ResumeVisitor for CountingVisitor {
    fn visit_header(&mut self, _header: &HeaderArea) -> VisitorAction {
        self.headers += 1;
        VisitorAction::Continue
    }

    fn visit_section(&mut self, _section: &Section) -> VisitorAction {
        self.sections += 1;
        VisitorAction::Continue
    }

    fn visit_paragraph(&mut self, _section: &Section, _text: &str) -> VisitorAction {
        self.paragraphs += 1;
        VisitorAction::Continue
    }

    fn visit_bullet(&mut self, _section: &Section, _text: &str) -> VisitorAction {
        self.bullets += 1;
        VisitorAction::Continue
    }
}

#[test]
fn test_raw_fallback_for_every_template() {
    for key in TemplateKey::ALL {
        let rendered = render(&parse(""), "raw text", key);
        assert_eq!(
            rendered.body,
            TemplateBody::Unstructured {
                text: "raw text".to_string()
            }
        );
        assert!(to_html_fragment(&rendered).contains("<pre class=\"raw\">raw text</pre>"));
    }
}

#[test]
fn test_template_layouts() {
    let parsed = parse(RESUME);

    let modern = to_html_fragment(&render(&parsed, RESUME, TemplateKey::Modern));
    let classic = to_html_fragment(&render(&parsed, RESUME, TemplateKey::Classic));
    let accent = to_html_fragment(&render(&parsed, RESUME, TemplateKey::Accent));

    assert!(modern.contains("<header class=\"banner\">"));
    assert!(classic.contains("<header class=\"banner\">"));
    assert!(accent.contains("<aside class=\"sidebar\">"));
    assert!(!accent.contains("<header"));

    for html in [&modern, &classic, &accent] {
        let experience = html.find("Experience").unwrap();
        let references = html.find("References").unwrap();
        assert!(experience < references, "sections keep document order");

        let paragraph = html.find("Did X").unwrap();
        let bullet = html.find("Led Y").unwrap();
        assert!(paragraph < bullet, "paragraphs come before bullets");
    }

    assert!(matches!(TemplateKey::Accent.layout(), Layout::Sidebar));
}

#[test]
fn test_documents_have_distinct_styles() {
    let parsed = parse(RESUME);
    let options = RenderOptions::default();

    let docs: Vec<String> = TemplateKey::ALL
        .iter()
        .map(|key| to_html_document(&render(&parsed, RESUME, *key), &options))
        .collect();

    for doc in &docs {
        assert!(doc.contains("<style>"));
        assert!(doc.contains("@page { size: A4; margin: 0; }"));
        assert!(doc.contains("@media print"));
    }
    assert_ne!(docs[0], docs[1]);
    assert_ne!(docs[1], docs[2]);
    assert_ne!(docs[0], docs[2]);
}

#[test]
fn test_letter_page_size() {
    let rendered = render(&parse(RESUME), RESUME, TemplateKey::Classic);
    let options = RenderOptions::new().with_page_size(PageSize::Letter);
    let doc = to_html_document(&rendered, &options);
    assert!(doc.contains("@page { size: letter; margin: 0; }"));
}

#[test]
fn test_text_is_escaped() {
    let text = "Jane <script>\njane@x.com\n\nSkills\n- C & C++";
    let html = to_html_fragment(&render(&parse(text), text, TemplateKey::Modern));
    assert!(html.contains("Jane &lt;script&gt;"));
    assert!(html.contains("C &amp; C++"));
    assert!(!html.contains("<script>"));
}

#[test]
fn test_counting_visitor_sees_every_element() {
    let rendered = render(&parse(RESUME), RESUME, TemplateKey::Modern);

    // The renderer owns its visitor, so count through a shared cell.
    struct Shared(Arc<Mutex<CountingVisitor>>);

    impl ResumeVisitor for Shared {
        fn visit_header(&mut self, header: &HeaderArea) -> VisitorAction {
            self.0.lock().unwrap().visit_header(header)
        }
        fn visit_section(&mut self, section: &Section) -> VisitorAction {
            self.0.lock().unwrap().visit_section(section)
        }
        fn visit_paragraph(&mut self, section: &Section, text: &str) -> VisitorAction {
            self.0.lock().unwrap().visit_paragraph(section, text)
        }
        fn visit_bullet(&mut self, section: &Section, text: &str) -> VisitorAction {
            self.0.lock().unwrap().visit_bullet(section, text)
        }
    }

    let counts = Arc::new(Mutex::new(CountingVisitor::new()));
    let mut renderer =
        HtmlRenderer::new(RenderOptions::default()).with_visitor(Shared(counts.clone()));
    renderer.render_fragment(&rendered);

    let counts = counts.lock().unwrap();
    assert_eq!(counts.headers, 1);
    assert_eq!(counts.sections, 2);
    assert_eq!(counts.paragraphs, 2);
    assert_eq!(counts.bullets, 2);
}

#[test]
fn test_composite_visitor_in_renderer() {
    let rendered = render(&parse(RESUME), RESUME, TemplateKey::Accent);
    let visitor = CompositeVisitor::new()
        .with_visitor(SkipSectionsVisitor::new(["references"]))
        .with_visitor(RedactContactVisitor);

    let mut renderer = HtmlRenderer::new(RenderOptions::default()).with_visitor(visitor);
    let html = renderer.render_fragment(&rendered);

    assert!(html.contains("Experience"));
    assert!(!html.contains("References"));
    assert!(!html.contains("jane@x.com"));
    assert!(html.contains("[contact details removed]"));
    assert!(html.contains("<aside class=\"sidebar\">"));
}

#[test]
fn test_rendered_template_serializes() {
    let rendered = render(&parse(RESUME), RESUME, TemplateKey::Accent);
    let json = serde_json::to_value(&rendered).unwrap();
    assert_eq!(json["template"], "accent");
    assert_eq!(json["layout"]["type"], "sidebar");
    assert_eq!(json["body"]["type"], "structured");
    assert_eq!(json["body"]["header"]["placement"]["type"], "sidebar");
}
