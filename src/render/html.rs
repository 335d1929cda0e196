//! HTML rendering for placed resumes.

use super::visitor::{ResumeVisitor, VisitorAction};
use super::{
    stylesheet, HeaderArea, Layout, RenderOptions, RenderedTemplate, TemplateBody,
    DEFAULT_DOCUMENT_TITLE,
};
use crate::model::Section;

/// Convert a rendered template to an HTML fragment (the resume `<div>` only).
pub fn to_html_fragment(rendered: &RenderedTemplate) -> String {
    HtmlRenderer::new(RenderOptions::default()).render_fragment(rendered)
}

/// Convert a rendered template to a standalone HTML document.
pub fn to_html_document(rendered: &RenderedTemplate, options: &RenderOptions) -> String {
    HtmlRenderer::new(options.clone()).render_document(rendered)
}

/// Escape text for inclusion in HTML content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// HTML renderer.
pub struct HtmlRenderer {
    options: RenderOptions,
    visitor: Option<Box<dyn ResumeVisitor>>,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            visitor: None,
        }
    }

    /// Attach a visitor that can skip or replace elements.
    pub fn with_visitor<V: ResumeVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitor = Some(Box::new(visitor));
        self
    }

    /// Render options in use.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render the resume markup without the surrounding document.
    pub fn render_fragment(&mut self, rendered: &RenderedTemplate) -> String {
        let mut output = String::with_capacity(4096);
        let key = rendered.template.as_str();

        match &rendered.body {
            TemplateBody::Unstructured { text } => {
                output.push_str(&format!("<div class=\"resume resume--{}\">\n", key));
                output.push_str("<pre class=\"raw\">");
                output.push_str(&escape_html(text));
                output.push_str("</pre>\n");
            }
            TemplateBody::Structured { header, sections } => {
                output.push_str(&format!(
                    "<div class=\"resume resume--{} layout-{}\">\n",
                    key,
                    rendered.layout.class_name()
                ));
                match rendered.layout {
                    Layout::SingleColumn { .. } => {
                        if let Some(header) = header {
                            let markup = self.header_markup(header);
                            if !markup.is_empty() {
                                output.push_str("<header class=\"banner\">\n");
                                output.push_str(&markup);
                                output.push_str("</header>\n");
                            }
                        }
                    }
                    Layout::Sidebar => {
                        // The sidebar column is kept even without a header.
                        output.push_str("<aside class=\"sidebar\">\n");
                        if let Some(header) = header {
                            output.push_str(&self.header_markup(header));
                        }
                        output.push_str("</aside>\n");
                    }
                }

                output.push_str("<main class=\"content\">\n");
                for section in sections {
                    self.render_section(&mut output, section);
                }
                output.push_str("</main>\n");
            }
        }

        output.push_str("</div>\n");
        output
    }

    /// Render a standalone HTML5 document with the template's stylesheet.
    pub fn render_document(&mut self, rendered: &RenderedTemplate) -> String {
        let fragment = self.render_fragment(rendered);
        let title = self.document_title(rendered);
        let css = stylesheet(rendered.template, self.options.page_size);

        let mut output = String::with_capacity(fragment.len() + css.len() + 256);
        output.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        output.push_str("<meta charset=\"utf-8\">\n");
        output.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        output.push_str(&format!("<title>{}</title>\n", escape_html(&title)));
        output.push_str("<style>\n");
        output.push_str(&css);
        output.push_str("</style>\n");
        if self.options.print_on_load {
            output.push_str(
                "<script>window.addEventListener(\"load\", function () { window.print(); });</script>\n",
            );
        }
        output.push_str("</head>\n<body>\n");
        output.push_str(&fragment);
        output.push_str("</body>\n</html>\n");
        output
    }

    fn document_title(&self, rendered: &RenderedTemplate) -> String {
        if let Some(ref title) = self.options.document_title {
            return title.clone();
        }
        rendered
            .header()
            .map(|h| h.name.trim())
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_DOCUMENT_TITLE)
            .to_string()
    }

    fn visit<F>(&mut self, visit: F) -> VisitorAction
    where
        F: FnOnce(&mut dyn ResumeVisitor) -> VisitorAction,
    {
        match self.visitor.as_mut() {
            Some(visitor) => visit(visitor.as_mut()),
            None => VisitorAction::Continue,
        }
    }

    fn header_markup(&mut self, header: &HeaderArea) -> String {
        match self.visit(|v| v.visit_header(header)) {
            VisitorAction::Skip => String::new(),
            VisitorAction::Replace(markup) => markup,
            VisitorAction::Continue => {
                let mut markup = format!("<h1 class=\"name\">{}</h1>\n", escape_html(&header.name));
                if !header.contact_lines.is_empty() {
                    markup.push_str("<ul class=\"contact\">\n");
                    for line in &header.contact_lines {
                        markup.push_str(&format!("<li>{}</li>\n", escape_html(line)));
                    }
                    markup.push_str("</ul>\n");
                }
                markup
            }
        }
    }

    fn render_section(&mut self, output: &mut String, section: &Section) {
        match self.visit(|v| v.visit_section(section)) {
            VisitorAction::Skip => return,
            VisitorAction::Replace(markup) => {
                output.push_str(&markup);
                return;
            }
            VisitorAction::Continue => {}
        }

        output.push_str("<section class=\"section\">\n");
        output.push_str(&format!(
            "<h2 class=\"section-title\">{}</h2>\n",
            escape_html(&section.title)
        ));

        for paragraph in &section.paragraphs {
            match self.visit(|v| v.visit_paragraph(section, paragraph)) {
                VisitorAction::Skip => {}
                VisitorAction::Replace(markup) => output.push_str(&markup),
                VisitorAction::Continue => output.push_str(&format!(
                    "<p class=\"paragraph\">{}</p>\n",
                    escape_html(paragraph)
                )),
            }
        }

        let mut items = Vec::with_capacity(section.bullets.len());
        for bullet in &section.bullets {
            match self.visit(|v| v.visit_bullet(section, bullet)) {
                VisitorAction::Skip => {}
                VisitorAction::Replace(markup) => items.push(markup),
                VisitorAction::Continue => {
                    items.push(format!("<li>{}</li>\n", escape_html(bullet)))
                }
            }
        }
        if !items.is_empty() {
            output.push_str("<ul class=\"bullets\">\n");
            for item in items {
                output.push_str(&item);
            }
            output.push_str("</ul>\n");
        }

        output.push_str("</section>\n");
    }
}
