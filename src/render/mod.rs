//! Rendering module: template placement, HTML output and JSON output.

mod html;
mod json;
mod options;
mod preview;
mod styles;
mod template;
pub mod visitor;

pub use html::{escape_html, to_html_document, to_html_fragment, HtmlRenderer};
pub use json::{to_json, JsonFormat};
pub use options::{PageSize, RenderOptions, DEFAULT_DOCUMENT_TITLE};
pub use preview::{render, HeaderArea, HeaderPlacement, RenderedTemplate, TemplateBody};
pub use styles::stylesheet;
pub use template::{BannerAlign, Layout, TemplateKey, TemplateStyle};
pub use visitor::{
    CompositeVisitor, DefaultVisitor, RedactContactVisitor, ResumeVisitor, SkipSectionsVisitor,
    VisitorAction,
};
