//! Stylesheet generation from template style tokens.

use std::fmt::Write;

use super::{Layout, PageSize, TemplateKey, TemplateStyle};

/// Build the complete stylesheet for a template.
///
/// The output always ends with the print rules (`@page` size, zero margins),
/// so the exported document can be sent straight to "print to PDF".
pub fn stylesheet(template: TemplateKey, page_size: PageSize) -> String {
    let style = template.style();
    let mut css = String::with_capacity(2048);

    write_base(&mut css, style, page_size);
    match style.layout {
        Layout::SingleColumn { banner } => write_single_column(&mut css, style, banner.as_css()),
        Layout::Sidebar => write_sidebar(&mut css, style),
    }
    write_sections(&mut css, style);
    write_print(&mut css, page_size);

    css
}

fn write_base(css: &mut String, style: &TemplateStyle, page_size: PageSize) {
    let _ = write!(
        css,
        "* {{ box-sizing: border-box; }}\n\
         html, body {{ margin: 0; padding: 0; background: #f3f4f6; }}\n\
         body {{ font-family: {font}; font-size: {size}pt; line-height: 1.45; color: {text}; }}\n\
         .resume {{ width: {width}; min-height: {height}; margin: 24px auto; background: #ffffff; }}\n\
         .name {{ font-family: {heading}; margin: 0; font-size: 2.1em; font-weight: 700; }}\n\
         .contact {{ margin: 6px 0 0; padding: 0; list-style: none; }}\n\
         .raw {{ margin: 0; padding: 48px; white-space: pre-wrap; font-family: inherit; }}\n",
        font = style.font_family,
        size = style.font_size_pt,
        text = style.text_color,
        width = page_size.width_css(),
        height = page_size.height_css(),
        heading = style.heading_font_family,
    );
}

fn write_single_column(css: &mut String, style: &TemplateStyle, align: &str) {
    let _ = write!(
        css,
        ".layout-single {{ padding: 40px 48px; }}\n\
         .banner {{ text-align: {align}; padding-bottom: 12px; margin-bottom: 16px; \
         border-bottom: 2px solid {accent}; }}\n\
         .banner .name {{ color: {accent}; }}\n\
         .banner .contact li {{ display: inline; color: {muted}; }}\n\
         .banner .contact li + li::before {{ content: \" | \"; }}\n",
        align = align,
        accent = style.accent_color,
        muted = style.muted_color,
    );
}

fn write_sidebar(css: &mut String, style: &TemplateStyle) {
    let _ = write!(
        css,
        ".layout-sidebar {{ display: flex; align-items: stretch; }}\n\
         .sidebar {{ flex: 0 0 32%; padding: 40px 24px; background: {bg}; color: {fg}; }}\n\
         .sidebar .name {{ color: {fg}; font-size: 1.8em; }}\n\
         .sidebar .contact {{ margin-top: 16px; }}\n\
         .sidebar .contact li {{ color: {muted}; margin-bottom: 6px; word-break: break-word; }}\n\
         .layout-sidebar .content {{ flex: 1; padding: 40px 32px; }}\n",
        bg = style.sidebar_background,
        fg = style.sidebar_text,
        muted = style.muted_color,
    );
}

fn write_sections(css: &mut String, style: &TemplateStyle) {
    let transform = if style.uppercase_titles {
        "uppercase"
    } else {
        "none"
    };
    let rule = if style.title_rule {
        format!("border-bottom: 1px solid {};", style.accent_color)
    } else {
        String::new()
    };

    let _ = write!(
        css,
        ".section {{ margin-bottom: 14px; }}\n\
         .section-title {{ font-family: {heading}; font-size: 1.1em; margin: 0 0 6px; \
         color: {accent}; text-transform: {transform}; letter-spacing: 0.04em; {rule} }}\n\
         .paragraph {{ margin: 0 0 4px; }}\n\
         .bullets {{ margin: 4px 0 0; padding-left: 18px; }}\n\
         .bullets li {{ margin-bottom: 2px; }}\n\
         .bullets li::marker {{ color: {accent}; }}\n",
        heading = style.heading_font_family,
        accent = style.accent_color,
        transform = transform,
        rule = rule,
    );
}

fn write_print(css: &mut String, page_size: PageSize) {
    let _ = write!(
        css,
        "@page {{ size: {size}; margin: 0; }}\n\
         @media print {{\n\
         \x20 html, body {{ margin: 0; padding: 0; background: #ffffff; }}\n\
         \x20 .resume {{ margin: 0; width: auto; min-height: auto; box-shadow: none; }}\n\
         \x20 .section {{ break-inside: avoid; }}\n\
         \x20 body {{ -webkit-print-color-adjust: exact; print-color-adjust: exact; }}\n\
         }}\n",
        size = page_size.as_css(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_template_has_its_own_sheet() {
        let sheets: Vec<String> = TemplateKey::ALL
            .iter()
            .map(|key| stylesheet(*key, PageSize::A4))
            .collect();
        assert_ne!(sheets[0], sheets[1]);
        assert_ne!(sheets[1], sheets[2]);
        assert_ne!(sheets[0], sheets[2]);
    }

    #[test]
    fn test_print_rules() {
        let css = stylesheet(TemplateKey::Modern, PageSize::Letter);
        assert!(css.contains("@page { size: letter; margin: 0; }"));
        assert!(css.contains("@media print"));
        assert!(css.contains("width: 8.5in"));
    }

    #[test]
    fn test_layout_rules() {
        let sidebar = stylesheet(TemplateKey::Accent, PageSize::A4);
        assert!(sidebar.contains(".sidebar {"));
        assert!(sidebar.contains("background: #0f766e"));
        assert!(!sidebar.contains(".banner {"));

        let classic = stylesheet(TemplateKey::Classic, PageSize::A4);
        assert!(classic.contains("text-align: center"));
        assert!(classic.contains("text-transform: none"));
        assert!(!classic.contains(".sidebar {"));
    }
}
