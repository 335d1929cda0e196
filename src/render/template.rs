//! Template keys and the style tokens behind each template.
//!
//! All templates share one skeleton. A template is a [`Layout`] plus a set of
//! style tokens; adding a template means adding an enum case and a token set.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Named visual template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKey {
    /// Single column, left-aligned banner, sans-serif with a blue accent
    #[default]
    Modern,
    /// Single column, centered banner, serif, monochrome
    Classic,
    /// Two columns with a colored sidebar holding the name and contacts
    Accent,
}

impl TemplateKey {
    /// Every template, in display order.
    pub const ALL: [TemplateKey; 3] = [
        TemplateKey::Modern,
        TemplateKey::Classic,
        TemplateKey::Accent,
    ];

    /// Lowercase template name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKey::Modern => "modern",
            TemplateKey::Classic => "classic",
            TemplateKey::Accent => "accent",
        }
    }

    /// Style tokens for this template.
    pub fn style(&self) -> &'static TemplateStyle {
        match self {
            TemplateKey::Modern => &MODERN,
            TemplateKey::Classic => &CLASSIC,
            TemplateKey::Accent => &ACCENT,
        }
    }

    /// Layout skeleton for this template.
    pub fn layout(&self) -> Layout {
        self.style().layout
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        TemplateKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownTemplate(name.to_string()))
    }
}

/// Structural skeleton of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Layout {
    /// One column with the header as a banner on top
    SingleColumn {
        /// Banner text alignment
        banner: BannerAlign,
    },
    /// Colored sidebar with the header, sections in the main column
    Sidebar,
}

impl Layout {
    /// CSS class suffix for the layout.
    pub fn class_name(&self) -> &'static str {
        match self {
            Layout::SingleColumn { .. } => "single",
            Layout::Sidebar => "sidebar",
        }
    }
}

/// Horizontal alignment of a banner header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerAlign {
    /// Left-aligned
    Left,
    /// Centered
    Center,
}

impl BannerAlign {
    /// CSS `text-align` value.
    pub fn as_css(&self) -> &'static str {
        match self {
            BannerAlign::Left => "left",
            BannerAlign::Center => "center",
        }
    }
}

/// Style tokens consumed by the shared stylesheet generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateStyle {
    /// Structural skeleton
    pub layout: Layout,

    /// Body font stack
    pub font_family: &'static str,

    /// Name and section title font stack
    pub heading_font_family: &'static str,

    /// Body text color
    pub text_color: &'static str,

    /// Name, section title and bullet marker color
    pub accent_color: &'static str,

    /// Contact line color
    pub muted_color: &'static str,

    /// Sidebar background (sidebar layout only)
    pub sidebar_background: &'static str,

    /// Sidebar text color (sidebar layout only)
    pub sidebar_text: &'static str,

    /// Render section titles in uppercase
    pub uppercase_titles: bool,

    /// Draw a rule under section titles
    pub title_rule: bool,

    /// Base font size in points
    pub font_size_pt: f32,
}

static MODERN: TemplateStyle = TemplateStyle {
    layout: Layout::SingleColumn {
        banner: BannerAlign::Left,
    },
    font_family: "'Helvetica Neue', Arial, sans-serif",
    heading_font_family: "'Helvetica Neue', Arial, sans-serif",
    text_color: "#1f2933",
    accent_color: "#2563eb",
    muted_color: "#52606d",
    sidebar_background: "#ffffff",
    sidebar_text: "#1f2933",
    uppercase_titles: true,
    title_rule: true,
    font_size_pt: 10.5,
};

static CLASSIC: TemplateStyle = TemplateStyle {
    layout: Layout::SingleColumn {
        banner: BannerAlign::Center,
    },
    font_family: "Georgia, 'Times New Roman', serif",
    heading_font_family: "Georgia, 'Times New Roman', serif",
    text_color: "#111111",
    accent_color: "#111111",
    muted_color: "#444444",
    sidebar_background: "#ffffff",
    sidebar_text: "#111111",
    uppercase_titles: false,
    title_rule: true,
    font_size_pt: 11.0,
};

static ACCENT: TemplateStyle = TemplateStyle {
    layout: Layout::Sidebar,
    font_family: "'Segoe UI', Roboto, Arial, sans-serif",
    heading_font_family: "'Segoe UI', Roboto, Arial, sans-serif",
    text_color: "#1e293b",
    accent_color: "#0f766e",
    muted_color: "#ccfbf1",
    sidebar_background: "#0f766e",
    sidebar_text: "#f0fdfa",
    uppercase_titles: true,
    title_rule: false,
    font_size_pt: 10.5,
};
