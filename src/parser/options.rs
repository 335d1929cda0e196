//! Parsing options and configuration.

use super::{CleanupOptions, CleanupPreset};

/// Title used for a section block that has no lines of its own.
pub const DEFAULT_SECTION_TITLE: &str = "Section";

/// Options for parsing resume text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Input cleanup applied before block splitting (none by default)
    pub cleanup: Option<CleanupOptions>,

    /// Title given to a section whose block has no lines
    pub default_section_title: String,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set cleanup options.
    pub fn with_cleanup(mut self, cleanup: CleanupOptions) -> Self {
        self.cleanup = Some(cleanup);
        self
    }

    /// Set cleanup preset.
    pub fn with_cleanup_preset(mut self, preset: CleanupPreset) -> Self {
        self.cleanup = Some(CleanupOptions::from_preset(preset));
        self
    }

    /// Set the fallback section title.
    pub fn with_default_section_title(mut self, title: impl Into<String>) -> Self {
        self.default_section_title = title.into();
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            cleanup: None,
            default_section_title: DEFAULT_SECTION_TITLE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options_builder() {
        let options = ParseOptions::new()
            .with_cleanup_preset(CleanupPreset::Minimal)
            .with_default_section_title("Untitled");

        assert_eq!(options.cleanup, Some(CleanupOptions::minimal()));
        assert_eq!(options.default_section_title, "Untitled");
    }

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert!(options.cleanup.is_none());
        assert_eq!(options.default_section_title, "Section");
    }
}
