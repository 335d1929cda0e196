//! Input cleanup for resume text pasted from PDFs, word processors and web forms.
//!
//! Cleanup never touches blank lines, so block boundaries seen by the parser are
//! the same before and after.

use regex::Regex;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

/// Cleanup preset levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CleanupPreset {
    /// Minimal cleanup: Unicode NFC normalization only
    Minimal,
    /// Standard cleanup: NFC + ligatures + bullet glyphs + trailing whitespace
    #[default]
    Standard,
    /// Aggressive cleanup: standard plus PUA removal and inner whitespace collapsing
    Aggressive,
}

/// Options for input cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupOptions {
    /// Normalize Unicode to NFC form
    pub normalize_unicode: bool,

    /// Fix ligatures (fi, fl, etc.)
    pub fix_ligatures: bool,

    /// Standardize bullet glyphs (●, ▪, ◦ → •)
    pub standardize_bullets: bool,

    /// Remove Unicode replacement character (U+FFFD)
    pub remove_replacement_char: bool,

    /// Remove Private Use Area (PUA) characters, typically icon fonts
    pub remove_pua: bool,

    /// Strip trailing whitespace from every line
    pub trim_trailing_whitespace: bool,

    /// Collapse runs of spaces and tabs inside a line into one space
    pub collapse_inner_whitespace: bool,
}

impl CleanupOptions {
    /// Create options from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        match preset {
            CleanupPreset::Minimal => Self::minimal(),
            CleanupPreset::Standard => Self::standard(),
            CleanupPreset::Aggressive => Self::aggressive(),
        }
    }

    /// Minimal cleanup options.
    pub fn minimal() -> Self {
        Self {
            normalize_unicode: true,
            fix_ligatures: false,
            standardize_bullets: false,
            remove_replacement_char: false,
            remove_pua: false,
            trim_trailing_whitespace: false,
            collapse_inner_whitespace: false,
        }
    }

    /// Standard cleanup options.
    pub fn standard() -> Self {
        Self {
            normalize_unicode: true,
            fix_ligatures: true,
            standardize_bullets: true,
            remove_replacement_char: true,
            remove_pua: false,
            trim_trailing_whitespace: true,
            collapse_inner_whitespace: false,
        }
    }

    /// Aggressive cleanup options.
    pub fn aggressive() -> Self {
        Self {
            remove_pua: true,
            collapse_inner_whitespace: true,
            ..Self::standard()
        }
    }
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self::standard()
    }
}

const LIGATURES: [(&str, &str); 7] = [
    ("\u{FB00}", "ff"),
    ("\u{FB01}", "fi"),
    ("\u{FB02}", "fl"),
    ("\u{FB03}", "ffi"),
    ("\u{FB04}", "ffl"),
    ("\u{FB05}", "st"),
    ("\u{FB06}", "st"),
];

const BULLET_GLYPHS: [char; 13] = [
    '●', '○', '■', '□', '◆', '◇', '▪', '▫', '►', '▻', '◦', '‣', '∙',
];

fn trailing_whitespace_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)[ \t]+$").unwrap())
}

fn inner_whitespace_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[ \t]{2,}").unwrap())
}

/// Text cleanup pipeline.
#[derive(Debug, Clone)]
pub struct CleanupPipeline {
    options: CleanupOptions,
}

impl CleanupPipeline {
    /// Create a new cleanup pipeline with the given options.
    pub fn new(options: CleanupOptions) -> Self {
        Self { options }
    }

    /// Create a pipeline from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        Self::new(CleanupOptions::from_preset(preset))
    }

    /// Process text through the cleanup pipeline.
    pub fn process(&self, text: &str) -> String {
        let mut result = text.to_string();

        if self.options.normalize_unicode {
            result = result.nfc().collect();
        }

        if self.options.fix_ligatures {
            for (ligature, replacement) in LIGATURES {
                result = result.replace(ligature, replacement);
            }
        }

        if self.options.standardize_bullets {
            result = result.replace(&BULLET_GLYPHS[..], "•");
        }

        if self.options.remove_replacement_char {
            result = result.replace('\u{FFFD}', "");
        }

        if self.options.remove_pua {
            result = remove_pua_chars(&result);
        }

        if self.options.trim_trailing_whitespace {
            result = trailing_whitespace_regex()
                .replace_all(&result, "")
                .into_owned();
        }

        if self.options.collapse_inner_whitespace {
            result = inner_whitespace_regex()
                .replace_all(&result, " ")
                .into_owned();
        }

        result
    }
}

fn remove_pua_chars(text: &str) -> String {
    text.chars()
        .filter(|c| {
            let code = *c as u32;
            !(0xE000..=0xF8FF).contains(&code)
                && !(0xF0000..=0xFFFFD).contains(&code)
                && !(0x100000..=0x10FFFD).contains(&code)
        })
        .collect()
}
