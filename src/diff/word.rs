//! Word-level highlighting inside a modified line.

use regex::Regex;
use std::sync::OnceLock;

use crate::model::{TokenChange, WordDiff, WordToken};

fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+|\S+").unwrap())
}

/// Split a line into alternating word and whitespace runs.
///
/// Concatenating the tokens reproduces the line exactly.
pub fn tokenize(line: &str) -> Vec<&str> {
    token_regex().find_iter(line).map(|m| m.as_str()).collect()
}

/// Highlight the words that differ between two versions of a line.
///
/// Tokens are compared position by position. A mismatch marks the original
/// token removed and the optimized token added, then both sides move on; there
/// is no attempt to realign after an insertion within the line. Tokens left
/// over on the longer side keep their removed/added mark.
pub fn diff_words(original: &str, optimized: &str) -> WordDiff {
    let old_tokens = tokenize(original);
    let new_tokens = tokenize(optimized);

    let mut words = WordDiff {
        original: Vec::with_capacity(old_tokens.len()),
        optimized: Vec::with_capacity(new_tokens.len()),
    };

    let len = old_tokens.len().max(new_tokens.len());
    for k in 0..len {
        match (old_tokens.get(k), new_tokens.get(k)) {
            (Some(old), Some(new)) if old == new => {
                words.original.push(WordToken::new(*old, TokenChange::Unchanged));
                words.optimized.push(WordToken::new(*new, TokenChange::Unchanged));
            }
            (old, new) => {
                if let Some(old) = old {
                    words.original.push(WordToken::new(*old, TokenChange::Removed));
                }
                if let Some(new) = new {
                    words.optimized.push(WordToken::new(*new, TokenChange::Added));
                }
            }
        }
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    fn changes(tokens: &[WordToken]) -> Vec<(&str, TokenChange)> {
        tokens.iter().map(|t| (t.text.as_str(), t.change)).collect()
    }

    #[test]
    fn test_tokenize_keeps_whitespace() {
        assert_eq!(tokenize("Led  a\tteam"), vec!["Led", "  ", "a", "\t", "team"]);
        assert_eq!(tokenize(" lead"), vec![" ", "lead"]);
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_single_word_change() {
        let words = diff_words("Led a team", "Led the team");
        assert_eq!(
            changes(&words.original),
            vec![
                ("Led", TokenChange::Unchanged),
                (" ", TokenChange::Unchanged),
                ("a", TokenChange::Removed),
                (" ", TokenChange::Unchanged),
                ("team", TokenChange::Unchanged),
            ]
        );
        assert_eq!(words.optimized[2], WordToken::new("the", TokenChange::Added));
    }

    #[test]
    fn test_no_realignment_after_insertion() {
        // Inserting one word shifts every later position, so everything after
        // the insertion point is highlighted.
        let words = diff_words("Built APIs", "Built REST APIs");
        assert_eq!(
            changes(&words.optimized),
            vec![
                ("Built", TokenChange::Unchanged),
                (" ", TokenChange::Unchanged),
                ("REST", TokenChange::Added),
                (" ", TokenChange::Added),
                ("APIs", TokenChange::Added),
            ]
        );
        assert_eq!(words.original[2], WordToken::new("APIs", TokenChange::Removed));
    }

    #[test]
    fn test_trailing_tokens_on_longer_side() {
        let words = diff_words("Rust Go Python", "Rust");
        assert_eq!(words.optimized.len(), 1);
        assert_eq!(words.original.len(), 5);
        assert!(words.original[1..]
            .iter()
            .all(|t| t.change == TokenChange::Removed));
    }
}
