//! Line-oriented diff with bounded lookahead.

use crate::model::{DiffLine, DiffSummary, WordDiff};

use super::{diff_words, DiffOptions};

/// Compares an original and an optimized resume line by line.
///
/// This is a two-pointer walk, not a minimal edit script: at each mismatch it
/// looks ahead on both sides to decide whether a line was inserted, deleted,
/// or rewritten in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiffEngine {
    options: DiffOptions,
}

/// What to do with the current pair of mismatched lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Modify,
    Add,
    Remove,
}

impl DiffEngine {
    /// Create a diff engine with custom options.
    pub fn new(options: DiffOptions) -> Self {
        Self { options }
    }

    /// Get the engine options.
    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    /// Compare two texts and return one record per consumed line (or line pair).
    pub fn diff(&self, original: &str, optimized: &str) -> Vec<DiffLine> {
        let old_lines = split_lines(original);
        let new_lines = split_lines(optimized);

        let mut records = Vec::with_capacity(old_lines.len().max(new_lines.len()));
        let (mut i, mut j) = (0usize, 0usize);

        loop {
            let old = old_lines.get(i).copied();
            let new = new_lines.get(j).copied();

            match (old, new) {
                (None, None) => break,
                (Some(old), None) => {
                    records.push(removed(old, i));
                    i += 1;
                }
                (None, Some(new)) => {
                    records.push(added(new, j));
                    j += 1;
                }
                (Some(old), Some(new)) if old == new => {
                    records.push(DiffLine::Unchanged {
                        original_line: old.to_string(),
                        optimized_line: new.to_string(),
                        original_line_number: line_number(i),
                        optimized_line_number: line_number(j),
                    });
                    i += 1;
                    j += 1;
                }
                (Some(old), Some(new)) => match self.choose_step(&old_lines, i, &new_lines, j) {
                    Step::Modify => {
                        let words = if self.options.highlight_words {
                            diff_words(old, new)
                        } else {
                            WordDiff::default()
                        };
                        records.push(DiffLine::Modified {
                            original_line: old.to_string(),
                            optimized_line: new.to_string(),
                            original_line_number: line_number(i),
                            optimized_line_number: line_number(j),
                            words,
                        });
                        i += 1;
                        j += 1;
                    }
                    Step::Add => {
                        records.push(added(new, j));
                        j += 1;
                    }
                    Step::Remove => {
                        records.push(removed(old, i));
                        i += 1;
                    }
                },
            }
        }

        log::debug!("Diff produced {:?}", DiffSummary::from_lines(&records));

        records
    }

    /// Decide between a paired modification, an insertion and a deletion.
    ///
    /// `ahead_in_new` is how far ahead the current original line reappears in
    /// the optimized text; `ahead_in_old` is how far ahead the current optimized
    /// line reappears in the original text. The sooner reappearance wins, and a
    /// tie treats the optimized line as an insertion.
    fn choose_step(&self, old_lines: &[&str], i: usize, new_lines: &[&str], j: usize) -> Step {
        let ahead_in_new = find_ahead(new_lines, j, old_lines[i], self.options.max_lookahead);
        let ahead_in_old = find_ahead(old_lines, i, new_lines[j], self.options.max_lookahead);

        match (ahead_in_new, ahead_in_old) {
            (None, None) => Step::Modify,
            (Some(_), None) => Step::Add,
            (Some(in_new), Some(in_old)) if in_new <= in_old => Step::Add,
            _ => Step::Remove,
        }
    }
}

/// Compare two texts with default options.
pub fn diff(original: &str, optimized: &str) -> Vec<DiffLine> {
    DiffEngine::default().diff(original, optimized)
}

/// Split on `\n` without trimming. Empty text has no lines at all.
fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        Vec::new()
    } else {
        text.split('\n').collect()
    }
}

/// Offset (1-based) of the first occurrence of `target` after `from`.
fn find_ahead(lines: &[&str], from: usize, target: &str, limit: Option<usize>) -> Option<usize> {
    let start = from + 1;
    let end = match limit {
        Some(n) => start.saturating_add(n).min(lines.len()),
        None => lines.len(),
    };

    lines
        .get(start..end)?
        .iter()
        .position(|line| *line == target)
        .map(|pos| pos + 1)
}

/// 1-based line number, capped at `u32::MAX`.
fn line_number(index: usize) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |n| n.saturating_add(1))
}

fn added(line: &str, index: usize) -> DiffLine {
    DiffLine::Added {
        optimized_line: line.to_string(),
        optimized_line_number: line_number(index),
    }
}

fn removed(line: &str, index: usize) -> DiffLine {
    DiffLine::Removed {
        original_line: line.to_string(),
        original_line_number: line_number(index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines() {
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("a\n"), vec!["a", ""]);
        assert_eq!(split_lines("\n"), vec!["", ""]);
    }

    #[test]
    fn test_find_ahead() {
        let lines = ["a", "b", "c", "b"];
        assert_eq!(find_ahead(&lines, 0, "b", None), Some(1));
        assert_eq!(find_ahead(&lines, 1, "b", None), Some(2));
        assert_eq!(find_ahead(&lines, 0, "c", Some(1)), None);
        assert_eq!(find_ahead(&lines, 3, "a", None), None);
        assert_eq!(find_ahead(&lines, 0, "c", Some(0)), None);
    }

    #[test]
    fn test_modified_line() {
        let lines = diff("A\nB\nC", "A\nX\nC");
        assert_eq!(lines.len(), 3);
        assert!(matches!(lines[0], DiffLine::Unchanged { .. }));
        match &lines[1] {
            DiffLine::Modified {
                original_line,
                optimized_line,
                original_line_number,
                optimized_line_number,
                words,
            } => {
                assert_eq!(original_line, "B");
                assert_eq!(optimized_line, "X");
                assert_eq!((*original_line_number, *optimized_line_number), (2, 2));
                assert!(!words.is_empty());
            }
            other => panic!("expected Modified, got {:?}", other),
        }
        assert!(matches!(lines[2], DiffLine::Unchanged { .. }));
    }

    #[test]
    fn test_pure_insertion() {
        let lines = diff("A\nC", "A\nB\nC");
        assert_eq!(
            lines,
            vec![
                DiffLine::Unchanged {
                    original_line: "A".into(),
                    optimized_line: "A".into(),
                    original_line_number: 1,
                    optimized_line_number: 1,
                },
                DiffLine::Added {
                    optimized_line: "B".into(),
                    optimized_line_number: 2,
                },
                DiffLine::Unchanged {
                    original_line: "C".into(),
                    optimized_line: "C".into(),
                    original_line_number: 2,
                    optimized_line_number: 3,
                },
            ]
        );
    }

    #[test]
    fn test_pure_deletion() {
        let lines = diff("A\nB\nC", "A\nC");
        assert_eq!(DiffSummary::from_lines(&lines).removed, 1);
        assert_eq!(
            lines[1],
            DiffLine::Removed {
                original_line: "B".into(),
                original_line_number: 2,
            }
        );
        assert_eq!(lines[2].original(), Some(("C", 3)));
        assert_eq!(lines[2].optimized(), Some(("C", 2)));
    }

    #[test]
    fn test_tie_favors_addition() {
        // "B" reappears one line ahead in the optimized text and "A" reappears one
        // line ahead in the original text: equal offsets, so the optimized line is
        // treated as added.
        let lines = diff("B\nA", "A\nB");
        assert_eq!(
            lines[0],
            DiffLine::Added {
                optimized_line: "A".into(),
                optimized_line_number: 1,
            }
        );
    }

    #[test]
    fn test_sooner_match_wins() {
        // Current pair is ("X", "Y"). "X" reappears 3 lines ahead in the optimized
        // text, "Y" reappears 1 line ahead in the original text, so "X" is removed.
        let lines = diff("X\nY\nq", "Y\na\nb\nX");
        assert_eq!(
            lines[0],
            DiffLine::Removed {
                original_line: "X".into(),
                original_line_number: 1,
            }
        );
        assert!(matches!(lines[1], DiffLine::Unchanged { .. }));
    }

    #[test]
    fn test_zero_lookahead_always_modifies() {
        let engine = DiffEngine::new(DiffOptions::new().with_max_lookahead(0));
        let lines = engine.diff("A\nC", "A\nB\nC");
        assert!(matches!(lines[1], DiffLine::Modified { .. }));
        assert!(matches!(lines[2], DiffLine::Added { .. }));
    }

    #[test]
    fn test_word_highlighting_disabled() {
        let engine = DiffEngine::new(DiffOptions::new().with_word_highlighting(false));
        match &engine.diff("old", "new")[0] {
            DiffLine::Modified { words, .. } => assert!(words.is_empty()),
            other => panic!("expected Modified, got {:?}", other),
        }
    }

    #[test]
    fn test_line_number_saturates() {
        assert_eq!(line_number(0), 1);
        assert_eq!(line_number(41), 42);
        assert_eq!(line_number(u32::MAX as usize - 1), u32::MAX);
        assert_eq!(line_number(u32::MAX as usize), u32::MAX);
    }
}
