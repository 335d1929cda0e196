//! Integration tests for the diff engine.

use resumekit::diff::{diff, DiffEngine, DiffOptions};
use resumekit::{DiffLine, DiffSummary, TokenChange};

const PAIRS: &[(&str, &str)] = &[
    ("", ""),
    ("a\nb", ""),
    ("", "a\nb"),
    ("A\nB\nC", "A\nX\nC"),
    ("A\nC", "A\nB\nC"),
    ("A\nB\nC", "A\nC"),
    (
        "Summary\nLed team\n\nSkills\n- Rust",
        "Summary\nLed a team of 5\n\nSkills\n- Rust\n- Go",
    ),
    ("x\ny\nz", "z\ny\nx"),
    ("same\nsame\nsame", "same\nother\nsame\nsame"),
    ("trailing\n", "trailing"),
    ("  indented\nline", "indented\nline"),
];

fn original_side(lines: &[DiffLine]) -> Vec<(String, u32)> {
    lines
        .iter()
        .filter_map(|l| l.original().map(|(s, n)| (s.to_string(), n)))
        .collect()
}

fn optimized_side(lines: &[DiffLine]) -> Vec<(String, u32)> {
    lines
        .iter()
        .filter_map(|l| l.optimized().map(|(s, n)| (s.to_string(), n)))
        .collect()
}

fn split(text: &str) -> Vec<String> {
    if text.is_empty() {
        Vec::new()
    } else {
        text.split('\n').map(String::from).collect()
    }
}

#[test]
fn test_every_line_is_conserved_in_order() {
    for (original, optimized) in PAIRS {
        let lines = diff(original, optimized);

        let old_side = original_side(&lines);
        let new_side = optimized_side(&lines);

        let old_text: Vec<String> = old_side.iter().map(|(s, _)| s.clone()).collect();
        let new_text: Vec<String> = new_side.iter().map(|(s, _)| s.clone()).collect();
        assert_eq!(old_text, split(original), "original side of {:?}", original);
        assert_eq!(new_text, split(optimized), "optimized side of {:?}", optimized);

        // Numbers are 1-based and consecutive per side.
        let old_numbers: Vec<u32> = old_side.iter().map(|(_, n)| *n).collect();
        let new_numbers: Vec<u32> = new_side.iter().map(|(_, n)| *n).collect();
        assert_eq!(old_numbers, (1..=old_numbers.len() as u32).collect::<Vec<_>>());
        assert_eq!(new_numbers, (1..=new_numbers.len() as u32).collect::<Vec<_>>());
    }
}

#[test]
fn test_identical_texts_are_unchanged() {
    for (text, _) in PAIRS {
        let lines = diff(text, text);
        assert!(lines.iter().all(|l| matches!(
            l,
            DiffLine::Unchanged {
                original_line_number,
                optimized_line_number,
                ..
            } if original_line_number == optimized_line_number
        )));
        assert!(DiffSummary::from_lines(&lines).is_identical());
    }
}

#[test]
fn test_empty_sides() {
    assert!(diff("", "").is_empty());

    let removed = diff("a\nb", "");
    assert_eq!(removed.len(), 2);
    assert!(removed.iter().all(|l| matches!(l, DiffLine::Removed { .. })));

    let added = diff("", "a\nb");
    assert_eq!(added.len(), 2);
    assert!(added.iter().all(|l| matches!(l, DiffLine::Added { .. })));
}

#[test]
fn test_rewritten_line_is_modified() {
    let lines = diff("A\nB\nC", "A\nX\nC");
    assert_eq!(lines.len(), 3);
    assert!(matches!(lines[0], DiffLine::Unchanged { .. }));
    match &lines[1] {
        DiffLine::Modified {
            original_line,
            optimized_line,
            original_line_number,
            optimized_line_number,
            ..
        } => {
            assert_eq!(original_line, "B");
            assert_eq!(optimized_line, "X");
            assert_eq!((*original_line_number, *optimized_line_number), (2, 2));
        }
        other => panic!("expected a modified line, got {:?}", other),
    }
    assert!(matches!(lines[2], DiffLine::Unchanged { .. }));
}

#[test]
fn test_inserted_line_is_added() {
    let lines = diff("A\nC", "A\nB\nC");
    assert_eq!(
        lines[1],
        DiffLine::Added {
            optimized_line: "B".to_string(),
            optimized_line_number: 2,
        }
    );
    let summary = DiffSummary::from_lines(&lines);
    assert_eq!((summary.unchanged, summary.added), (2, 1));
}

#[test]
fn test_deleted_line_is_removed() {
    let lines = diff("A\nB\nC", "A\nC");
    assert_eq!(
        lines[1],
        DiffLine::Removed {
            original_line: "B".to_string(),
            original_line_number: 2,
        }
    );
}

#[test]
fn test_word_highlighting_in_modified_line() {
    let lines = diff("Led team", "Led a team");
    let DiffLine::Modified { words, .. } = &lines[0] else {
        panic!("expected a modified line");
    };

    let original: String = words.original.iter().map(|t| t.text.as_str()).collect();
    let optimized: String = words.optimized.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(original, "Led team");
    assert_eq!(optimized, "Led a team");

    assert_eq!(words.original[0].change, TokenChange::Unchanged);
    assert_eq!(words.original[2].change, TokenChange::Removed);
    assert!(words
        .optimized
        .iter()
        .skip(2)
        .all(|t| t.change == TokenChange::Added));
}

#[test]
fn test_engine_options() {
    let engine = DiffEngine::new(
        DiffOptions::new()
            .with_word_highlighting(false)
            .with_max_lookahead(1),
    );

    // "C" reappears two lines ahead, beyond the lookahead window.
    let lines = engine.diff("A\nC", "A\nB1\nB2\nC");
    assert!(matches!(lines[1], DiffLine::Modified { ref words, .. } if words.is_empty()));

    let summary = DiffSummary::from_lines(&lines);
    assert_eq!(summary.total() as usize, lines.len());
}

#[test]
fn test_diff_json_shape() {
    let lines = diff("A\nB", "A\nX\nB");
    let json = serde_json::to_value(&lines).unwrap();
    assert_eq!(json[0]["kind"], "unchanged");
    assert_eq!(json[1]["kind"], "added");
    assert_eq!(json[1]["optimized_line"], "X");
    assert_eq!(json[1]["optimized_line_number"], 2);
}
