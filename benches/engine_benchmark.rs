//! Benchmarks for resumekit parsing, diffing and rendering.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic resumes of increasing length.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use resumekit::diff::diff;
use resumekit::render::{render, to_html_document, RenderOptions, TemplateKey};

/// Creates a synthetic resume with the given number of sections.
fn create_test_resume(section_count: usize) -> String {
    let mut content = String::from("Jane Doe\njane@example.com | +1 555 0100\n");

    for i in 0..section_count {
        content.push_str(&format!("\nSection {}\n", i + 1));
        content.push_str("Senior engineer working on distributed storage systems.\n");
        for j in 0..5 {
            content.push_str(&format!(
                "- Delivered project {} with measurable impact on latency\n",
                j + 1
            ));
        }
    }

    content
}

/// Rewrites every third line, inserts and drops a few others.
fn create_optimized(original: &str) -> String {
    original
        .lines()
        .enumerate()
        .filter(|(i, _)| i % 11 != 7)
        .flat_map(|(i, line)| {
            let mut out = vec![if i % 3 == 0 {
                format!("{} (improved)", line)
            } else {
                line.to_string()
            }];
            if i % 13 == 5 {
                out.push("- Added achievement".to_string());
            }
            out
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Benchmark resume parsing at various sizes.
fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for section_count in [1, 10, 50].iter() {
        let text = create_test_resume(*section_count);

        group.bench_function(format!("{}_sections", section_count), |b| {
            b.iter(|| resumekit::parse(black_box(&text)));
        });
    }

    group.finish();
}

/// Benchmark the line diff on rewritten resumes.
fn bench_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff");

    for section_count in [1, 10, 50].iter() {
        let original = create_test_resume(*section_count);
        let optimized = create_optimized(&original);

        group.bench_function(format!("{}_sections", section_count), |b| {
            b.iter(|| diff(black_box(&original), black_box(&optimized)));
        });
    }

    group.finish();
}

/// Benchmark standalone HTML rendering for every template.
fn bench_rendering(c: &mut Criterion) {
    let text = create_test_resume(10);
    let parsed = resumekit::parse(&text);
    let options = RenderOptions::default();

    for key in TemplateKey::ALL {
        c.bench_function(&format!("render_{}", key), |b| {
            b.iter(|| to_html_document(&render(black_box(&parsed), &text, key), &options));
        });
    }
}

criterion_group!(benches, bench_parsing, bench_diff, bench_rendering);
criterion_main!(benches);
