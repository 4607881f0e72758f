//! Benchmarks for the outline analysis pipeline.
//!
//! Run with: cargo bench
//!
//! These benchmarks measure the pure analysis core over synthetic runs,
//! independent of any PDF parsing cost.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pdfoutline::{outline_from_runs, TextRun};

/// Build a synthetic document: `pages` pages of body text with a small,
/// repeating hierarchy of headings.
fn synthetic_runs(pages: u32, body_lines_per_page: usize) -> Vec<TextRun> {
    let mut runs = Vec::new();

    for page in 1..=pages {
        runs.push(TextRun::new(
            format!("Chapter Heading Number {}", to_words(page)),
            20.0,
            "Helvetica-Bold",
            page,
            72.0,
            48.0,
        ));
        runs.push(TextRun::new(
            format!("Section Heading {}", to_words(page)),
            15.0,
            "Helvetica-Bold",
            page,
            72.0,
            96.0,
        ));

        for i in 0..body_lines_per_page {
            runs.push(TextRun::new(
                "ordinary body text line for baseline estimation and scoring",
                10.0,
                "Helvetica",
                page,
                72.0,
                140.0 + 14.0 * i as f32,
            ));
        }
    }

    runs
}

/// Spell a small number without digits, so heading texts stay clean.
fn to_words(n: u32) -> String {
    const WORDS: [&str; 10] = [
        "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
    ];
    n.to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| WORDS[d as usize])
        .collect::<Vec<_>>()
        .join(" ")
}

/// Benchmark full pipeline over documents of increasing size.
fn bench_outline_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("outline_analysis");

    for pages in [1u32, 10, 50].iter() {
        let runs = synthetic_runs(*pages, 40);

        group.bench_function(format!("{}_pages", pages), |b| {
            b.iter(|| outline_from_runs(black_box(&runs)));
        });
    }

    group.finish();
}

/// Benchmark title extraction alone on a dense first page.
fn bench_title_extraction(c: &mut Criterion) {
    let runs = synthetic_runs(1, 200);

    c.bench_function("title_extraction", |b| {
        b.iter(|| pdfoutline::analyze::title::extract_title(black_box(&runs)));
    });
}

criterion_group!(benches, bench_outline_analysis, bench_title_extraction);
criterion_main!(benches);
