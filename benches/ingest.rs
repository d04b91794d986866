//! Benchmarks for chatroster extraction and batch ingestion.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench ingest -- html`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatroster::core::models::OutputConfig;
use chatroster::core::output::{to_csv, to_listing};
use chatroster::core::{OutputShape, ingest_batch, select_shape};
use chatroster::parser::{ExportFormat, create_extractor};

// =============================================================================
// Test Data Generators
// =============================================================================

/// Messages cycle through `authors` distinct people.
fn generate_json(count: usize, authors: usize) -> String {
    let messages: Vec<String> = (0..count)
        .map(|i| {
            let author = i % authors;
            format!(
                r#"{{"id": {i}, "type": "message", "date": "2024-01-15T10:30:00", "from": "Member{author} Surname", "from_id": "user{author}", "text": "Message number {i}"}}"#
            )
        })
        .collect();
    format!(
        r#"{{"name": "Bench Chat", "type": "private_supergroup", "messages": [{}]}}"#,
        messages.join(",\n")
    )
}

fn generate_html(count: usize, authors: usize) -> String {
    let mut html = String::from(
        r#"<!DOCTYPE html><html><head><meta charset="utf-8"/></head><body><div class="history">"#,
    );
    for i in 0..count {
        let author = i % authors;
        html.push_str(&format!(
            r#"<div class="message default clearfix" id="message{i}"><div class="body"><div class="pull_right date details">10:30</div><div class="from_name">Member{author} Surname</div><div class="text">Message number {i}</div></div></div>"#
        ));
    }
    html.push_str("</div></body></html>");
    html
}

// =============================================================================
// Extraction Benchmarks
// =============================================================================

fn bench_json_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("json_extraction");
    let extractor = create_extractor(ExportFormat::Json);

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let json = generate_json(size, 200);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &json, |b, json| {
            b.iter(|| {
                let candidates = extractor.extract(black_box(json.as_bytes())).unwrap();
                black_box(candidates)
            });
        });
    }
    group.finish();
}

fn bench_html_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("html_extraction");
    let extractor = create_extractor(ExportFormat::Html);

    for size in [100_usize, 1_000, 10_000] {
        let html = generate_html(size, 200);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &html, |b, html| {
            b.iter(|| {
                let candidates = extractor.extract(black_box(html.as_bytes())).unwrap();
                black_box(candidates)
            });
        });
    }
    group.finish();
}

// =============================================================================
// Full Pipeline Benchmark
// =============================================================================

fn bench_full_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_batch");
    let config = OutputConfig::new();

    for authors in [20_usize, 500] {
        let json = generate_json(5_000, authors);
        let html = generate_html(1_000, authors);
        group.bench_with_input(BenchmarkId::from_parameter(authors), &authors, |b, _| {
            b.iter(|| {
                let roster = ingest_batch(&[
                    ("result.json", black_box(&json)),
                    ("messages.html", black_box(&html)),
                ])
                .unwrap();
                let rendered = match select_shape(roster.len()) {
                    OutputShape::InlineList => to_listing(&roster),
                    OutputShape::Spreadsheet => to_csv(&roster, &config).unwrap(),
                };
                black_box(rendered)
            });
        });
    }
    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_json_extraction,
    bench_html_extraction,
    bench_full_batch,
);

criterion_main!(benches);
