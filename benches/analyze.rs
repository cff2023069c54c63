//! Benchmarks for error analysis and document checking.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use json_doctor::validate::{DocumentFormat, Validator};
use json_doctor::ErrorAnalyzer;

const MESSAGES: &[&str] = &[
    "Unexpected token , in JSON at position 25",
    "Unexpected end of JSON input",
    "key must be a string at line 1 column 2",
    "something that matches nothing at all",
];

fn bench_analyze(c: &mut Criterion) {
    let analyzer = ErrorAnalyzer::new();

    c.bench_function("analyze_error_mixed", |b| {
        b.iter(|| {
            for message in MESSAGES {
                black_box(analyzer.analyze_error(black_box(message), None));
            }
        })
    });

    c.bench_function("analyze_error_with_fix", |b| {
        b.iter(|| {
            analyzer.analyze_error(
                black_box("Unexpected token , in JSON at position 25"),
                Some(black_box(r#"{"name": "John", "age": 30,}"#)),
            )
        })
    });
}

fn bench_check_jsonl(c: &mut Criterion) {
    let analyzer = ErrorAnalyzer::new();
    let validator = Validator::new(&analyzer);
    let document: String = (0..1_000)
        .map(|i| {
            if i % 100 == 0 {
                format!("{{\"id\": {},}}\n", i)
            } else {
                format!("{{\"id\": {}, \"name\": \"item-{}\"}}\n", i, i)
            }
        })
        .collect();

    c.bench_function("check_jsonl_1000_lines", |b| {
        b.iter(|| validator.check_str("bench.jsonl", black_box(&document), DocumentFormat::Jsonl))
    });
}

criterion_group!(benches, bench_analyze, bench_check_jsonl);
criterion_main!(benches);
