//! Per-keystroke tokenization cost.
//!
//! Every edit re-splits and re-tokenizes the whole document, so these
//! measure a full pass over snippet-sized inputs.
//!
//! Run with: cargo bench -p pyglow-text

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use pyglow_text::{escape, split_lines, tokenize};
use std::hint::black_box;

// =============================================================================
// Test Data
// =============================================================================

const SNIPPET: &str = r#"class Fibonacci:
    def __init__(self, limit):
        self.limit = limit  # upper bound

    def values(self):
        a, b = 0, 1
        while a < self.limit:
            yield a
            a, b = b, a + b

if __name__ == "__main__":
    for n in Fibonacci(100).values():
        print(f"value: {n}", 'ok' if n >= 3.5 else "small")
"#;

/// A document of roughly `lines` lines, cycling through the snippet.
fn document(lines: usize) -> String {
    SNIPPET.lines().cycle().take(lines).collect::<Vec<_>>().join("\n")
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_tokenize_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize/document");
    for lines in [10usize, 50, 200] {
        let doc = document(lines);
        group.throughput(Throughput::Bytes(doc.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &doc, |b, doc| {
            b.iter(|| {
                let mut count = 0usize;
                for line in split_lines(black_box(doc)) {
                    count += tokenize(line).len();
                }
                black_box(count)
            });
        });
    }
    group.finish();
}

fn bench_tokenize_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize/line");
    let cases = [
        ("plain", "the quick brown fox jumps over the lazy dog"),
        ("code", "        print(f\"value: {n}\", 'ok' if n >= 3.5 else 1)"),
        ("comment", "x = 1  # if True and not False or None"),
    ];
    for (name, line) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), line, |b, line| {
            b.iter(|| black_box(tokenize(black_box(line))));
        });
    }
    group.finish();
}

fn bench_escape(c: &mut Criterion) {
    let mut group = c.benchmark_group("escape");
    let doc = document(200);
    group.throughput(Throughput::Bytes(doc.len() as u64));
    group.bench_function("document", |b| b.iter(|| black_box(escape(black_box(&doc)))));
    group.finish();
}

criterion_group!(
    benches,
    bench_tokenize_document,
    bench_tokenize_line,
    bench_escape
);
criterion_main!(benches);
