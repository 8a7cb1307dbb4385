//! Benchmark for turning benchmark output into a chart document.
//!
//! Measures the performance of:
//! 1. Extracting and grouping result lines from mixed harness output
//! 2. Rendering the grouped table as HTML

use bench_chart::{ChartConfig, emit_with, extract_with};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const GROUPS: &[&str] = &[
    "BenchmarkRandomShuffleInsertsU64",
    "BenchmarkRandomFullInsertsInsertsU64",
    "BenchmarkRandomFullDeletesU64",
    "BenchmarkFullReadsU64",
    "BenchmarkFullReadsMissesU64",
];
const VARIANTS: &[&str] = &["robin", "go", "swiss", "linear"];

/// Synthetic `go test -bench` output with `lines` result lines and some noise.
fn synthetic_output(lines: usize) -> Vec<String> {
    let mut output = vec![
        "goos: linux".to_string(),
        "goarch: amd64".to_string(),
        "pkg: github.com/x/collections/hashmap".to_string(),
    ];
    for i in 0..lines {
        let group = GROUPS[i % GROUPS.len()];
        let variant = VARIANTS[(i / GROUPS.len()) % VARIANTS.len()];
        let n = 1 << (i % 20);
        output.push(format!(
            "{group}/{variant}-{n}-8\t  1000\t{} ns/op\t{} B/op\t0.{} Load\t{n} N-runs\t0 allocs/op\t1 x",
            1_000 + i * 37,
            n * 24,
            i % 100
        ));
    }
    output.push("PASS".to_string());
    output
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    let config = ChartConfig::default();

    for lines in [100, 1_000, 10_000] {
        let input = synthetic_output(lines);
        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &input, |b, input| {
            b.iter(|| extract_with(black_box(input), &config).unwrap());
        });
    }

    group.finish();
}

fn bench_emit(c: &mut Criterion) {
    let mut group = c.benchmark_group("emit");
    let config = ChartConfig::default();

    for lines in [100, 1_000, 10_000] {
        let table = extract_with(synthetic_output(lines), &config).unwrap();
        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &table, |b, table| {
            b.iter(|| emit_with(black_box(table), &config));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_extract, bench_emit);
criterion_main!(benches);
