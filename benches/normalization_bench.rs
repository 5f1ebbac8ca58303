//! Normalizer throughput benchmarks.
//!
//! Startup normalizes at most `row_limit` rows, so these numbers matter for
//! boot time rather than steady-state serving.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `rows` | Normalize 50 fully populated rows (every record kind emitted) |
//! | `sparse` | Normalize 50 rows that hit every randomized fallback |
//! | `truncate` | Description truncation on short and long payloads |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench normalization_bench
//! open target/criterion/report/index.html
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;
use threatboard::config::Config;
use threatboard::normalizer::truncate_description;
use threatboard::{Normalizer, RawRow};

const ROWS: usize = 50;

fn row(pairs: &[(&str, String)]) -> RawRow {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn full_rows() -> Vec<RawRow> {
    (0..ROWS)
        .map(|i| {
            row(&[
                ("Timestamp", "2023-05-30 06:33:58".to_string()),
                ("Source IP Address", format!("103.216.15.{i}")),
                ("Destination IP Address", "84.9.164.252".to_string()),
                ("Destination Port", "17616".to_string()),
                ("Packet Length", "503".to_string()),
                ("Payload Data", "unusual authentication request".to_string()),
                ("Anomaly Scores", format!("{}.5", i % 100)),
                ("Attack Type", "Malware".to_string()),
                ("Action Taken", "Logged".to_string()),
                ("Severity Level", "High".to_string()),
                ("User Information", format!("user{i}")),
                ("Geo-location Data", "Mumbai, Maharashtra".to_string()),
            ])
        })
        .collect()
}

fn sparse_rows() -> Vec<RawRow> {
    (0..ROWS)
        .map(|i| {
            row(&[
                ("Source IP Address", format!("10.0.0.{i}")),
                ("Destination IP Address", "10.0.1.1".to_string()),
                ("Attack Type", "Intrusion".to_string()),
            ])
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

fn rows_bench(c: &mut Criterion) {
    let normalizer = Normalizer::from_config(&Config::defaults()).unwrap();
    let mut group = c.benchmark_group("rows");
    group.throughput(Throughput::Elements(ROWS as u64));

    let full = full_rows();
    group.bench_with_input(BenchmarkId::new("full", ROWS), &full, |b, rows| {
        let mut rng = StdRng::seed_from_u64(1);
        b.iter(|| black_box(normalizer.normalize_rows(rows.iter().cloned(), &mut rng)))
    });

    group.finish();

    let mut group = c.benchmark_group("sparse");
    group.throughput(Throughput::Elements(ROWS as u64));

    let sparse = sparse_rows();
    group.bench_with_input(BenchmarkId::new("fallbacks", ROWS), &sparse, |b, rows| {
        let mut rng = StdRng::seed_from_u64(2);
        b.iter(|| black_box(normalizer.normalize_rows(rows.iter().cloned(), &mut rng)))
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Truncation
// ---------------------------------------------------------------------------

fn truncate_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("truncate");

    let short = "login attempt";
    let long = "suspicious login ".repeat(40);

    group.bench_function("short", |b| b.iter(|| truncate_description(black_box(short))));
    group.bench_function("long", |b| b.iter(|| truncate_description(black_box(&long))));

    group.finish();
}

criterion_group!(benches, rows_bench, truncate_bench);
criterion_main!(benches);
