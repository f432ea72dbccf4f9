//! Criterion benchmarks for the settings sanitizer.
//!
//! Sanitization runs on every store initialization and every `set_all`, so
//! it should stay well under a microsecond for realistic inputs.
//!
//! Run with:
//! ```bash
//! cargo bench --package theme-core --bench sanitize_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::{json, Value};
use theme_core::{sanitize, validate};

// ── Input fixtures ────────────────────────────────────────────────────────────

fn valid_input() -> Value {
    json!({
        "mode": "dark",
        "colorScheme": "ocean",
        "font": "roboto",
        "navigation": { "position": "horizontal", "layout": "sticky" },
        "login": { "layout": "left" }
    })
}

fn partly_invalid_input() -> Value {
    json!({
        "mode": "dark",
        "colorScheme": "bogus",
        "font": 12,
        "navigation": "sideways",
        "login": { "layout": "center" }
    })
}

fn oversized_input(extra_keys: usize) -> Value {
    let mut value = valid_input();
    if let Some(map) = value.as_object_mut() {
        for i in 0..extra_keys {
            map.insert(format!("unknown_{i}"), json!(i));
        }
    }
    value
}

// ── Benchmarks ────────────────────────────────────────────────────────────────

fn bench_sanitize(c: &mut Criterion) {
    let mut group = c.benchmark_group("sanitize");
    let valid = valid_input();
    let partly_invalid = partly_invalid_input();

    group.bench_function("null", |b| b.iter(|| sanitize(black_box(&Value::Null))));
    group.bench_function("valid", |b| b.iter(|| sanitize(black_box(&valid))));
    group.bench_function("partly_invalid", |b| {
        b.iter(|| sanitize(black_box(&partly_invalid)))
    });

    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let partly_invalid = partly_invalid_input();
    c.bench_function("validate/partly_invalid", |b| {
        b.iter(|| validate(black_box(&partly_invalid)))
    });
}

/// Unknown keys are skipped, so cost should stay flat as they grow.
fn bench_sanitize_unknown_key_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sanitize_unknown_keys");

    for &count in &[0usize, 16, 256] {
        let input = oversized_input(count);
        group.bench_with_input(BenchmarkId::new("extra_keys", count), &count, |b, _| {
            b.iter(|| sanitize(black_box(&input)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_sanitize,
    bench_validate,
    bench_sanitize_unknown_key_scaling,
);
criterion_main!(benches);
