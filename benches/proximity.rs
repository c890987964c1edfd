//! Benchmark for the O(N) proximity scan that runs on every pointer-move
//! event.
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use driftfield::{proximity, FieldConfig, ParticleField, Vec2};

fn bench_scan(c: &mut Criterion) {
    let config = FieldConfig::default().with_count(5000).with_seed(42);
    let field = ParticleField::seed(&config);

    c.bench_function("proximity_scan_5000", |b| {
        b.iter(|| {
            proximity::affected(
                black_box(&field),
                black_box(Vec2::new(0.1, 0.1)),
                black_box(config.radius_sq),
            )
        })
    });

    c.bench_function("proximity_scan_5000_miss", |b| {
        b.iter(|| {
            proximity::affected(
                black_box(&field),
                black_box(Vec2::new(50.0, 50.0)),
                black_box(config.radius_sq),
            )
        })
    });
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
