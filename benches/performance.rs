// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for hapseq
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Curve interpolation throughput
//! - Sequence expansion over long bar ranges
//! - Document encoding

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hapseq::{interpolate, Builder, ControlPoint, CurveParamId, Interpolation};

/// Benchmark control point generation for each interpolation law
fn bench_interpolation(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpolation");
    let start = ControlPoint::new(0.0, 0.0);
    let end = ControlPoint::new(4.0, 1.0);

    for steps in [16usize, 256, 4096].iter() {
        for (name, law) in [
            ("linear", Interpolation::Linear),
            ("ease_in_out", Interpolation::EaseInOut),
            ("exponential", Interpolation::Exponential(2.5)),
        ] {
            group.bench_with_input(BenchmarkId::new(name, steps), steps, |b, &steps| {
                b.iter(|| black_box(interpolate(start, end, black_box(steps), law)))
            });
        }
    }

    group.finish();
}

/// Benchmark expanding beat sequences into transients
fn bench_sequence_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence");

    for bars in [8u32, 64, 512].iter() {
        group.bench_with_input(BenchmarkId::new("every_beat", bars), bars, |b, &bars| {
            b.iter(|| {
                let mut builder = Builder::new("bench", "bench");
                builder.sequence().every_beat(0, bars - 1, 1.0, 0.5);
                black_box(builder.len())
            })
        });

        group.bench_with_input(BenchmarkId::new("pattern", bars), bars, |b, &bars| {
            b.iter(|| {
                let mut builder = Builder::new("bench", "bench");
                builder.sequence().pattern(0, bars - 1, |session, bar| {
                    session.at(bar, 0.0).transient().intensity(1.0).add();
                    session.at(bar, 2.0).continuous_beats(1.0).add();
                });
                black_box(builder.len())
            })
        });
    }

    group.finish();
}

/// Benchmark encoding a mixed document
fn bench_encoding(c: &mut Criterion) {
    let mut builder = Builder::new("bench", "bench");
    builder.sequence().every_beat(0, 127, 0.8, 0.4);
    for bar in 0..32u32 {
        builder
            .at(bar, 0.0)
            .curve(CurveParamId::HapticIntensity)
            .from(0.0, 1.0)
            .to(2.0, 0.0)
            .ease_in_out(32)
            .add();
    }

    let mut group = c.benchmark_group("encoding");
    group.bench_function("compact", |b| {
        b.iter(|| black_box(builder.to_json_bytes(false)))
    });
    group.bench_function("pretty", |b| {
        b.iter(|| black_box(builder.to_json_bytes(true)))
    });
    group.bench_function("write_to", |b| {
        let mut buf = Vec::with_capacity(1 << 20);
        b.iter(|| {
            buf.clear();
            black_box(builder.write_to(&mut buf, false))
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_interpolation,
    bench_sequence_expansion,
    bench_encoding,
);
criterion_main!(benches);
