//! Benchmarks for vexel vector operations.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use vexel_core::f16;
use vexel_math::geometry;
use vexel_math::prelude::*;

/// Benchmark dot products across element types.
fn bench_dot(c: &mut Criterion) {
    let mut group = c.benchmark_group("dot");

    for size in [1000, 10000, 100000].iter() {
        let floats: Vec<Float4> = (0..*size)
            .map(|i| Float4::splat(i as f32 / *size as f32))
            .collect();
        let bytes: Vec<Byte4> = (0..*size).map(|i| Byte4::splat(i as u8)).collect();
        let halves: Vec<Half4> = (0..*size)
            .map(|i| Half4::splat(f16::from_f32(i as f32 / *size as f32)))
            .collect();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("float4", size), &floats, |b, v| {
            b.iter(|| v.iter().map(|&x| black_box(x).dot(x)).sum::<f32>())
        });

        group.bench_with_input(BenchmarkId::new("byte4", size), &bytes, |b, v| {
            b.iter(|| {
                v.iter()
                    .fold(0u8, |acc, &x| acc.wrapping_add(black_box(x).dot(x)))
            })
        });

        group.bench_with_input(BenchmarkId::new("half4", size), &halves, |b, v| {
            b.iter(|| v.iter().map(|&x| black_box(x).dot(x)).collect::<Vec<_>>())
        });
    }

    group.finish();
}

/// Benchmark interpolation.
fn bench_interp(c: &mut Criterion) {
    let mut group = c.benchmark_group("interp");

    let a: Vec<Float3> = (0..10000).map(|i| Float3::splat(i as f32)).collect();
    let b = Float3::new(1.0, 2.0, 3.0);
    let ints: Vec<Int3> = (0..10000).map(|i| Int3::splat(i)).collect();
    group.throughput(Throughput::Elements(10000));

    group.bench_function("lerp_float3", |bench| {
        bench.iter(|| a.iter().map(|&v| v.lerp(b, black_box(0.3))).collect::<Vec<_>>())
    });

    group.bench_function("smooth_step_float3", |bench| {
        bench.iter(|| {
            a.iter()
                .map(|&v| v.smooth_step(b, black_box(0.3)))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("lerp_int3", |bench| {
        bench.iter(|| {
            ints.iter()
                .map(|&v| v.lerp(Int3::ZERO, black_box(0.3)))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

/// Benchmark the conversion matrix.
fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    let floats: Vec<Float3> = (0..10000)
        .map(|i| Float3::new(i as f32, -(i as f32), 0.5))
        .collect();
    group.throughput(Throughput::Elements(10000));

    group.bench_function("float3_to_int4", |b| {
        b.iter(|| {
            floats
                .iter()
                .map(|&v| black_box(v).convert::<Int4>())
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("float3_to_half3", |b| {
        b.iter(|| {
            floats
                .iter()
                .map(|&v| black_box(v).cast::<f16>())
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("float3_to_byte2", |b| {
        b.iter(|| {
            floats
                .iter()
                .map(|&v| black_box(v).convert::<Byte2>())
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

/// Benchmark Gram-Schmidt over growing batches.
fn bench_orthogonalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("orthogonalize");

    for size in [4, 16, 64].iter() {
        let source: Vec<Double4> = (0..*size)
            .map(|i| {
                let t = i as f64;
                Double4::new(t.sin() + 1.0, t.cos(), t * 0.5, 1.0 / (t + 1.0))
            })
            .collect();
        let mut dest = vec![Double4::ZERO; *size];

        group.bench_with_input(BenchmarkId::new("double4", size), &source, |b, s| {
            b.iter(|| geometry::orthogonalize(&mut dest, black_box(s)))
        });

        group.bench_with_input(BenchmarkId::new("double4_normalized", size), &source, |b, s| {
            b.iter(|| geometry::orthonormalize(&mut dest, black_box(s)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_dot,
    bench_interp,
    bench_convert,
    bench_orthogonalize,
);

criterion_main!(benches);
