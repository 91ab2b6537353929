//! Criterion benchmarks for the region engine's bulk bit operations.
//!
//! Run with:
//!   cargo bench --bench region_benches

use std::hint::black_box;

use bitarray::{BitArray, Endian, EndianArg};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn zeros(n: usize) -> BitArray {
    BitArray::zeros(n, EndianArg::Exact(Endian::Big))
}

fn bench_copy_within(c: &mut Criterion) {
    let mut group = c.benchmark_group("copy_within");
    for &n in &[1_024usize, 65_536, 1_048_576] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("aligned", n), &n, |b, &n| {
            let mut a = zeros(n * 2);
            b.iter(|| a.copy_within(black_box(n), black_box(0), black_box(n)));
        });
        group.bench_with_input(BenchmarkId::new("unaligned", n), &n, |b, &n| {
            let mut a = zeros(n * 2 + 3);
            b.iter(|| a.copy_within(black_box(n + 3), black_box(1), black_box(n)));
        });
    }
    group.finish();
}

fn bench_count_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_range");
    for &n in &[1_024usize, 65_536, 1_048_576] {
        let mut a = zeros(n);
        a.setrange(0, n, true);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("all_set", n), &n, |b, &n| {
            b.iter(|| black_box(a.count_range(true, 0, n)));
        });
    }
    group.finish();
}

fn bench_find_bit(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_bit");
    for &n in &[1_024usize, 65_536, 1_048_576] {
        let mut a = zeros(n);
        a.set(n - 1, true);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("worst_case", n), &n, |b, &n| {
            b.iter(|| black_box(a.find_bit(true, 0, n)));
        });
    }
    group.finish();
}

fn bench_repeat(c: &mut Criterion) {
    let mut group = c.benchmark_group("repeat");
    for &m in &[8usize, 64, 512] {
        group.bench_with_input(BenchmarkId::new("doubling", m), &m, |b, &m| {
            b.iter_batched(
                || zeros(64),
                |mut a| a.repeat(black_box(m)).unwrap(),
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_copy_within,
    bench_count_range,
    bench_find_bit,
    bench_repeat
);
criterion_main!(benches);
