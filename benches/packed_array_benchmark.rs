use boolpack::{PackedBoolArray, PackedWord};
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::prelude::*;

/// Sizes swept by every group: four decades of linear steps plus the
/// 100k..1M range.
fn sweep_sizes() -> Vec<usize> {
    let mut sizes = Vec::new();
    sizes.extend((10..100).step_by(10));
    sizes.extend((100..1_000).step_by(100));
    sizes.extend((1_000..10_000).step_by(1_000));
    sizes.extend((10_000..100_000).step_by(10_000));
    sizes.extend((100_000..=1_000_000).step_by(100_000));
    sizes
}

pub fn create_benchmark(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("create");
    for size in sweep_sizes() {
        group.sample_size(10);
        group.bench_with_input(BenchmarkId::new("bool", size), &size, |bencher, &size| {
            bencher.iter(|| vec![false; size]);
        });
        group.bench_with_input(BenchmarkId::new("packed32", size), &size, |bencher, &size| {
            bencher.iter(|| PackedBoolArray::<u32>::zeros(size));
        });
        group.bench_with_input(BenchmarkId::new("packed64", size), &size, |bencher, &size| {
            bencher.iter(|| PackedBoolArray::<u64>::zeros(size));
        });
    }
    group.finish();
}

pub fn set_benchmark(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set");
    for size in sweep_sizes() {
        group.sample_size(10);
        group.bench_with_input(BenchmarkId::new("bool", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || vec![false; size],
                |mut bits| {
                    for index in 0..size {
                        bits[index] = index % 2 == 0;
                    }
                    bits
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("packed32", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || PackedBoolArray::<u32>::zeros(size),
                write_alternating,
                BatchSize::SmallInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("packed64", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || PackedBoolArray::<u64>::zeros(size),
                write_alternating,
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

pub fn get_benchmark(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("get");
    for size in sweep_sizes() {
        group.sample_size(10);
        let bits: Vec<bool> = (0..size).map(|index| index % 2 == 0).collect();
        let packed32: PackedBoolArray<u32> = bits.iter().copied().collect();
        let packed64: PackedBoolArray<u64> = bits.iter().copied().collect();

        group.bench_with_input(BenchmarkId::new("bool", size), &bits, |bencher, bits| {
            bencher.iter(|| bits.iter().filter(|bit| **bit).count());
        });
        group.bench_with_input(BenchmarkId::new("packed32", size), &packed32, |bencher, packed| {
            bencher.iter(|| count_set(packed));
        });
        group.bench_with_input(BenchmarkId::new("packed64", size), &packed64, |bencher, packed| {
            bencher.iter(|| count_set(packed));
        });
    }
    group.finish();
}

pub fn get_random_benchmark(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("get_random_content");
    for size in [1_000usize, 100_000usize, 1_000_000usize] {
        group.sample_size(10);
        let bits = random_bits(size);
        let packed32: PackedBoolArray<u32> = bits.iter().copied().collect();

        group.bench_with_input(BenchmarkId::new("bool", size), &bits, |bencher, bits| {
            bencher.iter(|| bits.iter().filter(|bit| **bit).count());
        });
        group.bench_with_input(BenchmarkId::new("packed32", size), &packed32, |bencher, packed| {
            bencher.iter(|| count_set(packed));
        });
    }
    group.finish();
}

fn write_alternating<W: PackedWord>(mut packed: PackedBoolArray<W>) -> PackedBoolArray<W> {
    for index in 0..packed.len() {
        packed.assign_index(index, index % 2 == 0);
    }
    packed
}

fn count_set<W: PackedWord>(packed: &PackedBoolArray<W>) -> usize {
    let mut count = 0;
    for index in 0..packed.len() {
        if packed.index(index) {
            count += 1;
        }
    }
    count
}

fn random_bits(length: usize) -> Vec<bool> {
    let mut generator = thread_rng();
    (0..length).map(|_| generator.gen_bool(0.5)).collect()
}

criterion_group!(
    benches,
    create_benchmark,
    set_benchmark,
    get_benchmark,
    get_random_benchmark,
);
criterion_main!(benches);
