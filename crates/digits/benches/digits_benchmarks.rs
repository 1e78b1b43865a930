//! Benchmarks for basket-digits operations.
#![allow(missing_docs)]

use basket_digits::{divisible, enumerate_combinations, extract_digit_runs};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::Rng;

fn random_mixed_string(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| {
            if rng.r#gen::<bool>() {
                char::from(b'0' + rng.gen_range(0..10u8))
            } else {
                char::from(b'a' + rng.gen_range(0..26u8))
            }
        })
        .collect()
}

fn bench_extract_digit_runs(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_digit_runs");

    for size in [100, 1000, 10000, 100000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let input = random_mixed_string(size);
            b.iter(|| extract_digit_runs(black_box(&input)));
        });
    }

    group.finish();
}

fn bench_enumerate_combinations(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate_combinations");

    for size in [10, 100, 1000] {
        group.throughput(Throughput::Elements((size * (size + 1) / 2) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let run: String =
                std::iter::repeat("9876543210").flat_map(str::chars).take(size).collect();
            b.iter(|| enumerate_combinations(black_box(&run)).count());
        });
    }

    group.finish();
}

fn bench_divisible(c: &mut Criterion) {
    let mut group = c.benchmark_group("divisible");

    for (size, x) in [(100, 3), (1000, 7), (10000, 13)] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::new("len_divisor", format!("{size}_{x}")),
            &(size, x),
            |b, &(size, x)| {
                let input = random_mixed_string(size);
                b.iter(|| divisible(black_box(&input), black_box(x)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_extract_digit_runs, bench_enumerate_combinations, bench_divisible);

criterion_main!(benches);
