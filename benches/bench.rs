use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dnc::{
    harness::{random_matrix, random_sequence},
    integer_ext::rand_with_digits,
    inversions::count_and_sort,
    karatsuba::karatsuba,
    sorting::{sort, SortStrategy},
    strassen
};

pub fn sorting_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorting");
    group.measurement_time(Duration::from_secs(10));

    for size in [100, 1000] {
        let seq = random_sequence(size, 1000);

        for strategy in SortStrategy::ALL {
            group.bench_with_input(BenchmarkId::new(strategy.name(), size), &seq, |b, seq| b.iter(|| sort(strategy, seq)));
        }

        group.bench_with_input(BenchmarkId::new("inversions", size), &seq, |b, seq| b.iter(|| count_and_sort(seq)));
    }

    group.finish();
}

pub fn karatsuba_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("karatsuba");

    for digits in [50, 200, 800] {
        let x = rand_with_digits(digits, false);
        let y = rand_with_digits(digits, false);

        group.bench_function(BenchmarkId::from_parameter(digits), |b| b.iter(|| karatsuba(&x, &y)));
    }

    group.finish();
}

pub fn strassen_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("strassen");
    group.sample_size(20);

    for n in [16, 64] {
        let a = random_matrix(n, 100);
        let b = random_matrix(n, 100);

        group.bench_function(BenchmarkId::new("strassen", n), |bench| bench.iter(|| strassen::multiply(&a, &b).unwrap()));
        group.bench_function(BenchmarkId::new("naive", n), |bench| bench.iter(|| a.naive_mul(&b).unwrap()));
    }

    group.finish();
}

criterion_group!(benches, sorting_benchmarks, karatsuba_benchmarks, strassen_benchmarks);
criterion_main!(benches);
