use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hyohon::apportion::apportion;
use hyohon::nonprobability::{haphazard_sample_with_rng, quota_sample};
use hyohon::probability::{simple_random_with_rng, stratified_with_rng, systematic_sorted_with_rng};
use hyohon::reservoir::select_without_replacement;
use indexmap::IndexMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");

    let sizes = [1_000, 10_000, 100_000];
    let k = 100;

    for &size in &sizes {
        group.bench_function(format!("reservoir_n{}_k{}", size, k), |b| {
            let mut rng = ChaCha8Rng::seed_from_u64(0);
            b.iter(|| {
                black_box(select_without_replacement(0..black_box(size), k, &mut rng));
            })
        });
    }

    for &size in &sizes {
        let data: Vec<f64> = (0..size).map(|i| i as f64).collect();
        group.bench_function(format!("simple_random_n{}_k{}", size, k), |b| {
            let mut rng = ChaCha8Rng::seed_from_u64(1);
            b.iter(|| {
                black_box(simple_random_with_rng(black_box(&data), k, &mut rng));
            })
        });
    }
    group.finish();
}

fn bench_systematic(c: &mut Criterion) {
    let mut group = c.benchmark_group("systematic");
    let sizes = [1_000, 100_000];

    for &size in &sizes {
        let data: Vec<f64> = (0..size).rev().map(|i| i as f64).collect();
        group.bench_function(format!("sorted_n{}", size), |b| {
            let mut rng = ChaCha8Rng::seed_from_u64(2);
            b.iter(|| {
                black_box(systematic_sorted_with_rng(black_box(&data), 100, &mut rng));
            })
        });
    }
    group.finish();
}

fn bench_stratified(c: &mut Criterion) {
    let mut group = c.benchmark_group("stratified");
    let size = 100_000usize;

    for &strata in &[4usize, 64, 1024] {
        let data: Vec<f64> = (0..size).map(|i| i as f64).collect();
        let labels: Vec<usize> = (0..size).map(|i| i % strata).collect();
        group.bench_function(format!("strata{}_n{}", strata, size), |b| {
            let mut rng = ChaCha8Rng::seed_from_u64(3);
            b.iter(|| {
                black_box(stratified_with_rng(black_box(&data), &labels, 1_000, &mut rng));
            })
        });

        let sizes: Vec<(usize, usize)> = (0..strata).map(|s| (s, size / strata + s % 3)).collect();
        group.bench_function(format!("apportion_strata{}", strata), |b| {
            b.iter(|| black_box(apportion(sizes.iter().copied(), black_box(1_000))))
        });
    }
    group.finish();
}

fn bench_nonprobability(c: &mut Criterion) {
    let mut group = c.benchmark_group("nonprobability");

    let mut groups: IndexMap<usize, Vec<f64>> = IndexMap::new();
    for g in 0..32 {
        groups.insert(g, (0..1_000).map(|i| (g * 1_000 + i) as f64).collect());
    }
    let quotas: IndexMap<usize, usize> = (0..32).map(|g| (g, 25)).collect();

    group.bench_function("quota_32x1000", |b| {
        b.iter(|| black_box(quota_sample(black_box(&groups), &quotas)))
    });

    let flat: Vec<f64> = groups.values().flatten().copied().collect();
    group.bench_function("haphazard_32000_k500", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        b.iter(|| black_box(haphazard_sample_with_rng(black_box(&flat), 500, &mut rng)))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_selection,
    bench_systematic,
    bench_stratified,
    bench_nonprobability
);
criterion_main!(benches);
