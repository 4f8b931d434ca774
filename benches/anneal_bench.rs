//! Criterion benchmarks for the annealing route search.
//!
//! Measures the full search pipeline at several city counts and the
//! distance-table construction on its own.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tsp_anneal::annealer::AnnealConfig;
use tsp_anneal::map::{CityMap, DistanceTable};
use tsp_anneal::random::create_rng;
use tsp_anneal::search::SearchRunner;

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    for &n in &[10usize, 25, 50] {
        let config = AnnealConfig::default().with_heat_ceiling(20.0).with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(n, config),
            |b, (n, config)| {
                b.iter(|| {
                    let result = SearchRunner::run(black_box(*n), black_box(config)).unwrap();
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_table_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_build");

    for &n in &[50usize, 200, 500] {
        let mut rng = create_rng(42);
        let map = CityMap::generate(n, 45, &mut rng).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &map, |b, map| {
            b.iter(|| {
                let mut rng = create_rng(7);
                black_box(DistanceTable::build(black_box(map), &mut rng))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_search, bench_table_build);
criterion_main!(benches);
