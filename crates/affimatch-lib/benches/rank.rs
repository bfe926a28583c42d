use affimatch_lib::matching::{MatchConfig, normalize, rank, rank_parallel, similarity};
use affimatch_lib::test_utils::synthetic_catalog;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn similarity_bench(c: &mut Criterion) {
    let search = normalize("kabelloser kopfhörer");
    let target = normalize("Der Kabellose Kopfhörer ist ideal für den Alltag und das Büro");

    c.bench_function("similarity_blended", |b| {
        b.iter(|| black_box(similarity(black_box(&search), black_box(&target))));
    });
}

fn rank_bench(c: &mut Criterion) {
    let config = MatchConfig::default();
    let mut group = c.benchmark_group("rank");

    for size in [100usize, 1_000, 5_000] {
        let products = synthetic_catalog(size);

        group.bench_with_input(BenchmarkId::new("sequential", size), &products, |b, products| {
            b.iter(|| black_box(rank(black_box("gaming laptop"), products, &config)));
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &products, |b, products| {
            b.iter(|| black_box(rank_parallel(black_box("gaming laptop"), products, &config)));
        });
    }

    group.finish();
}

criterion_group!(benches, similarity_bench, rank_bench);
criterion_main!(benches);
