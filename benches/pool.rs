use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use weighted_pool::{PoolOptions, RngSource, WeightedPool};

fn gen_pairs(n: usize) -> Vec<(usize, f64)> {
    let mut rng = Pcg32::seed_from_u64(777);
    (0..n).map(|i| (i, 0.1 + rng.random::<f64>())).collect()
}

fn pool(n: usize, dependent: bool, seed: u64) -> WeightedPool<usize, RngSource<Pcg32>> {
    PoolOptions::new()
        .values(gen_pairs(n))
        .dependent(dependent)
        .random_source(RngSource::new(Pcg32::seed_from_u64(seed)))
        .build()
}

fn bench_pool_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("pool_build");
    for &n in &[2usize, 8, 64, 256, 1024] {
        let pairs = gen_pairs(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("from_pairs_n={n}"), |b| {
            b.iter(|| black_box(WeightedPool::from_pairs(black_box(pairs.clone()))));
        });
    }
    group.finish();
}

fn bench_pool_pick(c: &mut Criterion) {
    let mut group = c.benchmark_group("pool_pick");
    const PICKS_PER_ITER: usize = 1024;

    for &n in &[2usize, 8, 64, 256, 1024] {
        group.throughput(Throughput::Elements(PICKS_PER_ITER as u64));

        group.bench_function(format!("independent_n={n}"), |b| {
            b.iter_batched_ref(
                || pool(n, false, 999),
                |pool| {
                    let mut s = 0usize;
                    for _ in 0..PICKS_PER_ITER {
                        s ^= pool.pick().unwrap_or_default();
                    }
                    black_box(s)
                },
                BatchSize::SmallInput,
            );
        });

        // drain the whole pool once per iteration
        group.bench_function(format!("dependent_drain_n={n}"), |b| {
            b.iter_batched_ref(
                || pool(n, true, 1001),
                |pool| {
                    let mut s = 0usize;
                    while let Ok(v) = pool.pick() {
                        s ^= v;
                    }
                    black_box(s)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(pool_benches, bench_pool_build, bench_pool_pick);
criterion_main!(pool_benches);
