use bandit_testbed::{
    Drift, RewardSampler, Testbed, argmax_random_tie,
    policies::{EpsilonGreedy, Policy, Random},
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use std::hint::black_box;

fn values(n: usize) -> Vec<f64> {
    (0..n).map(|i| ((i * 7919) % 101) as f64 / 100.0).collect()
}

fn bench_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernel");

    for n_arms in [10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("sample_rewards", n_arms), n_arms, |b, &n| {
            let values = values(n);
            let sampler = RewardSampler::default();
            let mut rng = rand::rngs::StdRng::seed_from_u64(42);

            b.iter(|| black_box(sampler.sample(&values, &mut rng).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("drift", n_arms), n_arms, |b, &n| {
            let values = values(n);
            let drift = Drift::new(0.01).unwrap();
            let mut rng = rand::rngs::StdRng::seed_from_u64(42);

            b.iter(|| black_box(drift.apply(&values, &mut rng)));
        });

        // Every value tied: worst case for the tie-break
        group.bench_with_input(BenchmarkId::new("argmax_all_tied", n_arms), n_arms, |b, &n| {
            let values = vec![1.0; n];
            let mut rng = rand::rngs::StdRng::seed_from_u64(42);

            b.iter(|| black_box(argmax_random_tie(&values, &mut rng).unwrap()));
        });
    }

    group.finish();
}

fn bench_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("policies");

    for n_arms in [10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("random_choose", n_arms), n_arms, |b, &n| {
            let values = values(n);
            let sampler = RewardSampler::default();
            let mut rng = rand::rngs::StdRng::seed_from_u64(42);

            b.iter(|| black_box(Random.choose(&values, &sampler, &mut rng).unwrap()));
        });

        group.bench_with_input(
            BenchmarkId::new("epsilon_greedy_choose", n_arms),
            n_arms,
            |b, &n| {
                let values = values(n);
                let policy = EpsilonGreedy::new(0.1).unwrap();
                let sampler = RewardSampler::default();
                let mut rng = rand::rngs::StdRng::seed_from_u64(42);

                b.iter(|| black_box(policy.choose(&values, &sampler, &mut rng).unwrap()));
            },
        );
    }

    group.finish();
}

fn bench_runs(c: &mut Criterion) {
    let mut group = c.benchmark_group("runs");

    for n_steps in [100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("nonstationary_run", n_steps), n_steps, |b, &n| {
            let mut rng = rand::rngs::StdRng::seed_from_u64(42);

            b.iter_batched(
                || {
                    Testbed::epsilon_greedy(values(10), 0.1)
                        .unwrap()
                        .with_drift(Drift::new(0.01).unwrap())
                },
                |mut testbed| black_box(testbed.run(n, &mut rng).unwrap()),
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_kernel, bench_policies, bench_runs);
criterion_main!(benches);
