use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use karger_mincut::{run_trial, Graph, KargerConfig, MinCutEstimator};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Ring of `n` vertices with `chords` random extra edges.
fn generate_graph(n: u32, chords: usize, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pairs: Vec<(u32, u32)> = (1..=n).map(|v| (v, v % n + 1)).collect();
    while pairs.len() < n as usize + chords {
        let a = rng.gen_range(1..=n);
        let b = rng.gen_range(1..=n);
        if a != b {
            pairs.push((a, b));
        }
    }
    Graph::from_edges(pairs).unwrap()
}

fn bench_single_trial(c: &mut Criterion) {
    let mut group = c.benchmark_group("Karger Trial");
    for &n in &[100u32, 1_000, 10_000] {
        let mut graph = generate_graph(n, n as usize * 4, 42);
        let mut rng = StdRng::seed_from_u64(7);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let cut = run_trial(black_box(&mut graph), &mut rng).unwrap();
                graph.reset();
                cut.size
            })
        });
    }
    group.finish();
}

fn bench_driver(c: &mut Criterion) {
    let mut group = c.benchmark_group("Karger Driver");
    group.sample_size(10);
    let graph = generate_graph(200, 800, 1);
    let config = KargerConfig::with_trials(200);

    group.bench_function("sequential", |b| {
        let mut graph = graph.clone();
        let mut estimator = MinCutEstimator::with_seed(config.clone(), 3);
        b.iter(|| estimator.estimate(black_box(&mut graph)).min_cut)
    });
    group.bench_function("parallel", |b| {
        let mut estimator = MinCutEstimator::with_seed(config.clone(), 3);
        b.iter(|| estimator.estimate_parallel(black_box(&graph)).min_cut)
    });
    group.finish();
}

criterion_group!(benches, bench_single_trial, bench_driver);
criterion_main!(benches);
