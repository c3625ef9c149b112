use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use distfit::models::continuous::Normal;
use distfit::{KolmogorovSmirnov, ScoreTableConfig};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Exp, Poisson};

/// Generate exponential data
fn generate_exponential_data(size: usize, rate: f64, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let exp = Exp::new(rate).unwrap();
    (0..size).map(|_| exp.sample(&mut rng)).collect()
}

/// Generate Poisson counts
fn generate_count_data(size: usize, lambda: f64, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let poisson = Poisson::new(lambda).unwrap();
    (0..size).map(|_| poisson.sample(&mut rng)).collect()
}

fn bench_score_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("ScoreTable");
    let sizes = [100, 500, 2000];

    for &size in &sizes {
        let continuous = generate_exponential_data(size, 0.5, 42);
        group.bench_with_input(
            BenchmarkId::new("continuous", size),
            &continuous,
            |b, data| b.iter(|| KolmogorovSmirnov::score_table(black_box(data))),
        );

        let counts = generate_count_data(size, 3.0, 42);
        let discrete = ScoreTableConfig::discrete();
        group.bench_with_input(BenchmarkId::new("discrete", size), &counts, |b, data| {
            b.iter(|| KolmogorovSmirnov::score_table_with(black_box(data), &discrete))
        });
    }

    group.finish();
}

fn bench_one_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("OneSample");
    let model = Normal::standard();

    for &size in &[100, 1000, 10000] {
        let data = generate_exponential_data(size, 1.0, 7);
        group.bench_with_input(BenchmarkId::new("normal", size), &data, |b, data| {
            b.iter(|| {
                KolmogorovSmirnov::with_model(black_box(data), &model)
                    .map(|ks| ks.confidence_level())
            })
        });
    }

    group.finish();
}

fn bench_two_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("TwoSample");

    for &size in &[100, 1000, 10000] {
        let first = generate_exponential_data(size, 1.0, 1);
        let second = generate_exponential_data(size, 1.0, 2);
        group.bench_with_input(
            BenchmarkId::new("exponential", size),
            &(first, second),
            |b, (first, second)| {
                b.iter(|| {
                    KolmogorovSmirnov::two_sample(black_box(first), black_box(second))
                        .map(|ks| ks.statistic())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_score_table, bench_one_sample, bench_two_sample);
criterion_main!(benches);
