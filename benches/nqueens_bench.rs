//! Criterion benchmarks for the N-Queens GA.
//!
//! Measures fitness evaluation, a single generation, and short capped runs
//! for both selection strategies.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_nqueens::ga::{collisions, evolve_generation, random_population, GaConfig, GaRunner};
use u_nqueens::random::create_rng;

fn bench_collisions(c: &mut Criterion) {
    let mut group = c.benchmark_group("collisions");

    for &n in &[8usize, 16, 32] {
        let mut rng = create_rng(42);
        let boards = random_population(n, 64, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(n), &boards, |b, boards| {
            b.iter(|| {
                let total: usize = boards.iter().map(collisions).sum();
                black_box(total)
            })
        });
    }
    group.finish();
}

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");
    group.sample_size(20);

    for (name, config) in [
        ("roulette", GaConfig::baseline(8)),
        ("tournament", GaConfig::tournament(8, 2)),
    ] {
        let mut rng = create_rng(42);
        let population = random_population(config.board_size, config.population_size, &mut rng);
        group.bench_with_input(
            BenchmarkId::new(name, config.population_size),
            &(population, config),
            |b, (pop, cfg)| {
                b.iter(|| {
                    let step = evolve_generation(black_box(pop), 0, cfg, &mut rng);
                    black_box(step)
                })
            },
        );
    }
    group.finish();
}

fn bench_capped_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_8_queens");
    group.sample_size(10);

    for (name, config) in [
        ("roulette", GaConfig::baseline(8).with_crossover_point(3)),
        ("tournament", GaConfig::tournament(8, 2).with_crossover_point(3)),
    ] {
        let config = config.with_max_generations(50).with_seed(7);
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, cfg| {
            b.iter(|| {
                let result = GaRunner::run(black_box(cfg));
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_collisions, bench_generation, bench_capped_run);
criterion_main!(benches);
