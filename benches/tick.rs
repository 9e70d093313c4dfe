//! Benchmarks for the per-frame engine work.
//!
//! Run with: `cargo bench`

use chargefield::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn populated(count: usize) -> Simulation {
    let mut sim = Simulation::new().with_seed(1);
    let mut rng = SmallRng::seed_from_u64(count as u64);
    for _ in 0..count {
        sim.spawn_particle(
            rng.gen_range(50.0..750.0),
            rng.gen_range(50.0..550.0),
            ChargeChoice::Random,
        );
    }
    sim
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    for count in [10, 50, 200] {
        group.bench_with_input(BenchmarkId::new("particles", count), &count, |b, &count| {
            let mut sim = populated(count);
            b.iter(|| sim.tick())
        });
    }

    group.finish();
}

fn bench_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("field");

    for count in [2, 10, 50] {
        let sim = populated(count);
        group.bench_with_input(BenchmarkId::new("grid", count), &sim, |b, sim| {
            b.iter(|| black_box(sim.field_grid()))
        });
        group.bench_with_input(BenchmarkId::new("lines", count), &sim, |b, sim| {
            b.iter(|| black_box(sim.field_lines()))
        });
    }

    group.bench_function("single_sample", |b| {
        let sim = populated(20);
        b.iter(|| black_box(sim.sample_field(black_box(400.0), black_box(300.0))))
    });

    group.finish();
}

criterion_group!(benches, bench_tick, bench_field);
criterion_main!(benches);
