use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};
use frac_ngin::{Fractal, FractalConfig, Instance, SagMode};

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_update");
    for depth in [4, 6, 8] {
        for (name, sag) in [("rigid", SagMode::Rigid), ("sag", SagMode::branching())] {
            let config = FractalConfig {
                depth,
                sag,
                ..FractalConfig::default()
            };
            let mut fractal = Fractal::new(config).unwrap();
            let root = Instance::new();
            let dt = Duration::from_millis(16);
            group.bench_function(format!("depth_{depth}_{name}"), |b| {
                b.iter(|| fractal.update(dt, &root));
            });
        }
    }
    group.finish();
}

fn bench_hash_grid(c: &mut Criterion) {
    c.bench_function("hash_grid_512", |b| {
        b.iter(|| frac_ngin::hash::hash_grid(0, 512));
    });
}

criterion_group!(benches, bench_update, bench_hash_grid);
criterion_main!(benches);
