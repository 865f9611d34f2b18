mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use deco_scatter::pattern::{generate_placements, GridConfig};
use deco_scatter::shape::DecorationType;

const JITTER_LEVELS: [f64; 3] = [0.0, 0.5, 1.0];
const GRID_SIZES: [u32; 4] = [5, 10, 20, 40];

fn preset_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern/presets");

    for ty in DecorationType::ALL {
        let Some(config) = ty.grid_preset() else {
            continue;
        };
        let expected = generate_placements(&config).len();
        group.throughput(common::elements_throughput(expected));
        group.bench_with_input(BenchmarkId::from_parameter(ty.name()), &config, |b, cfg| {
            b.iter(|| {
                let placements = generate_placements(cfg);
                black_box(placements.len());
            });
        });
    }

    group.finish();
}

fn grid_scaling_benches(c: &mut Criterion) {
    for &jitter in &JITTER_LEVELS {
        let mut group = c.benchmark_group(format!("pattern/grid/jitter_{jitter:.2}"));

        for &size in &GRID_SIZES {
            let config = GridConfig::new(size, size).with_jitter(jitter);
            let expected = generate_placements(&config).len();
            group.throughput(common::elements_throughput(expected));
            group.bench_with_input(BenchmarkId::from_parameter(size), &config, |b, cfg| {
                b.iter(|| {
                    let placements = generate_placements(cfg);
                    black_box(placements.len());
                });
            });
        }

        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = preset_benches, grid_scaling_benches
}
criterion_main!(benches);
