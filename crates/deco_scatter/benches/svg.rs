mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use deco_scatter::shape::{render_decoration, DecorationType};
use deco_scatter::svg::document;

fn serialization_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("svg/document");

    for ty in DecorationType::ALL {
        if ty.grid_preset().is_none() {
            continue;
        }
        let primitives = render_decoration(ty);
        group.throughput(common::elements_throughput(primitives.len()));
        group.bench_with_input(BenchmarkId::from_parameter(ty.name()), &primitives, |b, prims| {
            b.iter(|| {
                let markup = document(ty, prims);
                black_box(markup.len());
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = serialization_benches
}
criterion_main!(benches);