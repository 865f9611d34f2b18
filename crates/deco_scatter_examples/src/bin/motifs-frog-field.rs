use deco_scatter::prelude::*;
use deco_scatter::shape::motif;
use deco_scatter_examples::{init_tracing, write_svg};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // A denser, calmer frog field than the preset: more cells, smaller
    // motifs, and a gentle rotation spread instead of the full 360 degrees.
    let config = GridConfig::new(7, 7)
        .with_scale(2.0, 0.4)
        .with_jitter(0.4)
        .with_rotation_var(40.0);

    let primitives = try_generate_pattern(&config, motif::frog)?;
    let markup = document(DecorationType::Frogs, &primitives);
    write_svg("motifs-frog-field.svg", &markup)?;

    Ok(())
}
