use deco_scatter::prelude::*;
use deco_scatter::shape::motif;
use deco_scatter_examples::{init_tracing, write_svg};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Same hexagon field at three jitter levels:
    // 0.0 is a regular lattice, 1.0 displaces up to a full half-step.
    let ty = DecorationType::Hexagons;
    let shape = motif::shape_fn(ty).expect("hexagons have a shape");
    let preset = ty.grid_preset().expect("hexagons have a preset");

    for jitter in [0.0, 0.5, 1.0] {
        let config = preset.clone().with_jitter(jitter);
        let primitives = try_generate_pattern(&config, shape)?;
        let markup = document(ty, &primitives);
        write_svg(format!("patterns-jitter-{jitter:.1}.svg"), &markup)?;
    }

    Ok(())
}
