use deco_scatter::prelude::*;
use deco_scatter::shape::motif;
use deco_scatter_examples::{init_tracing, write_svg};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // A calm circle field: no jitter and no scale variance, so the only thing
    // varying across the canvas is the left-to-right falloff itself.
    let config = GridConfig::new(6, 8).with_scale(1.2, 0.0).with_jitter(0.0);
    let placements = generate_placements(&config);

    let brightest = placements.iter().map(|p| p.opacity).fold(0.0, f64::max);
    let faintest = placements.iter().map(|p| p.opacity).fold(f64::INFINITY, f64::min);
    info!(
        "{} placements survive the {} floor (alpha {:.3} to {:.3}).",
        placements.len(),
        MIN_VISIBLE_OPACITY,
        faintest,
        brightest
    );

    let primitives = generate_pattern(&config, motif::circle);
    let markup = document(DecorationType::Circles, &primitives);
    write_svg("patterns-opacity-falloff.svg", &markup)?;

    Ok(())
}
