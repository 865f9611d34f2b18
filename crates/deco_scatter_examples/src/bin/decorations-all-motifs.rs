use deco_scatter::prelude::*;
use deco_scatter_examples::{init_tracing, write_svg};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // One overlay per motif family, straight from the presets.
    for ty in DecorationType::ALL {
        let markup = decoration_document(ty);
        if markup.is_empty() {
            continue;
        }
        write_svg(format!("decorations-{}.svg", ty.name()), &markup)?;
    }

    Ok(())
}
