//! Shared helpers for the executable examples.
use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::info;

/// Installs a plain stdout tracing subscriber for the examples.
pub fn init_tracing() {
    tracing_subscriber::fmt().with_target(false).init();
}

/// Writes overlay markup to disk, logging the destination.
pub fn write_svg(path: impl AsRef<Path>, markup: &str) -> anyhow::Result<()> {
    let path = path.as_ref();
    fs::write(path, markup).with_context(|| format!("writing {}", path.display()))?;
    info!("Wrote {}.", path.display());
    Ok(())
}
