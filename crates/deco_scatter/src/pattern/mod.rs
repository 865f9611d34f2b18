//! Seeded jitter-grid placement generation over the banner canvas.
//!
//! The generator enumerates a logical grid (plus an overscan margin so motifs
//! bleed past the crop edges), derives one deterministic seed per cell, and
//! turns each cell into a jittered, scaled, rotated [`Placement`] with a
//! left-to-right opacity falloff. Cells fainter than [`MIN_VISIBLE_OPACITY`]
//! are culled instead of emitted.
//!
//! The whole pipeline is pure: identical [`GridConfig`]s produce bit-for-bit
//! identical output across runs.
use glam::DVec2;
use tracing::debug;

use crate::error::{Error, Result};

pub mod placement;

pub use placement::Placement;

/// Logical canvas extent in banner units; all positions live in this space.
pub const CANVAS_EXTENT: DVec2 = DVec2::new(200.0, 200.0);

/// Placements fainter than this are culled, not emitted.
pub const MIN_VISIBLE_OPACITY: f64 = 0.05;

/// Canvas x where the falloff band starts; everything left of it is invisible.
const FADE_START: f64 = 10.0;
/// Width of the falloff band.
const FADE_RANGE: f64 = 180.0;

/// Overscan margin in cells: rows above/below and columns left/right of the
/// nominal grid, so the pattern has no visible seam after cropping.
const OVERSCAN_ROWS_BEFORE: i64 = 2;
const OVERSCAN_ROWS_AFTER: i64 = 2;
const OVERSCAN_COLS_BEFORE: i64 = 1;
const OVERSCAN_COLS_AFTER: i64 = 2;

/// Grid configuration for one generated decoration set.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    /// Logical grid rows over the canvas.
    pub rows: u32,
    /// Logical grid columns over the canvas.
    pub cols: u32,
    /// Base per-motif scale.
    pub scale_base: f64,
    /// Additive random scale range on top of the base.
    pub scale_var: f64,
    /// Fraction of a cell step used as maximum positional displacement, in [0, 1].
    pub jitter: f64,
    /// Maximum symmetric rotation spread in degrees.
    pub rotation_var: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 5,
            scale_base: 1.8,
            scale_var: 1.0,
            jitter: 0.6,
            rotation_var: 360.0,
        }
    }
}

impl GridConfig {
    /// Creates a new [`GridConfig`] with the specified grid dimensions.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            ..Default::default()
        }
    }

    /// Sets the base scale and additive random scale range.
    pub fn with_scale(mut self, scale_base: f64, scale_var: f64) -> Self {
        self.scale_base = scale_base;
        self.scale_var = scale_var;
        self
    }

    /// Sets the jitter fraction.
    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = jitter;
        self
    }

    /// Sets the rotation spread in degrees.
    pub fn with_rotation_var(mut self, rotation_var: f64) -> Self {
        self.rotation_var = rotation_var;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.rows < 1 {
            return Err(Error::InvalidConfig("rows must be >= 1".into()));
        }
        if self.cols < 1 {
            return Err(Error::InvalidConfig("cols must be >= 1".into()));
        }
        if !(self.scale_base > 0.0) {
            return Err(Error::InvalidConfig("scale_base must be > 0".into()));
        }
        if !(self.scale_var >= 0.0) {
            return Err(Error::InvalidConfig("scale_var must be >= 0".into()));
        }
        if !(0.0..=1.0).contains(&self.jitter) {
            return Err(Error::InvalidConfig("jitter must be in [0, 1]".into()));
        }
        if !(self.rotation_var >= 0.0) {
            return Err(Error::InvalidConfig("rotation_var must be >= 0".into()));
        }

        Ok(())
    }

    /// Cell step sizes over the canvas.
    fn step(&self) -> DVec2 {
        DVec2::new(
            CANVAS_EXTENT.x / self.cols as f64,
            CANVAS_EXTENT.y / self.rows as f64,
        )
    }
}

/// Deterministic per-cell seed; the sole entropy source of the generator.
#[inline]
pub fn cell_seed(row: i64, col: i64) -> i64 {
    row * 1337 + col * 31
}

/// Seeded pseudo-random value in [0, 1): the fractional part of `sin(seed) * 10000`.
///
/// Deliberately low-quality. Previously exported banners depend on these exact
/// values, so the formula is reproduced verbatim instead of swapping in a real
/// PRNG.
#[inline]
pub fn hash01(seed: i64) -> f64 {
    let x = (seed as f64).sin() * 10000.0;
    x - x.floor()
}

/// Left-to-right falloff: quadratic ease over the fade band.
///
/// Zero for `x <= 10`, one at `x = 190`, and unclamped above 1.0 past the
/// right canvas edge. Alpha is clamped at serialization time, not here.
#[inline]
pub fn opacity_at(x: f64) -> f64 {
    let normalized = ((x - FADE_START) / FADE_RANGE).max(0.0);
    normalized * normalized
}

/// Enumerates the jittered grid and produces every surviving placement.
///
/// Output is ordered row-major (then column-major within each row) and is
/// reproducible: the per-cell seed drives jitter, scale, and rotation, so two
/// calls with the same config return identical sequences.
///
/// The config must be valid; use [`GridConfig::validate`] or
/// [`try_generate_pattern`] for untrusted input.
pub fn generate_placements(config: &GridConfig) -> Vec<Placement> {
    debug_assert!(config.validate().is_ok(), "invalid grid configuration");

    let step = config.step();
    let rows = config.rows as i64;
    let cols = config.cols as i64;

    let visited = (rows + OVERSCAN_ROWS_BEFORE + OVERSCAN_ROWS_AFTER + 1)
        * (cols + OVERSCAN_COLS_BEFORE + OVERSCAN_COLS_AFTER + 1);
    let mut placements = Vec::with_capacity(visited as usize);
    let mut culled = 0usize;

    for r in -OVERSCAN_ROWS_BEFORE..=rows + OVERSCAN_ROWS_AFTER {
        for c in -OVERSCAN_COLS_BEFORE..=cols + OVERSCAN_COLS_AFTER {
            let seed = cell_seed(r, c);
            let base = DVec2::new(c as f64 * step.x, r as f64 * step.y);
            let displacement = DVec2::new(
                (hash01(seed) - 0.5) * step.x * config.jitter,
                (hash01(seed + 1) - 0.5) * step.y * config.jitter,
            );
            let position = base + displacement;

            let opacity = opacity_at(position.x);
            if opacity < MIN_VISIBLE_OPACITY {
                culled += 1;
                continue;
            }

            placements.push(Placement {
                position,
                opacity,
                scale: config.scale_base + hash01(seed + 2) * config.scale_var,
                rotation: (hash01(seed + 3) - 0.5) * config.rotation_var,
                index: (r * 100 + c) as i32,
            });
        }
    }

    debug!(
        "Generated {} placements ({} culled below the visibility floor).",
        placements.len(),
        culled
    );

    placements
}

/// Runs the generator and maps each surviving placement through `render`.
///
/// This is the per-shape hook used by the decoration presets; `render` sees
/// placements in emission order.
pub fn generate_pattern<T>(
    config: &GridConfig,
    mut render: impl FnMut(&Placement) -> T,
) -> Vec<T> {
    generate_placements(config).iter().map(|p| render(p)).collect()
}

/// Validating variant of [`generate_pattern`] for untrusted configs.
pub fn try_generate_pattern<T>(
    config: &GridConfig,
    render: impl FnMut(&Placement) -> T,
) -> Result<Vec<T>> {
    config.validate()?;
    Ok(generate_pattern(config, render))
}
