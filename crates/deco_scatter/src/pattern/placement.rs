//! Placement descriptors produced by the pattern generator.
use glam::DVec2;

/// One motif instance's computed position, scale, rotation, and opacity.
///
/// Positions live in canvas units and may fall outside the 200x200 crop:
/// overscan cells bleed past the edges so the composited pattern has no seam.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// Position in canvas units.
    pub position: DVec2,
    /// Alpha from the falloff curve. Exceeds 1.0 past the right canvas edge;
    /// the serialization layer clamps it.
    pub opacity: f64,
    /// Uniform scale factor.
    pub scale: f64,
    /// Rotation in degrees.
    pub rotation: f64,
    /// Stable identity `row * 100 + col`, unique within one generated set.
    pub index: i32,
}
