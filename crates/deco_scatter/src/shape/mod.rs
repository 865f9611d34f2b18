//! Decoration motif families and their drawable primitives.
//!
//! [`DecorationType`] is the closed set of motif families a banner can carry.
//! Each non-empty family owns a grid preset, a base stroke width, and one
//! shape template in [`motif`]; [`render_decoration`] ties the three together.
use tracing::warn;

use crate::pattern::GridConfig;

pub mod motif;
pub mod path;
pub mod primitive;

pub use path::{PathCommand, PathData};
pub use primitive::{Element, Geometry, LineCap, LineJoin, Paint, Primitive, StrokeStyle, Transform};

/// The closed set of decoration motif families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DecorationType {
    /// No decoration: the generator is never invoked.
    #[default]
    None,
    Circles,
    Triangles,
    Hexagons,
    Curves,
    Leaves,
    Frogs,
}

impl DecorationType {
    /// Every family, `None` first.
    pub const ALL: [DecorationType; 7] = [
        DecorationType::None,
        DecorationType::Circles,
        DecorationType::Triangles,
        DecorationType::Hexagons,
        DecorationType::Curves,
        DecorationType::Leaves,
        DecorationType::Frogs,
    ];

    /// Parses a decoration name. Unrecognized input degrades to `None`
    /// (no decoration) instead of erroring.
    pub fn parse(name: &str) -> Self {
        match name {
            "none" => Self::None,
            "circles" => Self::Circles,
            "triangles" => Self::Triangles,
            "hexagons" => Self::Hexagons,
            "curves" => Self::Curves,
            "leaves" => Self::Leaves,
            "frogs" => Self::Frogs,
            other => {
                warn!("Unknown decoration type '{other}'; using no decoration.");
                Self::None
            }
        }
    }

    /// Short lowercase name, the inverse of [`DecorationType::parse`].
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Circles => "circles",
            Self::Triangles => "triangles",
            Self::Hexagons => "hexagons",
            Self::Curves => "curves",
            Self::Leaves => "leaves",
            Self::Frogs => "frogs",
        }
    }

    /// Grid preset for this family; `None` for the empty decoration.
    ///
    /// Presets only override the defaults they need: every family keeps the
    /// default 360 degree rotation spread, and only curves widen the jitter.
    pub fn grid_preset(self) -> Option<GridConfig> {
        let preset = match self {
            Self::None => return None,
            Self::Circles => GridConfig::new(5, 5).with_scale(1.5, 1.0),
            Self::Triangles => GridConfig::new(4, 5).with_scale(1.5, 1.2),
            Self::Hexagons => GridConfig::new(5, 5).with_scale(2.0, 0.8),
            Self::Curves => GridConfig::new(5, 6).with_scale(2.0, 1.0).with_jitter(0.8),
            Self::Leaves => GridConfig::new(5, 6).with_scale(1.3, 0.8),
            Self::Frogs => GridConfig::new(5, 5).with_scale(3.5, 0.5),
        };
        Some(preset)
    }

    /// Base outline width before inverse scaling; zero for the empty decoration.
    pub fn base_stroke_width(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Circles | Self::Frogs => 1.2,
            Self::Triangles | Self::Hexagons | Self::Leaves => 0.6,
            Self::Curves => 0.8,
        }
    }
}

/// Renders the full decoration set for one family using its grid preset.
///
/// `None` yields an empty sequence without invoking the generator, and since
/// unrecognized names parse to `None`, unknown input degrades to the same
/// empty output rather than an error.
pub fn render_decoration(ty: DecorationType) -> Vec<Primitive> {
    match (ty.grid_preset(), motif::shape_fn(ty)) {
        (Some(config), Some(shape)) => crate::pattern::generate_pattern(&config, shape),
        _ => Vec::new(),
    }
}
