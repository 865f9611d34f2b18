#![forbid(unsafe_code)]
//! deco_scatter: Deterministic decoration-motif scattering for banner artwork.
//!
//! Modules:
//! - pattern: seeded jitter-grid placement generation over the banner canvas
//! - shape: decoration motif families and their drawable primitives
//! - svg: overlay markup serialization for the compositing surface
//!
//! For examples and docs, see README and docs.rs.
pub mod error;
pub mod pattern;
pub mod shape;
pub mod svg;

/// Convenient re-exports for common types. Import with `use deco_scatter::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::pattern::{
        cell_seed, generate_pattern, generate_placements, hash01, opacity_at,
        try_generate_pattern, GridConfig, Placement, CANVAS_EXTENT, MIN_VISIBLE_OPACITY,
    };
    pub use crate::shape::{
        render_decoration, DecorationType, Element, Geometry, LineCap, LineJoin, Paint,
        PathCommand, PathData, Primitive, StrokeStyle, Transform,
    };
    pub use crate::svg::{
        decoration_document, document, document_with, write_decoration_to, SvgOptions,
    };
}
