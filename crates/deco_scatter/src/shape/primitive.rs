//! Drawable primitive descriptions handed to the compositing surface.
use glam::DVec2;

use crate::pattern::Placement;
use crate::shape::path::PathData;

/// Stroke line cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}

/// Stroke line join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
}

/// Outline style. The width is final, after inverse scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub width: f64,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
}

impl StrokeStyle {
    pub fn new(width: f64) -> Self {
        Self {
            width,
            line_cap: LineCap::default(),
            line_join: LineJoin::default(),
        }
    }

    pub fn with_round_cap(mut self) -> Self {
        self.line_cap = LineCap::Round;
        self
    }

    pub fn with_round_join(mut self) -> Self {
        self.line_join = LineJoin::Round;
        self
    }
}

/// Shape geometry. Coordinates are motif-local when the owning primitive has
/// a transform, canvas-absolute otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Circle { center: DVec2, radius: f64 },
    Path(PathData),
}

/// Paint applied to a geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    /// Outline only.
    Stroke(StrokeStyle),
    /// Solid fill (the frog eye dots).
    Fill,
}

/// One drawable element: a geometry plus its paint.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub geometry: Geometry,
    pub paint: Paint,
}

/// Local transform, applied translate -> rotate -> scale so rotation and
/// scale stay local to the motif's own origin, not the canvas origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate: DVec2,
    /// Degrees.
    pub rotate: f64,
    /// Uniform scale factor.
    pub scale: f64,
}

impl Transform {
    /// Transform for a placement: its position, rotation, and scale.
    pub fn for_placement(placement: &Placement) -> Self {
        Self {
            translate: placement.position,
            rotate: placement.rotation,
            scale: placement.scale,
        }
    }
}

/// A positioned motif instance ready for compositing.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    /// Elements drawn in order; a single outline for most motifs.
    pub elements: Vec<Element>,
    /// Absent for rotation-invariant motifs placed in canvas coordinates.
    pub transform: Option<Transform>,
    /// Raw falloff alpha; may exceed 1.0, clamped at serialization.
    pub opacity: f64,
    /// Stable rendering key from the placement.
    pub index: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_builders_opt_into_round_caps_and_joins() {
        let stroke = StrokeStyle::new(0.6);
        assert_eq!(stroke.line_cap, LineCap::Butt);
        assert_eq!(stroke.line_join, LineJoin::Miter);

        let rounded = StrokeStyle::new(0.6).with_round_cap().with_round_join();
        assert_eq!(rounded.line_cap, LineCap::Round);
        assert_eq!(rounded.line_join, LineJoin::Round);
        assert_eq!(rounded.width, 0.6);
    }

    #[test]
    fn transform_copies_placement_fields() {
        let placement = Placement {
            position: DVec2::new(40.0, -12.5),
            opacity: 0.5,
            scale: 2.5,
            rotation: 120.0,
            index: 203,
        };
        let transform = Transform::for_placement(&placement);
        assert_eq!(transform.translate, DVec2::new(40.0, -12.5));
        assert_eq!(transform.rotate, 120.0);
        assert_eq!(transform.scale, 2.5);
    }
}
