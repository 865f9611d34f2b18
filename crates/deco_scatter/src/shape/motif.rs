//! Per-family motif templates.
//!
//! Each template owns a fixed outline in motif-local coordinates; the
//! placement supplies the translate/rotate/scale transform and alpha. Stroke
//! widths scale inversely with the motif scale so larger shapes keep the same
//! apparent outline weight.
use glam::DVec2;

use crate::pattern::Placement;
use crate::shape::path::{PathCommand, PathData};
use crate::shape::primitive::{Element, Geometry, Paint, Primitive, StrokeStyle, Transform};
use crate::shape::DecorationType;

/// Circle motif radius before scaling.
const CIRCLE_RADIUS: f64 = 12.0;
/// Frog eye dot radius (motif-local).
const EYE_RADIUS: f64 = 0.5;

/// Maps a motif family to its per-placement shape function; `None` for the
/// empty decoration.
pub fn shape_fn(ty: DecorationType) -> Option<fn(&Placement) -> Primitive> {
    match ty {
        DecorationType::None => None,
        DecorationType::Circles => Some(circle),
        DecorationType::Triangles => Some(triangle),
        DecorationType::Hexagons => Some(hexagon),
        DecorationType::Curves => Some(curve),
        DecorationType::Leaves => Some(leaf),
        DecorationType::Frogs => Some(frog),
    }
}

fn stroke_for(ty: DecorationType, placement: &Placement) -> StrokeStyle {
    StrokeStyle::new(ty.base_stroke_width() / placement.scale)
}

fn outlined(path: PathData, stroke: StrokeStyle, placement: &Placement) -> Primitive {
    Primitive {
        elements: vec![Element {
            geometry: Geometry::Path(path),
            paint: Paint::Stroke(stroke),
        }],
        transform: Some(Transform::for_placement(placement)),
        opacity: placement.opacity,
        index: placement.index,
    }
}

/// Rotation-invariant, so it skips the transform entirely: the circle is
/// placed in canvas coordinates with its radius pre-scaled.
pub fn circle(placement: &Placement) -> Primitive {
    Primitive {
        elements: vec![Element {
            geometry: Geometry::Circle {
                center: placement.position,
                radius: CIRCLE_RADIUS * placement.scale,
            },
            paint: Paint::Stroke(stroke_for(DecorationType::Circles, placement)),
        }],
        transform: None,
        opacity: placement.opacity,
        index: placement.index,
    }
}

pub fn triangle(placement: &Placement) -> Primitive {
    let path = PathData::new(vec![
        PathCommand::MoveTo(DVec2::new(0.0, -15.0)),
        PathCommand::LineTo(DVec2::new(13.0, 10.0)),
        PathCommand::LineTo(DVec2::new(-13.0, 10.0)),
        PathCommand::Close,
    ]);
    let stroke = stroke_for(DecorationType::Triangles, placement)
        .with_round_cap()
        .with_round_join();
    outlined(path, stroke, placement)
}

pub fn hexagon(placement: &Placement) -> Primitive {
    let path = PathData::new(vec![
        PathCommand::MoveTo(DVec2::new(-10.0, 0.0)),
        PathCommand::LineTo(DVec2::new(-5.0, -8.66)),
        PathCommand::LineTo(DVec2::new(5.0, -8.66)),
        PathCommand::LineTo(DVec2::new(10.0, 0.0)),
        PathCommand::LineTo(DVec2::new(5.0, 8.66)),
        PathCommand::LineTo(DVec2::new(-5.0, 8.66)),
        PathCommand::Close,
    ]);
    let stroke = stroke_for(DecorationType::Hexagons, placement).with_round_join();
    outlined(path, stroke, placement)
}

pub fn curve(placement: &Placement) -> Primitive {
    let path = PathData::new(vec![
        PathCommand::MoveTo(DVec2::new(-30.0, 0.0)),
        PathCommand::CurveTo {
            ctrl1: DVec2::new(-15.0, -25.0),
            ctrl2: DVec2::new(15.0, 25.0),
            to: DVec2::new(30.0, 0.0),
        },
    ]);
    let stroke = stroke_for(DecorationType::Curves, placement).with_round_cap();
    outlined(path, stroke, placement)
}

/// Bezier leaf blade plus a center stem.
pub fn leaf(placement: &Placement) -> Primitive {
    let path = PathData::new(vec![
        PathCommand::MoveTo(DVec2::new(0.0, 12.0)),
        PathCommand::QuadTo {
            ctrl: DVec2::new(-8.0, 0.0),
            to: DVec2::new(0.0, -12.0),
        },
        PathCommand::QuadTo {
            ctrl: DVec2::new(8.0, 0.0),
            to: DVec2::new(0.0, 12.0),
        },
        PathCommand::MoveTo(DVec2::new(0.0, -12.0)),
        PathCommand::LineTo(DVec2::new(0.0, 12.0)),
    ]);
    let stroke = stroke_for(DecorationType::Leaves, placement)
        .with_round_cap()
        .with_round_join();
    outlined(path, stroke, placement)
}

/// Compound motif: arc head outline plus two filled eye dots.
pub fn frog(placement: &Placement) -> Primitive {
    let head = PathData::new(vec![
        PathCommand::MoveTo(DVec2::new(-6.0, -2.0)),
        PathCommand::Arc {
            radii: DVec2::new(2.0, 2.0),
            x_rotation: 0.0,
            large_arc: true,
            sweep: true,
            to: DVec2::new(-2.0, -2.0),
        },
        PathCommand::LineTo(DVec2::new(2.0, -2.0)),
        PathCommand::Arc {
            radii: DVec2::new(2.0, 2.0),
            x_rotation: 0.0,
            large_arc: true,
            sweep: true,
            to: DVec2::new(6.0, -2.0),
        },
        PathCommand::Arc {
            radii: DVec2::new(6.0, 5.0),
            x_rotation: 0.0,
            large_arc: false,
            sweep: true,
            to: DVec2::new(-6.0, -2.0),
        },
    ]);
    let stroke = stroke_for(DecorationType::Frogs, placement)
        .with_round_cap()
        .with_round_join();

    let eye = |x: f64| Element {
        geometry: Geometry::Circle {
            center: DVec2::new(x, -3.0),
            radius: EYE_RADIUS,
        },
        paint: Paint::Fill,
    };

    Primitive {
        elements: vec![
            Element {
                geometry: Geometry::Path(head),
                paint: Paint::Stroke(stroke),
            },
            eye(-4.0),
            eye(4.0),
        ],
        transform: Some(Transform::for_placement(placement)),
        opacity: placement.opacity,
        index: placement.index,
    }
}
