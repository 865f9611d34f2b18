//! Typed path data for motif outlines.
//!
//! Commands use motif-local coordinates; [`PathData`] renders to an SVG `d`
//! attribute string with shortest round-trip number formatting.
use std::fmt;

use glam::DVec2;

/// One SVG-style path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath.
    MoveTo(DVec2),
    LineTo(DVec2),
    /// Quadratic bezier with one control point.
    QuadTo { ctrl: DVec2, to: DVec2 },
    /// Cubic bezier with two control points.
    CurveTo { ctrl1: DVec2, ctrl2: DVec2, to: DVec2 },
    /// Elliptical arc.
    Arc {
        radii: DVec2,
        /// Rotation of the ellipse's x axis in degrees.
        x_rotation: f64,
        large_arc: bool,
        sweep: bool,
        to: DVec2,
    },
    /// Close the current subpath.
    Close,
}

/// An ordered list of path commands forming one outline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathData(pub Vec<PathCommand>);

impl PathData {
    pub fn new(commands: Vec<PathCommand>) -> Self {
        Self(commands)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Render as an SVG `d` attribute string.
    pub fn to_svg(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match command {
                PathCommand::MoveTo(p) => write!(f, "M{} {}", p.x, p.y)?,
                PathCommand::LineTo(p) => write!(f, "L{} {}", p.x, p.y)?,
                PathCommand::QuadTo { ctrl, to } => {
                    write!(f, "Q{} {} {} {}", ctrl.x, ctrl.y, to.x, to.y)?
                }
                PathCommand::CurveTo { ctrl1, ctrl2, to } => write!(
                    f,
                    "C{} {} {} {} {} {}",
                    ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
                )?,
                PathCommand::Arc {
                    radii,
                    x_rotation,
                    large_arc,
                    sweep,
                    to,
                } => write!(
                    f,
                    "A{} {} {} {} {} {} {}",
                    radii.x,
                    radii.y,
                    x_rotation,
                    u8::from(*large_arc),
                    u8::from(*sweep),
                    to.x,
                    to.y
                )?,
                PathCommand::Close => write!(f, "Z")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polygon_renders_in_svg_path_syntax() {
        let path = PathData::new(vec![
            PathCommand::MoveTo(DVec2::new(0.0, -15.0)),
            PathCommand::LineTo(DVec2::new(13.0, 10.0)),
            PathCommand::LineTo(DVec2::new(-13.0, 10.0)),
            PathCommand::Close,
        ]);
        assert_eq!(path.to_svg(), "M0 -15 L13 10 L-13 10 Z");
    }

    #[test]
    fn curves_and_quads_render_control_points() {
        let curve = PathData::new(vec![
            PathCommand::MoveTo(DVec2::new(-30.0, 0.0)),
            PathCommand::CurveTo {
                ctrl1: DVec2::new(-15.0, -25.0),
                ctrl2: DVec2::new(15.0, 25.0),
                to: DVec2::new(30.0, 0.0),
            },
        ]);
        assert_eq!(curve.to_svg(), "M-30 0 C-15 -25 15 25 30 0");

        let quad = PathData::new(vec![
            PathCommand::MoveTo(DVec2::new(0.0, 12.0)),
            PathCommand::QuadTo {
                ctrl: DVec2::new(-8.0, 0.0),
                to: DVec2::new(0.0, -12.0),
            },
        ]);
        assert_eq!(quad.to_svg(), "M0 12 Q-8 0 0 -12");
    }

    #[test]
    fn arc_flags_render_as_zero_or_one() {
        let arc = PathData::new(vec![PathCommand::Arc {
            radii: DVec2::new(2.0, 2.0),
            x_rotation: 0.0,
            large_arc: true,
            sweep: false,
            to: DVec2::new(-2.0, -2.0),
        }]);
        assert_eq!(arc.to_svg(), "A2 2 0 1 0 -2 -2");
    }

    #[test]
    fn fractional_coordinates_keep_shortest_form() {
        let path = PathData::new(vec![
            PathCommand::MoveTo(DVec2::new(-5.0, -8.66)),
            PathCommand::LineTo(DVec2::new(5.0, 8.66)),
        ]);
        assert_eq!(path.to_svg(), "M-5 -8.66 L5 8.66");
    }

    #[test]
    fn empty_path_renders_to_nothing() {
        assert!(PathData::default().is_empty());
        assert_eq!(PathData::default().to_svg(), "");
    }
}
