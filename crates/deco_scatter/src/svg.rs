//! SVG overlay serialization for the compositing surface.
//!
//! The banner surface composites one decoration set as an inline SVG overlay
//! and recolors it through CSS `currentColor`; this module writes that markup.
//! Alpha is clamped to [0, 1] here: the generator reports the raw falloff
//! value, which exceeds 1.0 for overscan cells past the right canvas edge.
use std::fmt::{self, Write as _};
use std::io;

use crate::error::Result;
use crate::pattern::CANVAS_EXTENT;
use crate::shape::{
    render_decoration, DecorationType, Element, Geometry, LineCap, LineJoin, Paint, Primitive,
    StrokeStyle, Transform,
};

/// Options for the overlay document.
#[derive(Debug, Clone)]
pub struct SvgOptions {
    /// Stroke and fill paint. `currentColor` by default so the surface can
    /// recolor the overlay via CSS.
    pub color: String,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            color: "currentColor".to_owned(),
        }
    }
}

impl SvgOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the stroke/fill paint.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

/// Renders one family's full decoration set and serializes it.
///
/// Empty sets (the `None` family included) yield an empty string: there is
/// nothing for the surface to composite.
pub fn decoration_document(ty: DecorationType) -> String {
    document(ty, &render_decoration(ty))
}

/// Serializes primitives into an overlay document with default options.
pub fn document(ty: DecorationType, primitives: &[Primitive]) -> String {
    document_with(ty, primitives, &SvgOptions::default())
}

/// Serializes primitives into an overlay document.
pub fn document_with(ty: DecorationType, primitives: &[Primitive], options: &SvgOptions) -> String {
    if primitives.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    render_into(&mut out, ty, primitives, options).expect("writing to a String cannot fail");
    out
}

/// Writes one family's decoration overlay to an IO sink (e.g. a file).
pub fn write_decoration_to(writer: &mut dyn io::Write, ty: DecorationType) -> Result<()> {
    writer.write_all(decoration_document(ty).as_bytes())?;
    Ok(())
}

/// The `preserveAspectRatio` the surface uses when compositing: curves are
/// allowed to stretch with the banner, everything else crops.
fn aspect_for(ty: DecorationType) -> &'static str {
    match ty {
        DecorationType::Curves => "none",
        _ => "xMidYMid slice",
    }
}

fn render_into(
    out: &mut String,
    ty: DecorationType,
    primitives: &[Primitive],
    options: &SvgOptions,
) -> fmt::Result {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" preserveAspectRatio="{}">"#,
        CANVAS_EXTENT.x,
        CANVAS_EXTENT.y,
        aspect_for(ty)
    )?;

    for primitive in primitives {
        let mut placement_attrs = String::new();
        if let Some(transform) = &primitive.transform {
            write!(placement_attrs, r#" transform="{}""#, transform_value(transform))?;
        }
        write!(
            placement_attrs,
            r#" opacity="{}""#,
            primitive.opacity.clamp(0.0, 1.0)
        )?;

        match primitive.elements.as_slice() {
            [element] => {
                write!(out, "  ")?;
                write_element(out, element, &options.color, &placement_attrs)?;
                writeln!(out)?;
            }
            elements => {
                writeln!(out, "  <g{placement_attrs}>")?;
                for element in elements {
                    write!(out, "    ")?;
                    write_element(out, element, &options.color, "")?;
                    writeln!(out)?;
                }
                writeln!(out, "  </g>")?;
            }
        }
    }

    write!(out, "</svg>")
}

fn transform_value(transform: &Transform) -> String {
    format!(
        "translate({},{}) rotate({}) scale({})",
        transform.translate.x, transform.translate.y, transform.rotate, transform.scale
    )
}

fn write_element(out: &mut String, element: &Element, color: &str, extra: &str) -> fmt::Result {
    match (&element.geometry, &element.paint) {
        (Geometry::Circle { center, radius }, Paint::Stroke(stroke)) => {
            write!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}" fill="none" stroke="{}" stroke-width="{}""#,
                center.x, center.y, radius, color, stroke.width
            )?;
            write_stroke_decorations(out, stroke)?;
            write!(out, "{extra}/>")
        }
        (Geometry::Circle { center, radius }, Paint::Fill) => {
            write!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}"{}/>"#,
                center.x, center.y, radius, color, extra
            )
        }
        (Geometry::Path(path), Paint::Stroke(stroke)) => {
            write!(
                out,
                r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}""#,
                path, color, stroke.width
            )?;
            write_stroke_decorations(out, stroke)?;
            write!(out, "{extra}/>")
        }
        (Geometry::Path(path), Paint::Fill) => {
            write!(out, r#"<path d="{}" fill="{}"{}/>"#, path, color, extra)
        }
    }
}

fn write_stroke_decorations(out: &mut String, stroke: &StrokeStyle) -> fmt::Result {
    if stroke.line_cap == LineCap::Round {
        write!(out, r#" stroke-linecap="round""#)?;
    }
    if stroke.line_join == LineJoin::Round {
        write!(out, r#" stroke-linejoin="round""#)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sets_serialize_to_nothing() {
        assert_eq!(decoration_document(DecorationType::None), "");
        assert_eq!(document(DecorationType::Circles, &[]), "");
    }

    #[test]
    fn circles_document_has_one_untransformed_circle_per_placement() {
        let doc = decoration_document(DecorationType::Circles);
        assert!(doc.starts_with(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 200 200" preserveAspectRatio="xMidYMid slice">"#
        ));
        assert!(doc.ends_with("</svg>"));
        assert_eq!(doc.matches("<circle ").count(), 61);
        assert!(doc.contains(r#"stroke="currentColor""#));
        assert!(!doc.contains("transform="));
    }

    #[test]
    fn curves_document_stretches_and_rounds_its_caps() {
        let doc = decoration_document(DecorationType::Curves);
        assert!(doc.contains(r#"preserveAspectRatio="none""#));
        assert!(doc.contains("<path "));
        assert!(doc.contains(r#"stroke-linecap="round""#));
        assert!(doc.contains(r#" transform="translate("#));
    }

    #[test]
    fn hexagons_round_joins_but_not_caps() {
        let doc = decoration_document(DecorationType::Hexagons);
        assert!(doc.contains(r#"stroke-linejoin="round""#));
        assert!(!doc.contains(r#"stroke-linecap"#));
    }

    #[test]
    fn alpha_is_clamped_to_one() {
        // The overscan columns past the right canvas edge carry raw falloff
        // values above 1; serialization must clamp them.
        let doc = decoration_document(DecorationType::Circles);
        assert!(doc.contains(r#"opacity="1""#));
        assert!(!doc.contains(r#"opacity="1."#));
        assert!(!doc.contains(r#"opacity="2"#));
    }

    #[test]
    fn frogs_serialize_as_groups_with_filled_eyes() {
        let doc = decoration_document(DecorationType::Frogs);
        assert_eq!(doc.matches("<g ").count(), 61);
        assert_eq!(doc.matches("</g>").count(), 61);
        assert!(doc.contains(r#"fill="currentColor""#));
        assert_eq!(doc.matches(r#"fill="currentColor""#).count(), 61 * 2);
    }

    #[test]
    fn custom_color_overrides_current_color() {
        let primitives = render_decoration(DecorationType::Triangles);
        let options = SvgOptions::new().with_color("#aabbcc");
        let doc = document_with(DecorationType::Triangles, &primitives, &options);
        assert!(doc.contains(r##"stroke="#aabbcc""##));
        assert!(!doc.contains("currentColor"));
    }

    #[test]
    fn write_decoration_to_streams_the_same_markup() {
        let mut bytes: Vec<u8> = Vec::new();
        write_decoration_to(&mut bytes, DecorationType::Leaves).expect("in-memory write");
        let streamed = String::from_utf8(bytes).expect("utf8 markup");
        assert_eq!(streamed, decoration_document(DecorationType::Leaves));
    }
}
