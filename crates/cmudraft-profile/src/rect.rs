//! Straight-edge rectangle primitive.

use crate::types::{Point2D, Profile, Vertex};

/// Build a closed rectangular profile.
///
/// Vertices sit at `(0, offset)`, `(width, offset)`,
/// `(width, offset + height)`, `(0, offset + height)` relative to
/// `origin`, wound counter-clockwise. The vertical offset is the
/// mortar thickness when drawing a block above its bed joint.
///
/// No failure conditions; callers own positivity of the dimensions.
pub fn rectangle(
    origin: Point2D,
    width: f64,
    height: f64,
    vertical_offset: f64,
    stroke_width: f64,
) -> Profile {
    let base = origin.y + vertical_offset;
    let vertices = vec![
        Vertex::line(Point2D::new(origin.x, base), stroke_width),
        Vertex::line(Point2D::new(origin.x + width, base), stroke_width),
        Vertex::line(Point2D::new(origin.x + width, base + height), stroke_width),
        Vertex::line(Point2D::new(origin.x, base + height), stroke_width),
    ];
    // Valid by construction: 4 vertices.
    Profile::closed(vertices).unwrap()
}
