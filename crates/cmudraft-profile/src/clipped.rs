//! Sectioned block faces: rectangles clipped by a break line.

use cmudraft_math::Tolerance;

use crate::breakline::break_line;
use crate::types::{Point2D, Profile, Vertex};
use crate::ProfileError;

/// Fraction of the block height where the section break is centered,
/// measured from the block bottom. Drafting convention from the
/// source drawings.
pub const BREAK_HEIGHT_FRACTION: f64 = 0.35;

/// Gap between the two halves of a sectioned wall, as a fraction of
/// block height. Each clipped face backs off by half of this.
pub const SECTION_GAP_FRACTION: f64 = 0.10;

/// Build a block face whose top edge is replaced by a break line.
///
/// The straight bottom edge sits at `mortar_offset` above `origin`;
/// the break line spans the full width at
/// `(0.35 − gap/2) · height` above the block bottom, running right to
/// left so the profile stays counter-clockwise. The break-line
/// vertices are spliced in place of the straight top edge and the
/// profile is closed.
///
/// # Errors
///
/// Returns [`ProfileError::NotClosed`] if the assembled ring fails
/// the closure check. This guards against edits to the break-line
/// geometry leaving a gap; it cannot fire for the current
/// construction.
pub fn clipped_top(
    origin: Point2D,
    width: f64,
    height: f64,
    mortar_offset: f64,
    stroke_width: f64,
) -> Result<Profile, ProfileError> {
    let base = origin.y + mortar_offset;
    let y_break = base + (BREAK_HEIGHT_FRACTION - SECTION_GAP_FRACTION / 2.0) * height;

    let mut vertices = vec![
        Vertex::line(Point2D::new(origin.x, base), stroke_width),
        Vertex::line(Point2D::new(origin.x + width, base), stroke_width),
    ];
    let cut = break_line(
        Point2D::new(origin.x + width, y_break),
        Point2D::new(origin.x, y_break),
        stroke_width,
    );
    vertices.extend(cut.vertices);

    let profile = Profile::closed(vertices)?;
    profile.ensure_closed(&Tolerance::DEFAULT)?;
    Ok(profile)
}

/// Build a block face whose bottom edge is replaced by a break line.
///
/// Mirror of [`clipped_top`]: the break line runs left to right at
/// `(0.35 + gap/2) · height` above the block bottom and the straight
/// top edge survives.
///
/// # Errors
///
/// Returns [`ProfileError::NotClosed`] if the assembled ring fails
/// the closure check.
pub fn clipped_bottom(
    origin: Point2D,
    width: f64,
    height: f64,
    mortar_offset: f64,
    stroke_width: f64,
) -> Result<Profile, ProfileError> {
    let base = origin.y + mortar_offset;
    let y_break = base + (BREAK_HEIGHT_FRACTION + SECTION_GAP_FRACTION / 2.0) * height;

    let cut = break_line(
        Point2D::new(origin.x, y_break),
        Point2D::new(origin.x + width, y_break),
        stroke_width,
    );
    let mut vertices = cut.vertices;
    vertices.push(Vertex::line(
        Point2D::new(origin.x + width, base + height),
        stroke_width,
    ));
    vertices.push(Vertex::line(
        Point2D::new(origin.x, base + height),
        stroke_width,
    ));

    let profile = Profile::closed(vertices)?;
    profile.ensure_closed(&Tolerance::DEFAULT)?;
    Ok(profile)
}
