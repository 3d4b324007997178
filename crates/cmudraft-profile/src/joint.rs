//! Rounded mortar-joint capsules.

use cmudraft_math::{PlaneFrame, Vec2};

use crate::types::{ArcSpec, Point2D, Profile, Vertex};
use crate::ProfileError;

/// Semicircular cap replacing the straight edge `start → end`.
///
/// Center is the edge midpoint and the radius half the endpoint
/// separation, so the cap is always exactly a half circle. Angles are
/// measured through `frame` so the bulge lands on the outward side
/// however the drawing plane is embedded.
fn cap(start: Point2D, end: Point2D, frame: &PlaneFrame) -> ArcSpec {
    let center = start.midpoint(&end);
    ArcSpec {
        center,
        radius: start.distance(&end) / 2.0,
        start_angle: frame.angle_of(Vec2::new(start.x - center.x, start.y - center.y)),
        end_angle: frame.angle_of(Vec2::new(end.x - center.x, end.y - center.y)),
    }
}

/// Build a horizontal mortar joint: a thin `width × thickness`
/// rectangle whose two short vertical ends are replaced by
/// semicircular caps bulging outward.
///
/// Corner layout, counter-clockwise from `insert`:
///
/// ```text
///   p4 ------------------- p3
///    |                      |
///   p1 ------------------- p2
/// ```
///
/// The caps replace `p2 → p3` and `p4 → p1`; both sweep
/// counter-clockwise so the capsule is simple.
///
/// # Errors
///
/// Returns [`ProfileError::NonPositiveThickness`] when
/// `thickness <= 0`.
pub fn mortar_joint_horizontal(
    insert: Point2D,
    width: f64,
    thickness: f64,
    frame: &PlaneFrame,
    stroke_width: f64,
) -> Result<Profile, ProfileError> {
    if thickness <= 0.0 {
        return Err(ProfileError::NonPositiveThickness(thickness));
    }

    let p1 = insert;
    let p2 = insert.offset(width, 0.0);
    let p3 = insert.offset(width, thickness);
    let p4 = insert.offset(0.0, thickness);

    let vertices = vec![
        Vertex::line(p1, stroke_width),
        Vertex::arc(p2, cap(p2, p3, frame), stroke_width),
        Vertex::line(p3, stroke_width),
        Vertex::arc(p4, cap(p4, p1, frame), stroke_width),
    ];
    Profile::closed(vertices)
}

/// Build a vertical mortar joint: the same capsule with width and
/// thickness swapped in role. The rectangle is `thickness` wide and
/// `width` tall; the caps replace the short top and bottom edges.
///
/// # Errors
///
/// Returns [`ProfileError::NonPositiveThickness`] when
/// `thickness <= 0`.
pub fn mortar_joint_vertical(
    insert: Point2D,
    width: f64,
    thickness: f64,
    frame: &PlaneFrame,
    stroke_width: f64,
) -> Result<Profile, ProfileError> {
    if thickness <= 0.0 {
        return Err(ProfileError::NonPositiveThickness(thickness));
    }

    let p1 = insert;
    let p2 = insert.offset(thickness, 0.0);
    let p3 = insert.offset(thickness, width);
    let p4 = insert.offset(0.0, width);

    let vertices = vec![
        Vertex::arc(p1, cap(p1, p2, frame), stroke_width),
        Vertex::line(p2, stroke_width),
        Vertex::arc(p3, cap(p3, p4, frame), stroke_width),
        Vertex::line(p4, stroke_width),
    ];
    Profile::closed(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EdgeKind;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn arcs(profile: &Profile) -> Vec<ArcSpec> {
        profile
            .vertices
            .iter()
            .filter_map(|v| match v.edge {
                EdgeKind::Arc(a) => Some(a),
                EdgeKind::Line => None,
            })
            .collect()
    }

    #[test]
    fn test_horizontal_joint_radius_and_closure() {
        let frame = PlaneFrame::world_xy();
        let p = mortar_joint_horizontal(Point2D::ORIGIN, 10.0, 0.5, &frame, 0.03).unwrap();
        assert!(p.closed);
        assert_eq!(p.len(), 4);

        let caps = arcs(&p);
        assert_eq!(caps.len(), 2);
        for a in &caps {
            assert!((a.radius - 0.25).abs() < 1e-12);
            // Endpoints diametrically opposite: angles differ by π.
            let sweep = (a.end_angle - a.start_angle).rem_euclid(2.0 * PI);
            assert!((sweep - PI).abs() < 1e-12);
        }
        // Vertex bounding height is exactly the thickness; the caps
        // bulge only past the two short ends.
        let bb = p.bounding_box();
        assert!((bb.height() - 0.5).abs() < 1e-12);
        assert!((bb.width() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_horizontal_caps_bulge_outward() {
        let frame = PlaneFrame::world_xy();
        let p = mortar_joint_horizontal(Point2D::ORIGIN, 10.0, 0.5, &frame, 0.03).unwrap();
        let caps = arcs(&p);

        // Right cap: p2 (bottom) to p3 (top), CCW through angle 0
        // (bulging toward +x).
        let right = caps[0];
        assert!((right.center.x - 10.0).abs() < 1e-12);
        assert!((right.start_angle - (-FRAC_PI_2)).abs() < 1e-12);
        assert!((right.end_angle - FRAC_PI_2).abs() < 1e-12);

        // Left cap: p4 (top) to p1 (bottom), CCW through π (bulging
        // toward -x).
        let left = caps[1];
        assert!(left.center.x.abs() < 1e-12);
        assert!((left.start_angle - FRAC_PI_2).abs() < 1e-12);
        assert!((left.end_angle - (-FRAC_PI_2)).abs() < 1e-12);
    }

    #[test]
    fn test_vertical_joint_swaps_roles() {
        let frame = PlaneFrame::world_xy();
        let p = mortar_joint_vertical(Point2D::ORIGIN, 10.0, 0.5, &frame, 0.03).unwrap();
        let bb = p.bounding_box();
        assert!((bb.width() - 0.5).abs() < 1e-12);
        assert!((bb.height() - 10.0).abs() < 1e-12);

        let caps = arcs(&p);
        assert_eq!(caps.len(), 2);
        for a in &caps {
            assert!((a.radius - 0.25).abs() < 1e-12);
        }
        // Bottom cap: p1 (left) to p2 (right), CCW through -π/2
        // (bulging downward).
        let bottom = caps[0];
        assert!(bottom.center.y.abs() < 1e-12);
        assert!((bottom.start_angle.abs() - PI).abs() < 1e-12);
        assert!(bottom.end_angle.abs() < 1e-12);
    }

    #[test]
    fn test_rejects_non_positive_thickness() {
        let frame = PlaneFrame::world_xy();
        assert!(matches!(
            mortar_joint_horizontal(Point2D::ORIGIN, 10.0, 0.0, &frame, 0.03),
            Err(ProfileError::NonPositiveThickness(_))
        ));
        assert!(matches!(
            mortar_joint_vertical(Point2D::ORIGIN, 10.0, -0.5, &frame, 0.03),
            Err(ProfileError::NonPositiveThickness(_))
        ));
    }

    #[test]
    fn test_same_sweep_in_rotated_frame() {
        use cmudraft_math::{Point3, Vec3};
        // Drawing plane rotated 90° about Z: sweeps must still both
        // be half circles in the same rotational sense.
        let frame = PlaneFrame::new(Point3::origin(), Vec3::y(), -Vec3::x());
        let p = mortar_joint_horizontal(Point2D::ORIGIN, 10.0, 0.5, &frame, 0.03).unwrap();
        for a in arcs(&p) {
            let sweep = (a.end_angle - a.start_angle).rem_euclid(2.0 * PI);
            assert!((sweep - PI).abs() < 1e-12);
        }
    }
}
