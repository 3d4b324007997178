//! Zig-zag break-line symbol.

use crate::types::{Point2D, Profile, Vertex};

/// Fractional stations along the segment where break-line vertices
/// sit. The doubled stations at 0.46 and 0.54 carry the jog pair
/// either side of the midpoint. Drafting-convention values preserved
/// from the source drawings, not derived.
pub const BREAK_STATIONS: [f64; 7] = [0.0, 0.46, 0.46, 0.50, 0.54, 0.54, 1.0];

/// Jog magnitude as a fraction of the segment's per-axis extent.
const JOG_FRACTION: f64 = 0.05;

/// Minimum jog so the symbol stays visible on short segments.
const MIN_JOG: f64 = 0.5;

/// Build the conventional drafting break symbol along `start → end`.
///
/// Returns an open 7-vertex profile: straight runs to just before the
/// midpoint, a W-shaped kink centered at the midpoint (downward jog
/// slightly before it, upward jog slightly after), then straight to
/// the end. Jog magnitudes are computed per axis as
/// `max(0.05 · delta, 0.5)` and applied along the segment's left
/// normal, so the kink keeps its shape for non-axis-aligned segments.
///
/// Purely deterministic sampling; no failure conditions.
pub fn break_line(start: Point2D, end: Point2D, stroke_width: f64) -> Profile {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let jog_x = (JOG_FRACTION * dx).max(MIN_JOG);
    let jog_y = (JOG_FRACTION * dy).max(MIN_JOG);

    let len = (dx * dx + dy * dy).sqrt();
    // Left normal of the segment direction; degenerate segments get
    // no jog rather than NaN coordinates.
    let (nx, ny) = if len > 0.0 {
        (-dy / len, dx / len)
    } else {
        (0.0, 0.0)
    };
    let jog = |p: Point2D, sign: f64| p.offset(sign * nx * jog_x, sign * ny * jog_y);

    let at = |t: f64| Point2D::new(start.x + t * dx, start.y + t * dy);

    let points = [
        at(BREAK_STATIONS[0]),
        at(BREAK_STATIONS[1]),
        jog(at(BREAK_STATIONS[2]), -1.0),
        at(BREAK_STATIONS[3]),
        jog(at(BREAK_STATIONS[4]), 1.0),
        at(BREAK_STATIONS[5]),
        at(BREAK_STATIONS[6]),
    ];

    let vertices = points
        .into_iter()
        .map(|p| Vertex::line(p, stroke_width))
        .collect();
    // Valid by construction: 7 vertices.
    Profile::open(vertices).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_and_count() {
        let start = Point2D::new(1.0, 2.0);
        let end = Point2D::new(21.0, 2.0);
        let p = break_line(start, end, 0.03);
        assert!(!p.closed);
        assert_eq!(p.len(), 7);
        let pts: Vec<Point2D> = p.points().collect();
        assert_eq!(pts[0], start);
        assert_eq!(pts[6], end);
    }

    #[test]
    fn test_horizontal_jog_floor() {
        // Short horizontal segment: dy = 0, so the perpendicular jog
        // must still reach the 0.5 floor.
        let p = break_line(Point2D::new(0.0, 0.0), Point2D::new(4.0, 0.0), 0.03);
        let pts: Vec<Point2D> = p.points().collect();
        // Down jog before the midpoint, up jog after.
        assert!((pts[2].y - (-0.5)).abs() < 1e-12);
        assert!((pts[4].y - 0.5).abs() < 1e-12);
        // On-line stations stay on the segment.
        assert!(pts[1].y.abs() < 1e-12);
        assert!(pts[3].y.abs() < 1e-12);
        assert!(pts[5].y.abs() < 1e-12);
        // Stations at the expected fractions.
        assert!((pts[1].x - 0.46 * 4.0).abs() < 1e-12);
        assert!((pts[3].x - 0.50 * 4.0).abs() < 1e-12);
        assert!((pts[5].x - 0.54 * 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_vertical_jog_floor() {
        let p = break_line(Point2D::new(0.0, 0.0), Point2D::new(0.0, 6.0), 0.03);
        let pts: Vec<Point2D> = p.points().collect();
        // For an upward segment the left normal is -X, so the "down"
        // jog lands at +x and the "up" jog at -x.
        assert!((pts[2].x - 0.5).abs() < 1e-12);
        assert!((pts[4].x - (-0.5)).abs() < 1e-12);
        assert!(pts[2].y > pts[1].y - 1e-12);
    }

    #[test]
    fn test_long_horizontal_keeps_floor() {
        // Each axis's jog derives from that axis's delta: a long
        // horizontal segment still has dy = 0, so the perpendicular
        // jog stays at the 0.5 floor no matter the length.
        let p = break_line(Point2D::new(0.0, 0.0), Point2D::new(100.0, 0.0), 0.03);
        let pts: Vec<Point2D> = p.points().collect();
        assert!((pts[2].y - (-0.5)).abs() < 1e-12);
        assert!((pts[4].y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_oblique_segment_jog_scales() {
        // 3-4-5 segment: jog_x = 0.05*30 = 1.5, jog_y = 0.05*40 = 2.0,
        // both above the floor; left normal is (-0.8, 0.6).
        let start = Point2D::new(0.0, 0.0);
        let end = Point2D::new(30.0, 40.0);
        let p = break_line(start, end, 0.03);
        let pts: Vec<Point2D> = p.points().collect();

        let on = |t: f64| Point2D::new(t * 30.0, t * 40.0);
        // Down pair: p(0.46) displaced by -(nx*jog_x, ny*jog_y).
        assert!((pts[2].x - (on(0.46).x + 0.8 * 1.5)).abs() < 1e-12);
        assert!((pts[2].y - (on(0.46).y - 0.6 * 2.0)).abs() < 1e-12);
        // Up pair: p(0.54) displaced the opposite way.
        assert!((pts[4].x - (on(0.54).x - 0.8 * 1.5)).abs() < 1e-12);
        assert!((pts[4].y - (on(0.54).y + 0.6 * 2.0)).abs() < 1e-12);
    }

    #[test]
    fn test_midpoint_vertex_on_segment() {
        let start = Point2D::new(1.0, 1.0);
        let end = Point2D::new(9.0, 7.0);
        let p = break_line(start, end, 0.03);
        let pts: Vec<Point2D> = p.points().collect();
        let mid = start.midpoint(&end);
        assert!(pts[3].distance(&mid) < 1e-12);
    }
}
