#![warn(missing_docs)]

//! 2D vector profiles for masonry drafting.
//!
//! This crate is the profile layer of the cmudraft core: immutable
//! value types describing open or closed polyline/arc profiles, and
//! the parametric builders that produce them:
//!
//! - **Rectangle**: plain closed block outline
//! - **Break line**: the zig-zag "cut" symbol between two points
//! - **Clipped rectangles**: block faces sectioned by a break line
//! - **Mortar joints**: thin capsules with semicircular end caps
//!
//! Builders are pure functions over resolved numeric parameters; the
//! rendering/persistence collaborator translates the returned
//! [`Profile`] values into host entities.
//!
//! # Example
//!
//! ```
//! use cmudraft_profile::{mortar_joint_horizontal, Point2D};
//! use cmudraft_math::PlaneFrame;
//!
//! let frame = PlaneFrame::world_xy();
//! let joint = mortar_joint_horizontal(Point2D::ORIGIN, 15.625, 0.375, &frame, 0.03).unwrap();
//! assert!(joint.closed);
//! assert_eq!(joint.len(), 4);
//! ```

mod breakline;
mod clipped;
mod joint;
mod rect;
mod types;

pub use breakline::{break_line, BREAK_STATIONS};
pub use clipped::{clipped_bottom, clipped_top, BREAK_HEIGHT_FRACTION, SECTION_GAP_FRACTION};
pub use joint::{mortar_joint_horizontal, mortar_joint_vertical};
pub use rect::rectangle;
pub use types::{ArcSpec, BoundingBox2D, EdgeKind, Point2D, Profile, Vertex};

use thiserror::Error;

/// Errors from profile construction.
#[derive(Debug, Clone, Error)]
pub enum ProfileError {
    /// A profile that must form a ring has a gap between its first
    /// and last vertices. Indicates a construction bug; never
    /// recovered silently.
    #[error("profile is not closed: first and last vertices differ by {0:.6}")]
    NotClosed(f64),

    /// A profile needs at least 2 vertices.
    #[error("profile needs at least 2 vertices, got {0}")]
    TooFewVertices(usize),

    /// Mortar thickness must be positive to place the semicircular
    /// caps.
    #[error("mortar thickness must be positive, got {0}")]
    NonPositiveThickness(f64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmudraft_math::PlaneFrame;

    #[test]
    fn test_block_and_joint_stack() {
        // One course of the elevation: joint capsule under a block
        // rectangle, both spanning the same width.
        let frame = PlaneFrame::world_xy();
        let insert = Point2D::new(4.0, 10.0);
        let joint = mortar_joint_horizontal(insert, 15.625, 0.375, &frame, 0.03).unwrap();
        let block = rectangle(insert, 15.625, 5.625, 0.375, 0.03);

        let jb = joint.bounding_box();
        let bb = block.bounding_box();
        assert!((jb.max_y - bb.min_y).abs() < 1e-12);
        assert!((jb.width() - bb.width()).abs() < 1e-12);
    }

    #[test]
    fn test_clipped_faces_leave_section_gap() {
        // Lower course clipped at the top, the course above clipped
        // at the bottom: the two break lines must not touch.
        let w = 15.625;
        let h = 5.625;
        let mortar = 0.375;
        let lower = clipped_top(Point2D::ORIGIN, w, h, mortar, 0.03).unwrap();
        let upper = clipped_bottom(Point2D::ORIGIN, w, h, mortar, 0.03).unwrap();

        let lower_break = mortar + (BREAK_HEIGHT_FRACTION - SECTION_GAP_FRACTION / 2.0) * h;
        let upper_break = mortar + (BREAK_HEIGHT_FRACTION + SECTION_GAP_FRACTION / 2.0) * h;
        assert!(upper_break > lower_break);
        assert!(lower.closed && upper.closed);
    }

    #[test]
    fn test_builders_return_independent_values() {
        let a = rectangle(Point2D::ORIGIN, 10.0, 5.0, 0.0, 0.03);
        let mut b = rectangle(Point2D::ORIGIN, 10.0, 5.0, 0.0, 0.03);
        b.vertices[0].point = Point2D::new(99.0, 99.0);
        assert_eq!(a.vertices[0].point, Point2D::ORIGIN);
    }
}
