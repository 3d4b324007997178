//! Core value types for 2D drafting profiles.

use cmudraft_math::Tolerance;
use serde::{Deserialize, Serialize};

use crate::ProfileError;

/// A 2D point for serializable drafting output.
///
/// We use a custom type instead of nalgebra::Point2 to enable serde
/// serialization without requiring nalgebra's serde feature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point2D {
    /// Create a new 2D point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Distance to another point.
    pub fn distance(&self, other: &Self) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// This point translated by `(dx, dy)`.
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Midpoint between this point and another.
    pub fn midpoint(&self, other: &Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl Default for Point2D {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl From<cmudraft_math::Point2> for Point2D {
    fn from(p: cmudraft_math::Point2) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<Point2D> for cmudraft_math::Point2 {
    fn from(p: Point2D) -> Self {
        cmudraft_math::Point2::new(p.x, p.y)
    }
}

/// A semicircular arc replacing one straight edge of a profile.
///
/// The arc sweeps counter-clockwise from `start_angle` to `end_angle`,
/// both measured in the plane of the caller-supplied [`PlaneFrame`]
/// (counter-clockwise from the local X axis).
///
/// Invariant: the radius equals exactly half the separation of the
/// arc's two endpoints. The builders only ever place endpoints
/// diametrically opposite the center, so every arc is exactly a half
/// circle; the frame selects bulge direction, never arc extent.
///
/// [`PlaneFrame`]: cmudraft_math::PlaneFrame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcSpec {
    /// Arc center in the drawing plane.
    pub center: Point2D,
    /// Arc radius, always positive.
    pub radius: f64,
    /// Angle of the center-to-start vector, in radians.
    pub start_angle: f64,
    /// Angle of the center-to-end vector, in radians.
    pub end_angle: f64,
}

/// How the edge leaving a vertex continues to the next vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EdgeKind {
    /// A straight edge.
    Line,
    /// A circular arc described by the attached [`ArcSpec`].
    Arc(ArcSpec),
}

/// A profile vertex: a point, the continuation of the edge leaving
/// it, and a display stroke width.
///
/// The stroke width is carried through for the rendering collaborator
/// and never enters geometry math.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// Position in the drawing plane.
    pub point: Point2D,
    /// Continuation of the edge leaving this vertex.
    pub edge: EdgeKind,
    /// Display stroke width.
    pub stroke_width: f64,
}

impl Vertex {
    /// Vertex whose outgoing edge is a straight line.
    pub fn line(point: Point2D, stroke_width: f64) -> Self {
        Self {
            point,
            edge: EdgeKind::Line,
            stroke_width,
        }
    }

    /// Vertex whose outgoing edge is a circular arc.
    pub fn arc(point: Point2D, arc: ArcSpec, stroke_width: f64) -> Self {
        Self {
            point,
            edge: EdgeKind::Arc(arc),
            stroke_width,
        }
    }
}

/// An ordered sequence of vertices forming an open or closed 2D
/// profile.
///
/// When `closed` is true an implicit final edge connects the last
/// vertex back to the first. A profile always has at least 2 vertices;
/// the constructors reject anything shorter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Ordered vertices.
    pub vertices: Vec<Vertex>,
    /// Whether an implicit final edge closes the profile.
    pub closed: bool,
}

impl Profile {
    /// Create an open profile.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::TooFewVertices`] for fewer than 2
    /// vertices.
    pub fn open(vertices: Vec<Vertex>) -> Result<Self, ProfileError> {
        Self::with_closure(vertices, false)
    }

    /// Create a closed profile (implicit final edge back to the first
    /// vertex).
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::TooFewVertices`] for fewer than 2
    /// vertices.
    pub fn closed(vertices: Vec<Vertex>) -> Result<Self, ProfileError> {
        Self::with_closure(vertices, true)
    }

    fn with_closure(vertices: Vec<Vertex>, closed: bool) -> Result<Self, ProfileError> {
        if vertices.len() < 2 {
            return Err(ProfileError::TooFewVertices(vertices.len()));
        }
        Ok(Self { vertices, closed })
    }

    /// Verify ring integrity: the profile must either carry the
    /// closed flag or have coincident first and last vertices.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::NotClosed`] with the gap distance when
    /// neither holds, or [`ProfileError::TooFewVertices`] for a
    /// profile built around the validating constructors with fewer
    /// than 2 vertices.
    pub fn ensure_closed(&self, tol: &Tolerance) -> Result<(), ProfileError> {
        if self.vertices.len() < 2 {
            return Err(ProfileError::TooFewVertices(self.vertices.len()));
        }
        if self.closed {
            return Ok(());
        }
        let first = &self.vertices[0].point;
        let last = &self.vertices[self.vertices.len() - 1].point;
        let gap = first.distance(last);
        if gap < tol.linear {
            Ok(())
        } else {
            Err(ProfileError::NotClosed(gap))
        }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the profile has no vertices (never true for profiles
    /// built through the constructors).
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex positions in order.
    pub fn points(&self) -> impl Iterator<Item = Point2D> + '_ {
        self.vertices.iter().map(|v| v.point)
    }

    /// Bounding box of the vertex positions.
    ///
    /// Arc bulge beyond the chord is not included; mortar-cap bulge
    /// extends only past the two short ends of a joint.
    pub fn bounding_box(&self) -> BoundingBox2D {
        let mut bb = BoundingBox2D::empty();
        for p in self.points() {
            bb.include_point(p);
        }
        bb
    }
}

/// 2D axis-aligned bounding box.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BoundingBox2D {
    /// Minimum X coordinate.
    pub min_x: f64,
    /// Minimum Y coordinate.
    pub min_y: f64,
    /// Maximum X coordinate.
    pub max_x: f64,
    /// Maximum Y coordinate.
    pub max_y: f64,
}

impl BoundingBox2D {
    /// Create an empty bounding box.
    pub fn empty() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    /// Expand the bounding box to include a point.
    pub fn include_point(&mut self, p: Point2D) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    /// Width of the bounding box.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the bounding box.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Check if the bounding box is valid (non-empty).
    pub fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }
}

impl Default for BoundingBox2D {
    fn default() -> Self {
        Self::empty()
    }
}
