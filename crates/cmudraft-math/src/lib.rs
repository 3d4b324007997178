#![warn(missing_docs)]

//! Math types for the cmudraft drafting core.
//!
//! Thin wrappers around nalgebra providing the types the profile
//! builders need: 2D points and vectors for drawing-plane geometry,
//! a [`PlaneFrame`] describing how that plane is embedded in the
//! ambient coordinate system, and tolerance constants.

use nalgebra::{Unit, Vector2, Vector3};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// A point in the 2D drawing plane.
pub type Point2 = nalgebra::Point2<f64>;

/// A vector in the 2D drawing plane.
pub type Vec2 = Vector2<f64>;

/// An oriented plane embedded in 3D space.
///
/// This is the orientation transform supplied by the rendering
/// collaborator: it says how the local 2D drawing plane maps into
/// whatever broader coordinate system is active. The drafting core
/// only uses it to measure signed angles, so that arc sweep
/// directions stay consistent however the plane is rotated or
/// embedded.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneFrame {
    /// Origin of the plane in 3D.
    pub origin: Point3,
    /// Unit vector along the local X axis.
    pub x_axis: Dir3,
    /// Unit vector along the local Y axis.
    pub y_axis: Dir3,
}

impl PlaneFrame {
    /// Create a frame from an origin and two direction vectors
    /// (normalized here; callers should supply orthogonal directions).
    pub fn new(origin: Point3, x_dir: Vec3, y_dir: Vec3) -> Self {
        Self {
            origin,
            x_axis: Dir3::new_normalize(x_dir),
            y_axis: Dir3::new_normalize(y_dir),
        }
    }

    /// The identity frame: the world XY plane at the world origin.
    pub fn world_xy() -> Self {
        Self::new(Point3::origin(), Vec3::x(), Vec3::y())
    }

    /// Plane normal (`x_axis × y_axis`).
    pub fn normal(&self) -> Dir3 {
        Dir3::new_normalize(self.x_axis.as_ref().cross(self.y_axis.as_ref()))
    }

    /// Map a 2D point in plane coordinates to 3D.
    pub fn embed_point(&self, p: Point2) -> Point3 {
        self.origin + p.x * self.x_axis.as_ref() + p.y * self.y_axis.as_ref()
    }

    /// Map a 2D vector in plane coordinates to 3D.
    pub fn embed_vec(&self, v: Vec2) -> Vec3 {
        v.x * self.x_axis.as_ref() + v.y * self.y_axis.as_ref()
    }

    /// Signed angle of a 3D vector measured in this plane,
    /// counter-clockwise from the local X axis, in `(-π, π]`.
    pub fn angle_on_plane(&self, v: &Vec3) -> f64 {
        v.dot(self.y_axis.as_ref()).atan2(v.dot(self.x_axis.as_ref()))
    }

    /// Signed angle of a 2D plane vector, counter-clockwise from the
    /// local X axis.
    pub fn angle_of(&self, v: Vec2) -> f64 {
        self.angle_on_plane(&self.embed_vec(v))
    }
}

impl Default for PlaneFrame {
    fn default() -> Self {
        Self::world_xy()
    }
}

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance.
    pub linear: f64,
    /// Angular tolerance in radians.
    pub angular: f64,
}

impl Tolerance {
    /// Default drafting tolerances (1e-6 linear, 1e-9 rad angular).
    pub const DEFAULT: Self = Self {
        linear: 1e-6,
        angular: 1e-9,
    };

    /// Check if two 2D points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point2, b: &Point2) -> bool {
        (a - b).norm() < self.linear
    }

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }

    /// Check if two angles are effectively equal (in radians).
    pub fn angles_equal(&self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.angular
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
