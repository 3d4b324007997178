#![warn(missing_docs)]

//! Layout assembly for masonry drafting: hollow cross sections and
//! sectioned wall elevations.
//!
//! Consumes the builders of `cmudraft-profile` and emits ordered
//! collections of profiles for the rendering/persistence
//! collaborator. All parameter validation happens here, before any
//! geometry is built.
//!
//! # Example
//!
//! ```
//! use cmudraft_layout::{elevation, BlockParams};
//! use cmudraft_math::PlaneFrame;
//! use cmudraft_profile::Point2D;
//!
//! let wall = elevation(
//!     Point2D::ORIGIN,
//!     4,
//!     &BlockParams::standard_8in(),
//!     &PlaneFrame::world_xy(),
//! )
//! .unwrap();
//! assert_eq!(wall.courses.len(), 4);
//! assert_eq!(wall.lower().len(), 2);
//! ```

mod cores;
mod courses;
mod params;

pub use cores::{core_section, CoreSection};
pub use courses::{elevation, Course, CourseRole, CourseSpec, Elevation};
pub use params::{BlockParams, CoreLayoutParams, WallHalf};

use cmudraft_profile::ProfileError;
use thiserror::Error;

/// Errors from layout assembly.
#[derive(Debug, Clone, Error)]
pub enum LayoutError {
    /// A supplied dimension must be positive.
    #[error("{name} must be positive, got {value}")]
    NonPositiveDimension {
        /// Name of the offending field.
        name: &'static str,
        /// The supplied value.
        value: f64,
    },

    /// The derived core width (`width − 2·shell`) is negative.
    #[error("derived core width is negative: {0:.4}")]
    NegativeCoreWidth(f64),

    /// The derived core length is negative.
    #[error("derived core length is negative: {0:.4}")]
    NegativeCoreLength(f64),

    /// Core count must be at least 1.
    #[error("core count must be at least 1, got {0}")]
    InvalidCoreCount(u32),

    /// Course count must be a positive even number so the wall splits
    /// into equal halves.
    #[error("course count must be a positive even number, got {0}")]
    InvalidCourseCount(u32),

    /// A profile builder failed.
    #[error(transparent)]
    Profile(#[from] ProfileError),
}
