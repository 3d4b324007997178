//! Course layout assembly for sectioned wall elevations.

use cmudraft_math::PlaneFrame;
use cmudraft_profile::{
    clipped_bottom, clipped_top, mortar_joint_horizontal, rectangle, Point2D, Profile,
};
use serde::{Deserialize, Serialize};

use crate::params::BlockParams;
use crate::LayoutError;

/// How a course's block face is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseRole {
    /// Plain rectangular face.
    Full,
    /// Face clipped by a break line at the top: the course just below
    /// the shared section line.
    TopClipped,
    /// Face clipped by a break line at the bottom: the course just
    /// above the shared section line.
    BottomClipped,
}

/// Placement of one course in the elevation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CourseSpec {
    /// Course index, counted upward from the base.
    pub index: u32,
    /// Insertion point: lower-left corner of the course cell
    /// (the joint sits between here and the block).
    pub insert: Point2D,
    /// How the block face is drawn.
    pub role: CourseRole,
}

/// One assembled course: the bed-joint capsule (when drawn) and the
/// block face, in draw order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Placement and role.
    pub spec: CourseSpec,
    /// Bed joint beneath the block. `None` for the bottom-clipped
    /// course, whose clipped face supplies its own joint treatment.
    pub mortar: Option<Profile>,
    /// Block face profile.
    pub block: Profile,
}

/// A full sectioned elevation: the ordered course list and the index
/// where the lower assembly ends and the upper begins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Elevation {
    /// Courses from the base upward.
    pub courses: Vec<Course>,
    /// First course of the upper assembly.
    pub split: usize,
}

impl Elevation {
    /// Courses below the shared section line (ends with the
    /// top-clipped course).
    pub fn lower(&self) -> &[Course] {
        &self.courses[..self.split]
    }

    /// Courses above the shared section line (starts with the
    /// bottom-clipped course).
    pub fn upper(&self) -> &[Course] {
        &self.courses[self.split..]
    }
}

/// Assign a role to each course of a wall split into equal lower and
/// upper assemblies meeting at one shared section line.
fn role_for(index: u32, total_courses: u32) -> CourseRole {
    let boundary = total_courses / 2;
    if index == boundary - 1 {
        CourseRole::TopClipped
    } else if index == boundary {
        CourseRole::BottomClipped
    } else {
        CourseRole::Full
    }
}

/// Assemble a sectioned wall elevation of `total_courses` courses
/// starting at `base`.
///
/// The wall splits into a lower and an upper assembly meeting at one
/// shared section line; the course just below it is drawn
/// top-clipped, the course just above bottom-clipped, all others
/// full. Course `i` inserts at `base + (0, i · course_height)`. Every
/// course carries a mortar joint beneath its block except the
/// bottom-clipped one.
///
/// `frame` is the orientation transform passed through to the
/// mortar-joint arcs.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidCourseCount`] unless
/// `total_courses` is a positive even number, or a validation /
/// profile error from the underlying builders.
pub fn elevation(
    base: Point2D,
    total_courses: u32,
    params: &BlockParams,
    frame: &PlaneFrame,
) -> Result<Elevation, LayoutError> {
    params.validate()?;
    if total_courses == 0 || total_courses % 2 != 0 {
        return Err(LayoutError::InvalidCourseCount(total_courses));
    }

    let course_height = params.course_height();
    let mut courses = Vec::with_capacity(total_courses as usize);

    for index in 0..total_courses {
        let insert = base.offset(0.0, index as f64 * course_height);
        let role = role_for(index, total_courses);

        let block = match role {
            CourseRole::Full => rectangle(
                insert,
                params.width,
                params.height,
                params.mortar_thickness,
                params.stroke_width,
            ),
            CourseRole::TopClipped => clipped_top(
                insert,
                params.width,
                params.height,
                params.mortar_thickness,
                params.stroke_width,
            )?,
            CourseRole::BottomClipped => clipped_bottom(
                insert,
                params.width,
                params.height,
                params.mortar_thickness,
                params.stroke_width,
            )?,
        };

        let mortar = match role {
            CourseRole::BottomClipped => None,
            _ => Some(mortar_joint_horizontal(
                insert,
                params.width,
                params.mortar_thickness,
                frame,
                params.stroke_width,
            )?),
        };

        courses.push(Course {
            spec: CourseSpec {
                index,
                insert,
                role,
            },
            mortar,
            block,
        });
    }

    Ok(Elevation {
        courses,
        split: (total_courses / 2) as usize,
    })
}
