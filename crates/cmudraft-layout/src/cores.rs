//! Hollow cross-section layout: outer shell plus evenly spaced cores.

use cmudraft_profile::{rectangle, Point2D, Profile};
use serde::{Deserialize, Serialize};

use crate::params::CoreLayoutParams;
use crate::LayoutError;

/// A hollow unit cross section: the outer shell outline and the core
/// openings, in left-to-right order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreSection {
    /// Outer `length × width` shell rectangle.
    pub shell: Profile,
    /// Core openings, left to right along the length axis.
    pub cores: Vec<Profile>,
}

/// Lay out a hollow cross section at `origin`.
///
/// The shell spans the full `length × width` (length along X). Cores
/// start at `origin + (shell, shell)` and advance by
/// `core_length + web` along the length axis. Validation of the
/// derived core dimensions happens before any profile is built;
/// once it passes, cores cannot overlap each other or touch the
/// shell.
///
/// # Errors
///
/// Propagates the validation failures of
/// [`CoreLayoutParams::validate`].
pub fn core_section(
    origin: Point2D,
    params: &CoreLayoutParams,
    stroke_width: f64,
) -> Result<CoreSection, LayoutError> {
    params.validate()?;

    let shell = rectangle(origin, params.length, params.width, 0.0, stroke_width);

    let core_width = params.core_width();
    let core_length = params.core_length();
    let pitch = core_length + params.web_thickness;
    let first = origin.offset(params.shell_thickness, params.shell_thickness);

    let cores = (0..params.core_count)
        .map(|i| {
            let insert = first.offset(i as f64 * pitch, 0.0);
            rectangle(insert, core_length, core_width, 0.0, stroke_width)
        })
        .collect();

    Ok(CoreSection { shell, cores })
}
