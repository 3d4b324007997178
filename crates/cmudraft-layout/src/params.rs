//! Validated parameter sets for block and cross-section layout.

use serde::{Deserialize, Serialize};

use crate::LayoutError;

/// Dimensions of a masonry unit and its bed joint.
///
/// All dimensions must be positive; [`BlockParams::validate`] is run
/// by every builder that consumes this before any geometry is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockParams {
    /// Horizontal extent of the drawn face.
    pub width: f64,
    /// Vertical extent of the drawn face.
    pub height: f64,
    /// Length of the unit (the long dimension, used in plan views and
    /// naming).
    pub length: f64,
    /// Bed-joint (mortar) thickness.
    pub mortar_thickness: f64,
    /// Display stroke width carried into every profile.
    pub stroke_width: f64,
}

impl BlockParams {
    /// The nominal 8-inch unit the source command hard-codes:
    /// 5.625 × 5.625 × 15.625 with a 3/8" joint.
    pub fn standard_8in() -> Self {
        Self {
            width: 5.625,
            height: 5.625,
            length: 15.625,
            mortar_thickness: 0.375,
            stroke_width: 0.03,
        }
    }

    /// Vertical pitch of one course: block height plus joint.
    pub fn course_height(&self) -> f64 {
        self.height + self.mortar_thickness
    }

    /// Check that every dimension is positive.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::NonPositiveDimension`] naming the first
    /// offending field.
    pub fn validate(&self) -> Result<(), LayoutError> {
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("length", self.length),
            ("mortar_thickness", self.mortar_thickness),
            ("stroke_width", self.stroke_width),
        ] {
            if value <= 0.0 {
                return Err(LayoutError::NonPositiveDimension { name, value });
            }
        }
        Ok(())
    }

    /// Inventory tag for one half of a sectioned wall, in the
    /// source's naming convention: `{w}X{h}X{l}_{n}H_Lower` /
    /// `_Upper`. Symbol-name repair for the host is out of scope.
    pub fn block_label(&self, courses: u32, half: WallHalf) -> String {
        let suffix = match half {
            WallHalf::Lower => "Lower",
            WallHalf::Upper => "Upper",
        };
        format!(
            "{}X{}X{}_{}H_{}",
            self.width, self.height, self.length, courses, suffix
        )
    }
}

/// Which half of a sectioned wall an assembly belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallHalf {
    /// Below the shared section line.
    Lower,
    /// Above the shared section line.
    Upper,
}

/// Parameters for a hollow cross-section layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoreLayoutParams {
    /// Overall width of the unit (across the wall).
    pub width: f64,
    /// Overall length of the unit (along the wall).
    pub length: f64,
    /// Outer shell thickness.
    pub shell_thickness: f64,
    /// Thickness of the webs between cores.
    pub web_thickness: f64,
    /// Number of core openings, at least 1.
    pub core_count: u32,
}

impl CoreLayoutParams {
    /// Derived core opening width: `width − 2 · shell`.
    pub fn core_width(&self) -> f64 {
        self.width - 2.0 * self.shell_thickness
    }

    /// Derived core opening length:
    /// `(length − 2 · shell − (n − 1) · web) / n`.
    pub fn core_length(&self) -> f64 {
        let n = self.core_count.max(1) as f64;
        let webs = self.core_count.saturating_sub(1) as f64;
        (self.length - 2.0 * self.shell_thickness - webs * self.web_thickness) / n
    }

    /// Check that the derived core dimensions are physically
    /// realizable. Violations are hard failures, never clamped.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidCoreCount`] for zero cores, or
    /// [`LayoutError::NegativeCoreWidth`] /
    /// [`LayoutError::NegativeCoreLength`] carrying the offending
    /// derived value.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.core_count < 1 {
            return Err(LayoutError::InvalidCoreCount(self.core_count));
        }
        let cw = self.core_width();
        if cw < 0.0 {
            return Err(LayoutError::NegativeCoreWidth(cw));
        }
        let cl = self.core_length();
        if cl < 0.0 {
            return Err(LayoutError::NegativeCoreLength(cl));
        }
        Ok(())
    }
}
