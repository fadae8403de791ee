//! Physical-unit to pixel conversion
//!
//! Everything the engine rasterizes goes through one multiplicative
//! factor, pixels per physical unit, so parts and query windows keep
//! their relative positions no matter what resolution the caller picks.

use crate::geometry::Point;

use super::errors::{RoiError, RoiResult};

/// Millimeters per inch, for DPI-style resolution inputs
const MM_PER_INCH: f32 = 25.4;

/// Uniform physical-to-pixel scale factor
#[derive(Debug, Clone, Copy)]
pub struct UnitScale {
    factor: f32,
}

impl UnitScale {
    /// Create a scale from a pixels-per-unit factor
    ///
    /// # Arguments
    /// * `factor` - Pixels per physical unit; must be positive
    pub fn pixels_per_unit(factor: f32) -> RoiResult<Self> {
        if !(factor > 0.0) {
            return Err(RoiError::InvalidScale(factor));
        }
        Ok(UnitScale { factor })
    }

    /// Create a scale from a dots-per-inch resolution, for inputs in
    /// millimeters
    pub fn from_dpi(dpi: f32) -> RoiResult<Self> {
        Self::pixels_per_unit(dpi / MM_PER_INCH)
    }

    /// The pixels-per-unit factor
    pub fn factor(&self) -> f32 {
        self.factor
    }

    /// Convert a physical distance to pixels
    pub fn to_pixels(&self, distance: f32) -> f32 {
        distance * self.factor
    }

    /// Convert a physical point to pixel coordinates
    pub fn point_to_pixels(&self, point: Point) -> Point {
        point.scaled(self.factor)
    }
}
