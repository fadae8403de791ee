//! Typed part descriptor records

use serde::Deserialize;

/// One decoded part descriptor: a center position and rotation angle in
/// physical units
///
/// Dimensions are not part of the record; every part in a set shares the
/// same [`PartGeometry`].
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PartRecord {
    /// Center X coordinate (physical units)
    pub x: f32,
    /// Center Y coordinate (physical units)
    pub y: f32,
    /// Rotation angle in radians
    pub angle: f32,
}

/// The height and width shared by every part in a set (physical units)
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PartGeometry {
    /// Part extent along Y before rotation
    pub height: f32,
    /// Part extent along X before rotation
    pub width: f32,
}

impl PartGeometry {
    /// Create a new shared part geometry
    pub fn new(height: f32, width: f32) -> Self {
        PartGeometry { height, width }
    }
}
