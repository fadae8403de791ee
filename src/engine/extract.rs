//! Single query-window extraction

use log::debug;
use serde::Deserialize;

use crate::geometry::{disjoint, OrientedRect, Point};
use crate::parts::PartSet;
use crate::raster::{fill_rect, PixelBuffer};

use super::errors::{RoiError, RoiResult};
use super::scale::UnitScale;

/// A query window in physical units
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WindowSpec {
    /// Center X coordinate
    pub x: f32,
    /// Center Y coordinate
    pub y: f32,
    /// Window extent along Y
    pub height: f32,
    /// Window extent along X
    pub width: f32,
}

impl WindowSpec {
    /// Create a new window specification
    pub fn new(x: f32, y: f32, height: f32, width: f32) -> Self {
        WindowSpec { x, y, height, width }
    }
}

/// Extract one query window from a part set into a fresh pixel buffer
///
/// The window is given in the same physical units as the part input and
/// scaled by the same factor the parts were; parts whose bounding extent
/// misses the window are skipped without rasterizing. Windows with
/// non-positive dimensions are rejected, never clamped.
///
/// # Arguments
/// * `parts` - The scaled part collection
/// * `spec` - Query window center and dimensions in physical units
/// * `scale` - The physical-to-pixel factor the parts were built with
///
/// # Returns
/// A buffer sized to the window's pixel dimensions, or an error
pub fn extract_window(parts: &PartSet, spec: &WindowSpec, scale: UnitScale) -> RoiResult<PixelBuffer> {
    if !(spec.height > 0.0) || !(spec.width > 0.0) {
        return Err(RoiError::InvalidWindow {
            width: spec.width,
            height: spec.height,
        });
    }

    let window = OrientedRect::new(
        scale.point_to_pixels(Point::new(spec.x, spec.y)),
        scale.to_pixels(spec.height),
        scale.to_pixels(spec.width),
    );

    let mut buffer = PixelBuffer::new(
        window.width().ceil() as u32,
        window.height().ceil() as u32,
    );

    let mut painted = 0usize;
    for part in parts.iter() {
        if disjoint(part, &window) {
            continue;
        }
        fill_rect(&mut buffer, part, &window);
        painted += 1;
    }

    debug!(
        "Extracted window at ({}, {}): {} of {} parts painted",
        spec.x, spec.y, painted, parts.len()
    );
    Ok(buffer)
}
