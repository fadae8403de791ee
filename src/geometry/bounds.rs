//! Axis-aligned bounding extents

use super::point::Point;

/// An axis-aligned bounding extent
///
/// The min/max coordinates enclosing a possibly rotated shape. With Y
/// growing downward, `min_y` is the top edge and `max_y` the bottom edge.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    /// Minimum X coordinate (left edge)
    pub min_x: f32,
    /// Minimum Y coordinate (top edge)
    pub min_y: f32,
    /// Maximum X coordinate (right edge)
    pub max_x: f32,
    /// Maximum Y coordinate (bottom edge)
    pub max_y: f32,
}

impl Bounds {
    /// Create a new bounding extent
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Bounds { min_x, min_y, max_x, max_y }
    }

    /// The tight extent of a set of points
    ///
    /// Folds min/max over every point, so a rotated rectangle's extent
    /// covers all four corners rather than just the nominal top-left and
    /// bottom-right ones.
    pub fn of_points(points: &[Point]) -> Self {
        let mut min_x = f32::MAX;
        let mut min_y = f32::MAX;
        let mut max_x = f32::MIN;
        let mut max_y = f32::MIN;

        for p in points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        Bounds::new(min_x, min_y, max_x, max_y)
    }

    /// Get the width of the extent
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// Get the height of the extent
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Check whether this extent shares no area with another
    pub fn disjoint(&self, other: &Bounds) -> bool {
        self.max_x <= other.min_x
            || self.min_x >= other.max_x
            || self.max_y <= other.min_y
            || self.min_y >= other.max_y
    }

    /// Check whether this extent lies entirely inside another
    pub fn within(&self, other: &Bounds) -> bool {
        self.min_x >= other.min_x
            && self.max_x <= other.max_x
            && self.min_y >= other.min_y
            && self.max_y <= other.max_y
    }
}
