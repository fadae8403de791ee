//! Point structure for representing coordinates

/// A point in the canvas coordinate system
///
/// Coordinates follow the image convention: X grows to the right,
/// Y grows downward. Points are plain values, copied rather than
/// shared, so no two structures ever alias the same coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate (pixels or physical units, context-dependent)
    pub x: f32,
    /// Y coordinate (pixels or physical units, context-dependent)
    pub y: f32,
}

impl Point {
    /// Create a new point
    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }

    /// Component-wise offset of this point from another
    pub fn delta(&self, other: &Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    /// This point shifted by a delta
    pub fn offset(&self, delta: &Point) -> Point {
        Point::new(self.x + delta.x, self.y + delta.y)
    }

    /// This point scaled by a uniform factor
    pub fn scaled(&self, factor: f32) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }
}
