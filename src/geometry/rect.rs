//! Oriented rectangle primitive
//!
//! An `OrientedRect` is a rectangle of fixed dimensions positioned by its
//! center and rotated by an accumulated angle. The four corner points are
//! derived state: they are rebuilt from the center, the half-extents and
//! the accumulated rotation on every mutation, so they can never drift
//! out of sync with the center the way incrementally mutated corners can.

use super::bounds::Bounds;
use super::point::Point;

/// A rectangle with a center, fixed dimensions and an accumulated rotation
///
/// Corner naming follows image coordinates (Y grows downward): the
/// top-left corner of the unrotated rectangle is the one at minimum X and
/// minimum Y. After rotation the names keep tracking the same physical
/// corners, wherever they end up.
#[derive(Debug, Clone, Copy)]
pub struct OrientedRect {
    center: Point,
    height: f32,
    width: f32,
    /// Rotation in radians accumulated since construction
    rotation: f32,
    top_left: Point,
    top_right: Point,
    bottom_left: Point,
    bottom_right: Point,
}

impl OrientedRect {
    /// Create a new axis-aligned rectangle centered at `origin`
    ///
    /// # Arguments
    /// * `origin` - Center of the rectangle
    /// * `height` - Extent along Y before any rotation
    /// * `width` - Extent along X before any rotation
    pub fn new(origin: Point, height: f32, width: f32) -> Self {
        let mut rect = OrientedRect {
            center: origin,
            height,
            width,
            rotation: 0.0,
            top_left: origin,
            top_right: origin,
            bottom_left: origin,
            bottom_right: origin,
        };
        rect.rebuild_corners();
        rect
    }

    /// Rotate the rectangle around its own center
    ///
    /// Composes with any rotation already applied: corners end up at the
    /// unrotated half-extent offsets rotated by the total accumulated
    /// angle, re-added to the center. The center itself does not move.
    ///
    /// # Arguments
    /// * `angle` - Rotation to add, in radians
    pub fn rotate(&mut self, angle: f32) {
        self.rotation += angle;
        self.rebuild_corners();
    }

    /// Move the rectangle so its center lands on `to`
    ///
    /// All four corners shift by the same delta, preserving the rotation.
    pub fn translate(&mut self, to: Point) {
        let delta = to.delta(&self.center);
        self.center = to;
        self.top_left = self.top_left.offset(&delta);
        self.top_right = self.top_right.offset(&delta);
        self.bottom_left = self.bottom_left.offset(&delta);
        self.bottom_right = self.bottom_right.offset(&delta);
    }

    /// Rebuild the corner points from center, dimensions and rotation
    fn rebuild_corners(&mut self) {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;

        self.top_left = self.place_corner(-half_w, -half_h);
        self.top_right = self.place_corner(half_w, -half_h);
        self.bottom_left = self.place_corner(-half_w, half_h);
        self.bottom_right = self.place_corner(half_w, half_h);
    }

    /// Rotate an offset from center by the accumulated angle and re-add
    /// the center
    fn place_corner(&self, dx: f32, dy: f32) -> Point {
        let (sin, cos) = self.rotation.sin_cos();
        Point::new(
            self.center.x + dx * cos - dy * sin,
            self.center.y + dy * cos + dx * sin,
        )
    }

    /// Center of the rectangle
    pub fn center(&self) -> Point {
        self.center
    }

    /// Height before rotation
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Width before rotation
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Rotation in radians accumulated since construction
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Top-left corner
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    /// Top-right corner
    pub fn top_right(&self) -> Point {
        self.top_right
    }

    /// Bottom-left corner
    pub fn bottom_left(&self) -> Point {
        self.bottom_left
    }

    /// Bottom-right corner
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    /// The four corners in fixed order: top-left, top-right,
    /// bottom-left, bottom-right
    pub fn corners(&self) -> [Point; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
        ]
    }

    /// Tight axis-aligned extent over all four corners
    pub fn bounds(&self) -> Bounds {
        Bounds::of_points(&self.corners())
    }
}
