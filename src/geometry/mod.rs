//! Geometry primitives for oriented parts and query windows
//!
//! This module provides the value types the engine computes with:
//! points, oriented rectangles and axis-aligned bounding extents,
//! plus the cheap overlap classification used to reject parts
//! before rasterization.

mod point;
mod bounds;
mod rect;
mod overlap;

#[cfg(test)]
mod tests;

// Re-export key types
pub use self::point::Point;
pub use self::bounds::Bounds;
pub use self::rect::OrientedRect;
pub use self::overlap::{Overlap, PruneMode, classify, contained, disjoint};
