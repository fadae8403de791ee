//! Cheap overlap classification between parts and query windows
//!
//! Both predicates work on axis-aligned bounding extents, not the true
//! rotated polygons. That makes them conservative: `disjoint` can return
//! false for a rotated part whose extent touches the window while its
//! polygon does not, in which case the rasterizer simply paints nothing.
//! It never returns true for a part that would have painted pixels, so
//! skipping disjoint parts cannot change the output.

use super::rect::OrientedRect;

/// How a part's bounding extent relates to a query window's
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlap {
    /// No shared area; the part cannot paint any pixel in the window
    Disjoint,
    /// The part's extent lies entirely inside the window's
    Contained,
    /// The extents overlap without containment
    Partial,
}

/// Whether contained parts are dropped from later tiles of a sweep
///
/// Pruning assumes tiles are visited in a single monotonic pass with no
/// overlap between windows, so a part fully consumed by one tile can
/// never matter again. That assumption does not hold under a parallel
/// sweep, which rejects `Enabled` outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PruneMode {
    /// Keep every part for the whole sweep (always safe)
    #[default]
    Disabled,
    /// Drop a part once a tile fully contains it
    Enabled,
}

/// Check whether a part's extent shares no area with the window's
pub fn disjoint(part: &OrientedRect, window: &OrientedRect) -> bool {
    part.bounds().disjoint(&window.bounds())
}

/// Check whether a part's extent lies entirely inside the window's
pub fn contained(part: &OrientedRect, window: &OrientedRect) -> bool {
    part.bounds().within(&window.bounds())
}

/// Classify the overlap between a part and a query window
pub fn classify(part: &OrientedRect, window: &OrientedRect) -> Overlap {
    let part_bounds = part.bounds();
    let window_bounds = window.bounds();

    if part_bounds.disjoint(&window_bounds) {
        Overlap::Disjoint
    } else if part_bounds.within(&window_bounds) {
        Overlap::Contained
    } else {
        Overlap::Partial
    }
}
