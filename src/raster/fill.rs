//! Scanline fill of rotated rectangles
//!
//! Converts a part's quadrilateral footprint into foreground pixels of a
//! window-sized buffer. A pixel is painted iff its center lies inside the
//! polygon, with half-open span boundaries so adjacent parts sharing an
//! edge do not double-paint a seam.

use crate::geometry::{Bounds, OrientedRect, Point};

use super::buffer::PixelBuffer;

/// Rasterize one oriented rectangle into a window-local buffer
///
/// The rectangle's corners are projected into window-local pixel
/// coordinates (offset by the window's top-left corner) and the resulting
/// quadrilateral is scan-converted row by row. Spans are clamped to the
/// buffer, so footprints reaching past the window edges are cropped
/// rather than wrapped.
///
/// # Arguments
/// * `buffer` - Target buffer sized to the query window
/// * `rect` - Part footprint in the same pixel space as the window
/// * `window` - Query window whose top-left corner anchors the buffer
pub fn fill_rect(buffer: &mut PixelBuffer, rect: &OrientedRect, window: &OrientedRect) {
    let origin = window.top_left();
    let local = |p: Point| Point::new(p.x - origin.x, p.y - origin.y);

    // Traversal order around the quad: top-left, bottom-left,
    // bottom-right, top-right
    let polygon = [
        local(rect.top_left()),
        local(rect.bottom_left()),
        local(rect.bottom_right()),
        local(rect.top_right()),
    ];

    let extent = Bounds::of_points(&polygon);
    let row_start = clamp_index(span_index(extent.min_y), buffer.height());
    let row_end = clamp_index(span_index(extent.max_y), buffer.height());

    let mut crossings: Vec<f32> = Vec::with_capacity(4);
    for row in row_start..row_end {
        let py = row as f32 + 0.5;

        crossings.clear();
        for i in 0..polygon.len() {
            let a = polygon[i];
            let b = polygon[(i + 1) % polygon.len()];
            // Half-open crossing test: an edge is crossed when the
            // scanline separates its endpoints
            if (a.y > py) != (b.y > py) {
                crossings.push(a.x + (py - a.y) * (b.x - a.x) / (b.y - a.y));
            }
        }
        crossings.sort_by(|a, b| a.total_cmp(b));

        for pair in crossings.chunks_exact(2) {
            let col_start = clamp_index(span_index(pair[0]), buffer.width());
            let col_end = clamp_index(span_index(pair[1]), buffer.width());
            if col_start < col_end {
                buffer.fill_span(row, col_start, col_end);
            }
        }
    }
}

/// Index of the first pixel whose center sits at or past `coord`
///
/// Used for both ends of a half-open span: as a start it is the first
/// covered pixel, as an end it is one past the last covered pixel.
fn span_index(coord: f32) -> i64 {
    (coord - 0.5).ceil() as i64
}

/// Clamp a signed pixel index into a buffer dimension
fn clamp_index(index: i64, limit: u32) -> u32 {
    index.clamp(0, limit as i64) as u32
}
