//! Scan conversion of oriented rectangles into pixel buffers
//!
//! This module owns the pixel buffer type and the scanline fill that
//! paints a part's rotated footprint into a query-window-sized buffer.

mod buffer;
mod fill;

#[cfg(test)]
mod tests;

// Public exports
pub use self::buffer::{PixelBuffer, BACKGROUND, FOREGROUND};
pub use self::fill::fill_rect;
