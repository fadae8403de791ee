//! Output writing utilities
//!
//! Helper functions for turning pixel buffers into image files. The
//! container format is picked by file extension through the image crate;
//! the engine itself never assumes a specific encoding.

use std::path::{Path, PathBuf};

use log::debug;

use crate::engine::errors::RoiResult;
use crate::geometry::Point;
use crate::raster::PixelBuffer;

/// Save a pixel buffer as an image file
///
/// The format follows the path's extension (e.g. `.png`, `.bmp`); both
/// give a lossless bi-level raster in an 8-bit gray channel.
///
/// # Arguments
/// * `buffer` - The rasterized buffer to persist
/// * `path` - Destination file path
pub fn save_buffer(buffer: PixelBuffer, path: &Path) -> RoiResult<()> {
    let (width, height) = (buffer.width(), buffer.height());
    buffer.into_image().save(path)?;
    debug!("Wrote {}x{} image to {}", width, height, path.display());
    Ok(())
}

/// Build the output path for one tile of a sweep
///
/// Tiles are keyed by grid position and window center so a sweep's
/// files sort in row-major order and can be mapped back onto the
/// canvas without extra bookkeeping.
///
/// # Arguments
/// * `dir` - Output directory for the sweep
/// * `row` - Tile row index
/// * `col` - Tile column index
/// * `center` - Window center in physical units
pub fn tile_path(dir: &Path, row: u32, col: u32, center: Point) -> PathBuf {
    dir.join(format!(
        "tile_r{:03}_c{:03}_x{}_y{}.png",
        row, col, center.x, center.y
    ))
}
