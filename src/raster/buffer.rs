//! Pixel buffer for rasterized query windows
//!
//! Each extraction owns a fresh buffer sized to its query window; nothing
//! in the engine retains a buffer once it has been handed to the caller,
//! and there is no shared drawing context between extractions.

use image::GrayImage;

/// Background pixel value (black)
pub const BACKGROUND: u8 = 0;

/// Foreground pixel value (white)
pub const FOREGROUND: u8 = 255;

/// A single-channel pixel grid sized to a query window
///
/// Pixels are stored row-major, one byte per pixel, bi-level by
/// convention: [`BACKGROUND`] everywhere until the rasterizer paints
/// [`FOREGROUND`] over covered pixels.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Create a new buffer cleared to background
    ///
    /// # Arguments
    /// * `width` - Buffer width in pixels
    /// * `height` - Buffer height in pixels
    pub fn new(width: u32, height: u32) -> Self {
        PixelBuffer {
            width,
            height,
            pixels: vec![BACKGROUND; (width as usize) * (height as usize)],
        }
    }

    /// Buffer width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Read the pixel at (col, row)
    pub fn get(&self, col: u32, row: u32) -> u8 {
        self.pixels[(row as usize) * (self.width as usize) + col as usize]
    }

    /// Paint a horizontal run of foreground pixels on one row
    ///
    /// The run covers columns `start..end` (exclusive end); callers are
    /// expected to have clamped the run to the buffer already.
    pub fn fill_span(&mut self, row: u32, start: u32, end: u32) {
        let offset = (row as usize) * (self.width as usize);
        for px in &mut self.pixels[offset + start as usize..offset + end as usize] {
            *px = FOREGROUND;
        }
    }

    /// Number of foreground pixels in the buffer
    pub fn coverage(&self) -> usize {
        self.pixels.iter().filter(|&&px| px == FOREGROUND).count()
    }

    /// Convert the buffer into a grayscale image for encoding
    pub fn into_image(self) -> GrayImage {
        // from_raw only fails on a length mismatch, which the
        // constructor rules out
        GrayImage::from_raw(self.width, self.height, self.pixels)
            .unwrap_or_else(|| GrayImage::new(self.width, self.height))
    }
}
