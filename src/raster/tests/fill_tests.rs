//! Tests for the scanline fill

extern crate std;

use crate::geometry::{OrientedRect, Point};
use crate::raster::{fill_rect, PixelBuffer, BACKGROUND, FOREGROUND};

fn window_50() -> OrientedRect {
    OrientedRect::new(Point::new(25.0, 25.0), 50.0, 50.0)
}

#[test]
fn test_rect_covering_window_fills_everything() {
    let window = window_50();
    let rect = OrientedRect::new(Point::new(25.0, 25.0), 50.0, 50.0);
    let mut buffer = PixelBuffer::new(50, 50);

    fill_rect(&mut buffer, &rect, &window);

    std::assert_eq!(buffer.coverage(), 50 * 50);
}

#[test]
fn test_centered_block() {
    // 10x10 part in the middle of a 50x50 window: a 10x10 block of
    // foreground centered in the buffer
    let window = window_50();
    let rect = OrientedRect::new(Point::new(25.0, 25.0), 10.0, 10.0);
    let mut buffer = PixelBuffer::new(50, 50);

    fill_rect(&mut buffer, &rect, &window);

    std::assert_eq!(buffer.coverage(), 100);
    for row in 0..50u32 {
        for col in 0..50u32 {
            let expected = if (20..30).contains(&col) && (20..30).contains(&row) {
                FOREGROUND
            } else {
                BACKGROUND
            };
            std::assert_eq!(buffer.get(col, row), expected, "pixel ({}, {})", col, row);
        }
    }
}

#[test]
fn test_rotated_block_becomes_diamond() {
    let window = window_50();
    let mut rect = OrientedRect::new(Point::new(25.0, 25.0), 10.0, 10.0);
    rect.rotate(std::f32::consts::FRAC_PI_4);
    let mut buffer = PixelBuffer::new(50, 50);

    fill_rect(&mut buffer, &rect, &window);

    // Area is preserved under rotation: roughly the 100 pixels of the
    // unrotated block, which is half the rotated extent's area
    let coverage = buffer.coverage() as i64;
    std::assert!((coverage - 100).abs() <= 15, "coverage {}", coverage);

    // Old block corners fall outside the diamond, the left tip inside
    std::assert_eq!(buffer.get(20, 20), BACKGROUND);
    std::assert_eq!(buffer.get(29, 29), BACKGROUND);
    std::assert_eq!(buffer.get(18, 25), FOREGROUND);
    std::assert_eq!(buffer.get(25, 25), FOREGROUND);
}

#[test]
fn test_rect_outside_window_paints_nothing() {
    // Rasterizing a disjoint part is a no-op, so skipping it via the
    // overlap test cannot change the output
    let window = window_50();
    let rect = OrientedRect::new(Point::new(200.0, 200.0), 10.0, 10.0);
    let mut buffer = PixelBuffer::new(50, 50);

    fill_rect(&mut buffer, &rect, &window);

    std::assert_eq!(buffer.coverage(), 0);
}

#[test]
fn test_rect_straddling_edge_is_cropped() {
    // Part centered on the window's left edge: only the right half of
    // its footprint lands in the buffer
    let window = window_50();
    let rect = OrientedRect::new(Point::new(0.0, 25.0), 10.0, 10.0);
    let mut buffer = PixelBuffer::new(50, 50);

    fill_rect(&mut buffer, &rect, &window);

    std::assert_eq!(buffer.coverage(), 50);
    std::assert_eq!(buffer.get(0, 25), FOREGROUND);
    std::assert_eq!(buffer.get(4, 25), FOREGROUND);
    std::assert_eq!(buffer.get(5, 25), BACKGROUND);
}

#[test]
fn test_overlapping_parts_paint_idempotently() {
    let window = window_50();
    let a = OrientedRect::new(Point::new(24.0, 25.0), 10.0, 10.0);
    let b = OrientedRect::new(Point::new(28.0, 25.0), 10.0, 10.0);
    let mut buffer = PixelBuffer::new(50, 50);

    fill_rect(&mut buffer, &a, &window);
    fill_rect(&mut buffer, &b, &window);

    // Union of two 10x10 blocks overlapping by 6 columns
    std::assert_eq!(buffer.coverage(), 100 + 100 - 60);
}
