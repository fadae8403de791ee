//! Tests for single-window extraction

extern crate std;

use crate::engine::errors::RoiError;
use crate::engine::extract::{extract_window, WindowSpec};
use crate::engine::scale::UnitScale;
use crate::parts::{parse_text, PartGeometry, PartSet};
use crate::raster::BACKGROUND;

fn unit_scale() -> UnitScale {
    UnitScale::pixels_per_unit(1.0).unwrap()
}

#[test]
fn test_invalid_window_rejected() {
    let set = PartSet::build(&[], PartGeometry::new(1.0, 1.0), unit_scale());

    let result = extract_window(&set, &WindowSpec::new(0.0, 0.0, -5.0, 10.0), unit_scale());
    std::assert!(matches!(result, Err(RoiError::InvalidWindow { .. })));

    let result = extract_window(&set, &WindowSpec::new(0.0, 0.0, 10.0, 0.0), unit_scale());
    std::assert!(matches!(result, Err(RoiError::InvalidWindow { .. })));
}

#[test]
fn test_buffer_sized_to_window() {
    let set = PartSet::build(&[], PartGeometry::new(1.0, 1.0), unit_scale());
    let buffer =
        extract_window(&set, &WindowSpec::new(25.0, 25.0, 30.0, 50.0), unit_scale()).unwrap();

    std::assert_eq!(buffer.width(), 50);
    std::assert_eq!(buffer.height(), 30);
    std::assert_eq!(buffer.coverage(), 0);
}

#[test]
fn test_two_parts_from_text_records() {
    // Two non-overlapping 4x19 parts, one axis-aligned and one rotated,
    // both fully inside a 50x50 window
    let records = parse_text("12.0 12.0 0.0\n35.0 33.0 0.5236\n").unwrap();
    let set = PartSet::build(&records, PartGeometry::new(19.0, 4.0), unit_scale());

    let buffer =
        extract_window(&set, &WindowSpec::new(25.0, 25.0, 50.0, 50.0), unit_scale()).unwrap();

    // Each part paints about its 4x19 = 76 pixel footprint
    let coverage = buffer.coverage() as i64;
    std::assert!((coverage - 152).abs() <= 16, "coverage {}", coverage);

    // The quadrilaterals stay disjoint: an empty column strip separates
    // the axis-aligned part (cols <= 13) from the rotated one (cols >= 25)
    for row in 0..50u32 {
        for col in 15..24u32 {
            std::assert_eq!(buffer.get(col, row), BACKGROUND, "pixel ({}, {})", col, row);
        }
    }
}

#[test]
fn test_scaled_extraction_doubles_footprint() {
    let records = parse_text("25.0 25.0 0.0\n").unwrap();
    let scale = UnitScale::pixels_per_unit(2.0).unwrap();
    let set = PartSet::build(&records, PartGeometry::new(10.0, 10.0), scale);

    let buffer = extract_window(&set, &WindowSpec::new(25.0, 25.0, 50.0, 50.0), scale).unwrap();

    std::assert_eq!(buffer.width(), 100);
    std::assert_eq!(buffer.height(), 100);
    // 10x10 physical units at 2 px/unit paints a 20x20 block
    std::assert_eq!(buffer.coverage(), 400);
}
