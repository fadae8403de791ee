//! Extraction engine
//!
//! Ties the geometry and raster layers together: single-window
//! extraction, the canvas-wide tile sweep, unit scaling and the run
//! configuration, plus the crate-wide error types.

pub mod errors;
pub mod scale;
mod extract;
mod tiles;
mod config;

#[cfg(test)]
mod tests;

// Re-export key types
pub use self::errors::{RoiError, RoiResult};
pub use self::scale::UnitScale;
pub use self::extract::{extract_window, WindowSpec};
pub use self::tiles::{SweepConfig, Tile, TileEngine};
pub use self::config::{InputFormat, JobConfig, SizeSpec};
