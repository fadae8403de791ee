pub mod geometry;
pub mod raster;
pub mod parts;
pub mod engine;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::RoiKit;

pub use engine::{RoiError, RoiResult, TileEngine, UnitScale, WindowSpec};
pub use geometry::{Bounds, OrientedRect, Point, PruneMode};
pub use parts::{PartGeometry, PartRecord, PartSet};
pub use raster::PixelBuffer;
