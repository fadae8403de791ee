//! Library facade
//!
//! A small convenience wrapper over the engine for programmatic use,
//! mirroring the two CLI operations: single-window extraction and the
//! canvas tile sweep.

use std::fs;
use std::path::Path;

use log::info;

use crate::engine::errors::RoiResult;
use crate::engine::{extract_window, SweepConfig, TileEngine, UnitScale, WindowSpec};
use crate::geometry::PruneMode;
use crate::parts::{parse_json, parse_text, PartGeometry, PartSet};
use crate::raster::PixelBuffer;
use crate::engine::InputFormat;
use crate::utils::write_utils;

/// Main interface to the roikit library
pub struct RoiKit {
    parts: PartSet,
    scale: UnitScale,
}

impl RoiKit {
    /// Load a part source and build the engine state
    ///
    /// # Arguments
    /// * `input_path` - Path to the part descriptor file
    /// * `format` - Descriptor source format
    /// * `geometry` - Height/width shared by every part (physical units)
    /// * `scale` - Physical-to-pixel conversion for all coordinates
    ///
    /// # Returns
    /// A RoiKit instance, or a decode/validation error
    pub fn load(
        input_path: &Path,
        format: InputFormat,
        geometry: PartGeometry,
        scale: UnitScale,
    ) -> RoiResult<Self> {
        let text = fs::read_to_string(input_path)?;
        let records = match format {
            InputFormat::Text => parse_text(&text)?,
            InputFormat::Json => parse_json(&text)?,
        };
        info!("Loaded {} part records from {}", records.len(), input_path.display());

        Ok(RoiKit {
            parts: PartSet::build(&records, geometry, scale),
            scale,
        })
    }

    /// Build a RoiKit directly from an existing part set
    pub fn from_parts(parts: PartSet, scale: UnitScale) -> Self {
        RoiKit { parts, scale }
    }

    /// Number of loaded parts
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Extract one query window into a pixel buffer
    ///
    /// # Arguments
    /// * `window` - Query window in the same physical units as the input
    pub fn extract(&self, window: &WindowSpec) -> RoiResult<PixelBuffer> {
        extract_window(&self.parts, window, self.scale)
    }

    /// Extract one query window and save it as an image file
    ///
    /// # Arguments
    /// * `window` - Query window in physical units
    /// * `output_path` - Destination image file; format by extension
    pub fn extract_to_file(&self, window: &WindowSpec, output_path: &Path) -> RoiResult<()> {
        let buffer = self.extract(window)?;
        write_utils::save_buffer(buffer, output_path)
    }

    /// Sweep a canvas and write one image per tile into a directory
    ///
    /// # Arguments
    /// * `config` - Canvas and tile dimensions plus the prune switch
    /// * `output_dir` - Directory for the per-tile images
    /// * `parallel` - Process tiles across worker threads
    pub fn tile_to_dir(
        &self,
        config: SweepConfig,
        output_dir: &Path,
        parallel: bool,
    ) -> RoiResult<()> {
        let engine = TileEngine::new(&self.parts, self.scale, config)?;
        fs::create_dir_all(output_dir)?;

        let sink = |tile: crate::engine::Tile| -> RoiResult<()> {
            let path = write_utils::tile_path(output_dir, tile.row, tile.col, tile.center);
            write_utils::save_buffer(tile.buffer, &path)
        };

        if parallel {
            engine.run_parallel(sink)
        } else {
            engine.run(sink)
        }
    }

    /// Sweep a canvas, collecting every tile in sweep order
    ///
    /// # Arguments
    /// * `config` - Canvas and tile dimensions plus the prune switch
    pub fn tile_to_buffers(&self, config: SweepConfig) -> RoiResult<Vec<crate::engine::Tile>> {
        let engine = TileEngine::new(&self.parts, self.scale, config)?;
        let mut tiles = Vec::with_capacity(engine.tile_count() as usize);
        engine.run(|tile| {
            tiles.push(tile);
            Ok(())
        })?;
        Ok(tiles)
    }
}

/// Convenience constructor for a sweep configuration without pruning
pub fn sweep(canvas_height: f32, canvas_width: f32, tile_height: f32, tile_width: f32) -> SweepConfig {
    SweepConfig {
        canvas_height,
        canvas_width,
        tile_height,
        tile_width,
        prune: PruneMode::Disabled,
    }
}
