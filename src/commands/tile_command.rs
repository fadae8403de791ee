//! Canvas sweep command
//!
//! This module implements the command for sweeping a tile-sized window
//! across a canvas and writing one image per tile, sequentially or
//! across worker threads.

use std::fs;
use std::time::Instant;

use log::info;

use crate::commands::Command;
use crate::commands::settings::RunSettings;
use crate::engine::errors::{RoiError, RoiResult};
use crate::engine::{SweepConfig, Tile, TileEngine};
use crate::geometry::PruneMode;
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;
use crate::utils::write_utils;

/// Command for tiling a canvas into per-window images
pub struct TileCommand<'a> {
    /// Resolved run settings
    settings: RunSettings,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> TileCommand<'a> {
    /// Create a new tile command
    ///
    /// # Arguments
    /// * `settings` - Resolved run settings; must carry canvas and tile sizes
    /// * `logger` - Logger for recording operations
    pub fn new(settings: RunSettings, logger: &'a Logger) -> Self {
        TileCommand { settings, logger }
    }

    /// Build the sweep configuration from the settings
    fn sweep_config(&self) -> RoiResult<SweepConfig> {
        let canvas = self.settings.canvas.ok_or_else(|| {
            RoiError::GenericError("Sweep mode requires a canvas size".to_string())
        })?;
        let tile = self.settings.tile.ok_or_else(|| {
            RoiError::GenericError("Sweep mode requires a tile size".to_string())
        })?;

        let prune = if self.settings.prune {
            PruneMode::Enabled
        } else {
            PruneMode::Disabled
        };

        Ok(SweepConfig {
            canvas_height: canvas.height,
            canvas_width: canvas.width,
            tile_height: tile.height,
            tile_width: tile.width,
            prune,
        })
    }
}

impl Command for TileCommand<'_> {
    fn execute(&self) -> RoiResult<()> {
        let config = self.sweep_config()?;
        let (parts, scale) = self.settings.load_part_set()?;

        let engine = TileEngine::new(&parts, scale, config)?;
        fs::create_dir_all(&self.settings.output)?;

        let progress = ProgressTracker::new(engine.tile_count(), "Tiling canvas");
        let output_dir = self.settings.output.clone();
        let started = Instant::now();

        let sink = |tile: Tile| -> RoiResult<()> {
            let path = write_utils::tile_path(&output_dir, tile.row, tile.col, tile.center);
            write_utils::save_buffer(tile.buffer, &path)?;
            progress.increment(1);
            Ok(())
        };

        if self.settings.parallel {
            info!("Running sweep across worker threads");
            engine.run_parallel(sink)?;
        } else {
            engine.run(sink)?;
        }
        progress.finish();

        self.logger
            .log_sweep_summary(engine.tile_count(), parts.len(), started.elapsed())?;
        Ok(())
    }
}
