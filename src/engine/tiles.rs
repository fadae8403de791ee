//! Canvas-wide tile sweep
//!
//! Advances a tile-sized query window across a larger canvas, row-major,
//! rasterizing the part set into a fresh buffer per tile. Tiles are
//! independent: the part set is read-only during a sweep, so the
//! parallel run shares it freely across rayon workers. Only the
//! contained-part pruning optimization couples tiles to each other,
//! which is why it is sequential-only.

use log::{debug, info};
use rayon::prelude::*;

use crate::geometry::{classify, OrientedRect, Overlap, Point, PruneMode};
use crate::parts::PartSet;
use crate::raster::{fill_rect, PixelBuffer};

use super::errors::{RoiError, RoiResult};
use super::scale::UnitScale;

/// Sweep parameters in physical units
#[derive(Debug, Clone, Copy)]
pub struct SweepConfig {
    /// Canvas extent along Y
    pub canvas_height: f32,
    /// Canvas extent along X
    pub canvas_width: f32,
    /// Tile extent along Y
    pub tile_height: f32,
    /// Tile extent along X
    pub tile_width: f32,
    /// Whether tiles drop parts they fully contain from later tiles
    pub prune: PruneMode,
}

/// One rasterized tile of a sweep
#[derive(Debug)]
pub struct Tile {
    /// Row index in the sweep grid (top-down)
    pub row: u32,
    /// Column index in the sweep grid (left-right)
    pub col: u32,
    /// Window center in physical units, for addressing the tile
    pub center: Point,
    /// The rasterized pixel buffer
    pub buffer: PixelBuffer,
}

/// Drives repeated window extraction across a canvas
pub struct TileEngine<'a> {
    parts: &'a PartSet,
    scale: UnitScale,
    config: SweepConfig,
}

impl<'a> TileEngine<'a> {
    /// Create a tile engine over a part set
    ///
    /// # Arguments
    /// * `parts` - The scaled part collection, read-only for the sweep
    /// * `scale` - The physical-to-pixel factor the parts were built with
    /// * `config` - Canvas and tile dimensions plus the prune switch
    ///
    /// # Returns
    /// An engine, or `InvalidWindow` for non-positive dimensions
    pub fn new(parts: &'a PartSet, scale: UnitScale, config: SweepConfig) -> RoiResult<Self> {
        if !(config.tile_height > 0.0) || !(config.tile_width > 0.0) {
            return Err(RoiError::InvalidWindow {
                width: config.tile_width,
                height: config.tile_height,
            });
        }
        if !(config.canvas_height > 0.0) || !(config.canvas_width > 0.0) {
            return Err(RoiError::InvalidWindow {
                width: config.canvas_width,
                height: config.canvas_height,
            });
        }
        Ok(TileEngine { parts, scale, config })
    }

    /// Rows and columns of the sweep grid
    pub fn grid(&self) -> (u32, u32) {
        let rows = (self.config.canvas_height / self.config.tile_height).ceil() as u32;
        let cols = (self.config.canvas_width / self.config.tile_width).ceil() as u32;
        (rows, cols)
    }

    /// Total number of tiles the sweep visits
    pub fn tile_count(&self) -> u64 {
        let (rows, cols) = self.grid();
        rows as u64 * cols as u64
    }

    /// Run the sweep sequentially, row-major
    ///
    /// Tiles are handed to `sink` in sweep order. When pruning is
    /// enabled, parts fully contained by a tile are marked during that
    /// tile and dropped from consideration once it completes; the part
    /// set itself is never mutated.
    ///
    /// # Arguments
    /// * `sink` - Receives each tile; an error aborts the sweep
    pub fn run<F>(&self, mut sink: F) -> RoiResult<()>
    where
        F: FnMut(Tile) -> RoiResult<()>,
    {
        let (rows, cols) = self.grid();
        info!(
            "Sequential sweep: {}x{} tiles over {}x{} canvas",
            rows, cols, self.config.canvas_width, self.config.canvas_height
        );

        let mut retained = vec![true; self.parts.len()];

        for row in 0..rows {
            for col in 0..cols {
                let mut consumed = Vec::new();
                let tile = self.render_tile(row, col, Some(&retained), &mut consumed);

                // Mark-then-filter: drop consumed parts only after the
                // tile that contained them is done
                if self.config.prune == PruneMode::Enabled {
                    for index in consumed {
                        retained[index] = false;
                    }
                }

                sink(tile)?;
            }
        }
        Ok(())
    }

    /// Run the sweep across rayon workers
    ///
    /// The part set is shared read-only; no ordering is guaranteed on
    /// sink invocation. Pruning is rejected because it would couple
    /// tiles through shared mutable state.
    ///
    /// # Arguments
    /// * `sink` - Receives each tile; the first error aborts the sweep
    pub fn run_parallel<F>(&self, sink: F) -> RoiResult<()>
    where
        F: Fn(Tile) -> RoiResult<()> + Sync,
    {
        if self.config.prune == PruneMode::Enabled {
            return Err(RoiError::PruneUnderParallel);
        }

        let (rows, cols) = self.grid();
        info!(
            "Parallel sweep: {}x{} tiles over {}x{} canvas",
            rows, cols, self.config.canvas_width, self.config.canvas_height
        );

        (0..rows as u64 * cols as u64)
            .into_par_iter()
            .try_for_each(|index| {
                let row = (index / cols as u64) as u32;
                let col = (index % cols as u64) as u32;
                let mut consumed = Vec::new();
                sink(self.render_tile(row, col, None, &mut consumed))
            })
    }

    /// Rasterize one tile of the sweep
    ///
    /// `retained` masks out parts pruned by earlier tiles; `consumed`
    /// collects the indices this tile fully contains.
    fn render_tile(
        &self,
        row: u32,
        col: u32,
        retained: Option<&[bool]>,
        consumed: &mut Vec<usize>,
    ) -> Tile {
        let center = Point::new(
            col as f32 * self.config.tile_width + self.config.tile_width / 2.0,
            row as f32 * self.config.tile_height + self.config.tile_height / 2.0,
        );

        let window = OrientedRect::new(
            self.scale.point_to_pixels(center),
            self.scale.to_pixels(self.config.tile_height),
            self.scale.to_pixels(self.config.tile_width),
        );

        let mut buffer = PixelBuffer::new(
            window.width().ceil() as u32,
            window.height().ceil() as u32,
        );

        for (index, part) in self.parts.iter().enumerate() {
            if retained.is_some_and(|mask| !mask[index]) {
                continue;
            }
            match classify(part, &window) {
                Overlap::Disjoint => continue,
                Overlap::Contained => {
                    consumed.push(index);
                    fill_rect(&mut buffer, part, &window);
                }
                Overlap::Partial => fill_rect(&mut buffer, part, &window),
            }
        }

        debug!("Rendered tile ({}, {}) centered at ({}, {})", row, col, center.x, center.y);
        Tile { row, col, center, buffer }
    }
}
