//! Single-window extraction command
//!
//! This module implements the command for extracting one query window
//! from a part set and writing it out as an image file.

use log::info;

use crate::commands::Command;
use crate::commands::settings::RunSettings;
use crate::engine::errors::{RoiError, RoiResult};
use crate::engine::extract_window;
use crate::utils::logger::Logger;
use crate::utils::write_utils;

/// Command for extracting a single query window
pub struct ExtractCommand<'a> {
    /// Resolved run settings
    settings: RunSettings,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ExtractCommand<'a> {
    /// Create a new extract command
    ///
    /// # Arguments
    /// * `settings` - Resolved run settings; must carry a window
    /// * `logger` - Logger for recording operations
    pub fn new(settings: RunSettings, logger: &'a Logger) -> Self {
        ExtractCommand { settings, logger }
    }
}

impl Command for ExtractCommand<'_> {
    fn execute(&self) -> RoiResult<()> {
        let window = self.settings.window.ok_or_else(|| {
            RoiError::GenericError("Extract mode requires a query window".to_string())
        })?;

        let (parts, scale) = self.settings.load_part_set()?;
        info!(
            "Extracting {}x{} window centered at ({}, {})",
            window.width, window.height, window.x, window.y
        );

        let buffer = extract_window(&parts, &window, scale)?;
        write_utils::save_buffer(buffer, &self.settings.output)?;

        self.logger.log(&format!(
            "Extraction written to {}",
            self.settings.output.display()
        ))?;
        Ok(())
    }
}
