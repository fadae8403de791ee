//! CLI command implementations
//!
//! Commands follow a simple Command pattern: the factory resolves the
//! parsed CLI arguments (and optional job file) into run settings and
//! picks the matching command object.

mod settings;
mod extract_command;
mod tile_command;

use clap::ArgMatches;

use crate::engine::errors::RoiResult;
use crate::utils::logger::Logger;

pub use extract_command::ExtractCommand;
pub use settings::{parse_size, parse_window, RunSettings};
pub use tile_command::TileCommand;

/// A resolved CLI run, ready to execute
///
/// One implementation per run mode: `ExtractCommand` renders a single
/// query window, `TileCommand` sweeps a canvas tile by tile. Settings
/// are captured at construction so `execute` takes no arguments.
pub trait Command {
    /// Run the operation to completion
    fn execute(&self) -> RoiResult<()>;
}

/// Resolves parsed CLI arguments into the command to run
pub trait CommandFactory<'a> {
    /// Pick and build the command for this invocation
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger the command reports through
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> RoiResult<Box<dyn Command + 'a>>;
}

/// The default command factory for the roikit CLI
pub struct RoikitCommandFactory;

impl RoikitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        RoikitCommandFactory
    }
}

impl Default for RoikitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for RoikitCommandFactory {
    fn create_command(
        &self,
        args: &ArgMatches,
        logger: &'a Logger,
    ) -> RoiResult<Box<dyn Command + 'a>> {
        let settings = RunSettings::resolve(args)?;

        // Canvas/tile sizes select sweep mode; otherwise a single
        // window extraction
        if settings.canvas.is_some() || settings.tile.is_some() {
            Ok(Box::new(TileCommand::new(settings, logger)))
        } else {
            Ok(Box::new(ExtractCommand::new(settings, logger)))
        }
    }
}
