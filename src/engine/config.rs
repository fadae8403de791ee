//! TOML job configuration
//!
//! A job file describes a full run: where the part descriptors come
//! from, the shared part geometry, the scale, and either a single
//! query window or a canvas sweep. CLI flags override file values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::parts::PartGeometry;

use super::errors::{RoiError, RoiResult};
use super::extract::WindowSpec;

/// Part descriptor source format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Line-oriented `x y angle` records
    #[default]
    Text,
    /// Structured document with a count and keyed part list
    Json,
}

impl InputFormat {
    /// Parse a format name as given on the command line
    pub fn from_name(name: &str) -> RoiResult<Self> {
        match name {
            "text" => Ok(InputFormat::Text),
            "json" => Ok(InputFormat::Json),
            other => Err(RoiError::GenericError(format!(
                "Unknown input format '{}' (expected 'text' or 'json')",
                other
            ))),
        }
    }
}

/// A height/width pair in physical units
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SizeSpec {
    /// Extent along Y
    pub height: f32,
    /// Extent along X
    pub width: f32,
}

/// A complete run description loaded from a TOML file
#[derive(Debug, Deserialize)]
pub struct JobConfig {
    /// Path to the part descriptor source
    pub input: PathBuf,
    /// Descriptor source format
    #[serde(default)]
    pub format: InputFormat,
    /// Shared part height/width
    pub part: PartGeometry,
    /// Pixels per physical unit
    pub scale: f32,
    /// Single query window (extract mode)
    pub window: Option<WindowSpec>,
    /// Canvas size (sweep mode, together with `tile`)
    pub canvas: Option<SizeSpec>,
    /// Tile size (sweep mode)
    pub tile: Option<SizeSpec>,
    /// Drop parts once a tile fully contains them
    #[serde(default)]
    pub prune: bool,
    /// Process tiles across worker threads
    #[serde(default)]
    pub parallel: bool,
    /// Output image file (extract mode) or directory (sweep mode)
    pub output: PathBuf,
}

impl JobConfig {
    /// Load a job configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the TOML job file
    ///
    /// # Returns
    /// The decoded configuration, or an error for unreadable or
    /// malformed files
    pub fn load(path: &Path) -> RoiResult<Self> {
        let text = fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| {
            RoiError::GenericError(format!("Invalid job file {}: {}", path.display(), e))
        })
    }
}
