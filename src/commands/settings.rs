//! Resolved run settings
//!
//! Merges an optional TOML job file with CLI flags into one concrete
//! run description. Flags win over file values; whatever is still
//! missing after the merge is reported before any work starts.

use std::fs;
use std::path::PathBuf;

use clap::ArgMatches;
use log::info;

use crate::engine::errors::{RoiError, RoiResult};
use crate::engine::{InputFormat, JobConfig, SizeSpec, UnitScale, WindowSpec};
use crate::parts::{parse_json, parse_text, PartGeometry, PartSet};

/// A fully resolved run description
#[derive(Debug)]
pub struct RunSettings {
    /// Path to the part descriptor source
    pub input: PathBuf,
    /// Descriptor source format
    pub format: InputFormat,
    /// Shared part height/width (physical units)
    pub part: PartGeometry,
    /// Pixels per physical unit
    pub scale_factor: f32,
    /// Single query window (extract mode)
    pub window: Option<WindowSpec>,
    /// Canvas size (sweep mode)
    pub canvas: Option<SizeSpec>,
    /// Tile size (sweep mode)
    pub tile: Option<SizeSpec>,
    /// Drop parts once a tile fully contains them
    pub prune: bool,
    /// Process tiles across worker threads
    pub parallel: bool,
    /// Output image file or sweep directory
    pub output: PathBuf,
}

impl RunSettings {
    /// Resolve settings from CLI arguments and an optional job file
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// The merged settings, or an error naming the missing piece
    pub fn resolve(args: &ArgMatches) -> RoiResult<Self> {
        let job = match args.get_one::<String>("config") {
            Some(path) => {
                info!("Loading job file: {}", path);
                Some(JobConfig::load(path.as_ref())?)
            }
            None => None,
        };

        let input = args
            .get_one::<String>("input")
            .map(PathBuf::from)
            .or_else(|| job.as_ref().map(|j| j.input.clone()))
            .ok_or_else(|| RoiError::GenericError("Missing part input file".to_string()))?;

        let format = match args.get_one::<String>("format") {
            Some(name) => InputFormat::from_name(name)?,
            None => job.as_ref().map(|j| j.format).unwrap_or_default(),
        };

        let part = match (
            args.get_one::<f32>("part-height"),
            args.get_one::<f32>("part-width"),
        ) {
            (Some(&height), Some(&width)) => PartGeometry::new(height, width),
            (None, None) => job
                .as_ref()
                .map(|j| j.part)
                .ok_or_else(|| RoiError::GenericError("Missing part dimensions".to_string()))?,
            _ => {
                return Err(RoiError::GenericError(
                    "Part height and width must be given together".to_string(),
                ))
            }
        };

        let scale_factor = args
            .get_one::<f32>("scale")
            .copied()
            .or_else(|| job.as_ref().map(|j| j.scale))
            .ok_or_else(|| RoiError::GenericError("Missing scale factor".to_string()))?;

        let window = match args.get_one::<String>("window") {
            Some(spec) => Some(parse_window(spec)?),
            None => job.as_ref().and_then(|j| j.window),
        };

        let canvas = match args.get_one::<String>("canvas") {
            Some(spec) => Some(parse_size(spec)?),
            None => job.as_ref().and_then(|j| j.canvas),
        };

        let tile = match args.get_one::<String>("tile") {
            Some(spec) => Some(parse_size(spec)?),
            None => job.as_ref().and_then(|j| j.tile),
        };

        let prune = args.get_flag("prune") || job.as_ref().is_some_and(|j| j.prune);
        let parallel = args.get_flag("parallel") || job.as_ref().is_some_and(|j| j.parallel);

        let output = args
            .get_one::<String>("output")
            .map(PathBuf::from)
            .or_else(|| job.as_ref().map(|j| j.output.clone()))
            .ok_or_else(|| RoiError::GenericError("Missing output path".to_string()))?;

        Ok(RunSettings {
            input,
            format,
            part,
            scale_factor,
            window,
            canvas,
            tile,
            prune,
            parallel,
            output,
        })
    }

    /// Read and decode the part source, then build the scaled set
    ///
    /// # Returns
    /// The part set together with the scale it was built with
    pub fn load_part_set(&self) -> RoiResult<(PartSet, UnitScale)> {
        let text = fs::read_to_string(&self.input)?;
        let records = match self.format {
            InputFormat::Text => parse_text(&text)?,
            InputFormat::Json => parse_json(&text)?,
        };
        info!("Loaded {} part records from {}", records.len(), self.input.display());

        let scale = UnitScale::pixels_per_unit(self.scale_factor)?;
        Ok((PartSet::build(&records, self.part, scale), scale))
    }
}

/// Parse a size given as "WIDTHxHEIGHT"
pub fn parse_size(spec: &str) -> RoiResult<SizeSpec> {
    let parts: Vec<&str> = spec.split('x').collect();
    if parts.len() != 2 {
        return Err(RoiError::GenericError(format!(
            "Size must be WIDTHxHEIGHT, got '{}'",
            spec
        )));
    }

    let width = parts[0]
        .trim()
        .parse::<f32>()
        .map_err(|_| RoiError::GenericError(format!("Invalid width value '{}'", parts[0])))?;
    let height = parts[1]
        .trim()
        .parse::<f32>()
        .map_err(|_| RoiError::GenericError(format!("Invalid height value '{}'", parts[1])))?;

    Ok(SizeSpec { height, width })
}

/// Parse a query window given as "CENTER_X,CENTER_Y,WIDTH,HEIGHT"
pub fn parse_window(spec: &str) -> RoiResult<WindowSpec> {
    let parts: Vec<&str> = spec.split(',').collect();
    if parts.len() != 4 {
        return Err(RoiError::GenericError(format!(
            "Window must be CENTER_X,CENTER_Y,WIDTH,HEIGHT, got '{}'",
            spec
        )));
    }

    let mut values = [0.0f32; 4];
    for (i, token) in parts.iter().enumerate() {
        values[i] = token
            .trim()
            .parse::<f32>()
            .map_err(|_| RoiError::GenericError(format!("Invalid window value '{}'", token)))?;
    }

    Ok(WindowSpec::new(values[0], values[1], values[3], values[2]))
}
