//! Custom error types for ROI extraction

use std::fmt;
use std::io;

/// Extraction-specific error types
#[derive(Debug)]
pub enum RoiError {
    /// I/O error
    IoError(io::Error),
    /// Image encoding error
    ImageError(image::ImageError),
    /// A part record could not be decoded
    MalformedRecord { line: usize, message: String },
    /// Declared part count does not match the records present
    CountMismatch { declared: usize, actual: usize },
    /// Query window or tile with non-positive dimensions
    InvalidWindow { width: f32, height: f32 },
    /// Non-positive unit-to-pixel scale factor
    InvalidScale(f32),
    /// Contained-part pruning requested for a parallel sweep
    PruneUnderParallel,
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for RoiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoiError::IoError(e) => write!(f, "I/O error: {}", e),
            RoiError::ImageError(e) => write!(f, "Image encoding error: {}", e),
            RoiError::MalformedRecord { line, message } => {
                write!(f, "Malformed part record at line {}: {}", line, message)
            }
            RoiError::CountMismatch { declared, actual } => {
                write!(f, "Part count mismatch: document declares {} but contains {}", declared, actual)
            }
            RoiError::InvalidWindow { width, height } => {
                write!(f, "Invalid window dimensions: {}x{}", width, height)
            }
            RoiError::InvalidScale(s) => write!(f, "Invalid scale factor: {}", s),
            RoiError::PruneUnderParallel => {
                write!(f, "Contained-part pruning is only valid for a sequential sweep")
            }
            RoiError::GenericError(msg) => write!(f, "ROI error: {}", msg),
        }
    }
}

impl std::error::Error for RoiError {}

impl From<io::Error> for RoiError {
    fn from(error: io::Error) -> Self {
        RoiError::IoError(error)
    }
}

impl From<image::ImageError> for RoiError {
    fn from(error: image::ImageError) -> Self {
        RoiError::ImageError(error)
    }
}

impl From<String> for RoiError {
    fn from(msg: String) -> Self {
        RoiError::GenericError(msg)
    }
}

/// Result type for ROI operations
pub type RoiResult<T> = Result<T, RoiError>;
