//! Utility modules for common functionality
//!
//! Logging, progress reporting and output writing used by the CLI
//! commands and the library facade.

pub mod logger;
pub(crate) mod progress;
pub(crate) mod write_utils;

#[cfg(test)]
mod tests;
