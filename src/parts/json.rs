//! Structured part descriptor decoding
//!
//! The JSON format is a document with an explicit part count and a keyed
//! list of per-part fields:
//!
//! ```json
//! { "count": 2, "parts": [ { "x": 1.0, "y": 2.0, "angle": 0.5 } ] }
//! ```
//!
//! The decode is fully typed; a document whose count disagrees with the
//! list length is rejected before any geometry is built.

use log::debug;
use serde::Deserialize;

use crate::engine::errors::{RoiError, RoiResult};

use super::record::PartRecord;

/// The JSON descriptor document shape
#[derive(Debug, Deserialize)]
struct PartDocument {
    /// Declared number of parts
    count: usize,
    /// Per-part records
    parts: Vec<PartRecord>,
}

/// Decode part records from a JSON descriptor document
///
/// # Arguments
/// * `input` - Full text of the JSON document
///
/// # Returns
/// All decoded records, or a decode/validation failure
pub fn parse_json(input: &str) -> RoiResult<Vec<PartRecord>> {
    let document: PartDocument = serde_json::from_str(input)
        .map_err(|e| RoiError::MalformedRecord {
            line: e.line(),
            message: e.to_string(),
        })?;

    if document.count != document.parts.len() {
        return Err(RoiError::CountMismatch {
            declared: document.count,
            actual: document.parts.len(),
        });
    }

    debug!("Decoded {} part records from JSON source", document.parts.len());
    Ok(document.parts)
}
