//! Line-oriented part descriptor decoding
//!
//! The text format carries one part per line as three floating-point
//! tokens, `x y angle_radians`, separated by whitespace or commas.
//! Blank lines and `#` comments are skipped. Any malformed line fails
//! the whole load with its line number.

use log::debug;

use crate::engine::errors::{RoiError, RoiResult};

use super::record::PartRecord;

/// Decode part records from line-oriented text
///
/// # Arguments
/// * `input` - Full text of the descriptor source
///
/// # Returns
/// All decoded records, or the first decoding failure
pub fn parse_text(input: &str) -> RoiResult<Vec<PartRecord>> {
    let mut records = Vec::new();

    for (index, raw_line) in input.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        records.push(parse_line(line, index + 1)?);
    }

    debug!("Decoded {} part records from text source", records.len());
    Ok(records)
}

/// Decode a single three-field record line
fn parse_line(line: &str, line_number: usize) -> RoiResult<PartRecord> {
    let fields: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect();

    if fields.len() != 3 {
        return Err(RoiError::MalformedRecord {
            line: line_number,
            message: format!("expected 3 fields (x, y, angle), found {}", fields.len()),
        });
    }

    let mut values = [0.0f32; 3];
    for (i, field) in fields.iter().enumerate() {
        values[i] = field.parse::<f32>().map_err(|_| RoiError::MalformedRecord {
            line: line_number,
            message: format!("invalid numeric field '{}'", field),
        })?;
    }

    Ok(PartRecord {
        x: values[0],
        y: values[1],
        angle: values[2],
    })
}
