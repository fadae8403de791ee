//! Part descriptor decoding and the part collection
//!
//! Decoders turn a text or JSON descriptor source into typed
//! `PartRecord`s before any geometry runs; a decoding failure fails the
//! whole load, so a partially decoded part set never reaches the engine.

mod record;
mod text;
mod json;
mod set;


// Public exports
pub use self::record::{PartGeometry, PartRecord};
pub use self::text::parse_text;
pub use self::json::parse_json;
pub use self::set::PartSet;
