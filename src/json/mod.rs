//! JSON conversion helpers
//!
//! Bridges `serde` types and the attribute maps presenters produce.
//!
//! # Architecture
//!
//! - `converter.rs` - `Serialize` values to `Attributes`
//! - `encoder.rs` - attribute maps and presentations to JSON strings

mod converter;
mod encoder;

pub use converter::{attributes_of, record_attributes, to_value};
pub use encoder::{to_string, to_string_with};
