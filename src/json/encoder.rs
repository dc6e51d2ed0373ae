//! JSON string encoding

use crate::config::{JsonStyle, PresentConfig};
use crate::core::Result;
use serde::Serialize;

/// Encode a value as compact JSON.
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_string(value)?)
}

/// Encode a value using the layout selected by `config`.
pub fn to_string_with<T>(value: &T, config: &PresentConfig) -> Result<String>
where
    T: Serialize + ?Sized,
{
    let encoded = match config.json_style {
        JsonStyle::Compact => serde_json::to_string(value)?,
        JsonStyle::Pretty => serde_json::to_string_pretty(value)?,
    };
    Ok(encoded)
}
