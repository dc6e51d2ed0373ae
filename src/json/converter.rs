//! `serde` to attribute-map conversion

use crate::core::{Attributes, PresentError, Result, Value};
use serde::Serialize;
use tracing::{Level, event};

/// Convert any serializable value into a JSON value.
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_value(value)?)
}

/// Convert a serializable struct or map into an ordered attribute map.
///
/// Fields keep their declaration order. Values that do not serialize to a
/// JSON object (numbers, sequences, unit structs) are rejected.
pub fn attributes_of<T>(value: &T) -> Result<Attributes>
where
    T: Serialize + ?Sized,
{
    match to_value(value)? {
        Value::Object(attributes) => Ok(attributes),
        other => Err(PresentError::Serialization(format!(
            "{} serializes to {}, expected an object",
            std::any::type_name::<T>(),
            json_kind(&other)
        ))),
    }
}

/// Like [`attributes_of`], for callers that cannot return an error.
///
/// A failed conversion is reported as a warning event and yields `None`.
pub fn record_attributes<T>(value: &T) -> Option<Attributes>
where
    T: Serialize + ?Sized,
{
    match attributes_of(value) {
        Ok(attributes) => Some(attributes),
        Err(err) => {
            event!(
                Level::WARN,
                record = std::any::type_name::<T>(),
                error = %err,
                "record attributes unavailable"
            );
            None
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
