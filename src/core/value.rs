use crate::core::{PresentError, Result};
use serde::Serialize;
use std::fmt;

pub use serde_json::Value;

/// Ordered mapping of attribute names to values.
///
/// Insertion order is preserved (serde_json `preserve_order`), so the keys
/// of a presenter's output come out in the order the presenter declared them.
pub type Attributes = serde_json::Map<String, Value>;

/// Immutable keyed view over a presenter's attributes.
///
/// There is no way to write through a view. A lookup for an absent key is an
/// error, while a key that maps to `null` is present.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct AttributeView {
    attributes: Attributes,
}

impl AttributeView {
    pub fn new(attributes: Attributes) -> Self {
        Self { attributes }
    }

    pub fn get(&self, key: &str) -> Result<&Value> {
        self.attributes
            .get(key)
            .ok_or_else(|| PresentError::UndefinedKey(key.to_string()))
    }

    /// Like [`AttributeView::get`], but a miss is `None` instead of an error.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attributes.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn as_attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn into_attributes(self) -> Attributes {
        self.attributes
    }
}

impl From<Attributes> for AttributeView {
    fn from(attributes: Attributes) -> Self {
        Self::new(attributes)
    }
}

impl fmt::Display for AttributeView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Value::Object(self.attributes.clone()))
    }
}
