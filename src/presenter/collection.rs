use crate::config::PresentConfig;
use crate::core::{Attributes, Result, Value};
use crate::json;
use crate::presenter::{Presented, Presenter};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::ops::Index;

/// Ordered presenters, one per input record.
///
/// Built once per presentation call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentedCollection<P> {
    items: Vec<P>,
}

impl<P> PresentedCollection<P> {
    /// Maps each record through `make`, preserving input order.
    pub fn from_records<'r, R, I, F>(records: I, make: F) -> Self
    where
        R: 'r,
        I: IntoIterator<Item = &'r R>,
        F: FnMut(&'r R) -> P,
    {
        Self {
            items: records.into_iter().map(make).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&P> {
        self.items.get(index)
    }

    pub fn first(&self) -> Option<&P> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&P> {
        self.items.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[P] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<P> {
        self.items
    }
}

impl<P: Presenter> PresentedCollection<P> {
    pub fn to_attributes(&self) -> Vec<Attributes> {
        self.items.iter().map(Presenter::to_attributes).collect()
    }

    pub fn to_value(&self) -> Value {
        Value::Array(
            self.items
                .iter()
                .map(|presenter| Value::Object(presenter.to_attributes()))
                .collect(),
        )
    }

    pub fn to_json(&self) -> Result<String> {
        json::to_string(self)
    }

    pub fn to_json_with(&self, config: &PresentConfig) -> Result<String> {
        json::to_string_with(self, config)
    }
}

impl<P: Presenter> Serialize for PresentedCollection<P> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.items.len()))?;
        for presenter in &self.items {
            seq.serialize_element(&Presented(presenter))?;
        }
        seq.end()
    }
}

impl<P> Index<usize> for PresentedCollection<P> {
    type Output = P;

    fn index(&self, index: usize) -> &P {
        &self.items[index]
    }
}

impl<P> IntoIterator for PresentedCollection<P> {
    type Item = P;
    type IntoIter = std::vec::IntoIter<P>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, P> IntoIterator for &'a PresentedCollection<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
