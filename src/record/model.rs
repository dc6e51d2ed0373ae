use crate::core::{Attributes, PresentError, Result, Value};
use crate::json;
use crate::record::Record;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Behaviour method attached to a [`Model`].
pub type ModelMethod = Arc<dyn Fn(&Model, &[Value]) -> Result<Value> + Send + Sync>;

/// Dynamic record backed by an ordered attribute map.
///
/// Useful when rows come from a query layer as loose maps rather than typed
/// structs. Hidden attributes stay readable through [`Record::attribute`] but
/// are left out of [`Record::to_attributes`]. Loaded relations are appended
/// after the attributes.
#[derive(Clone)]
pub struct Model {
    kind: String,
    attributes: Attributes,
    hidden: Vec<String>,
    relations: Attributes,
    methods: BTreeMap<String, ModelMethod>,
}

impl Model {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            attributes: Attributes::new(),
            hidden: Vec::new(),
            relations: Attributes::new(),
            methods: BTreeMap::new(),
        }
    }

    pub fn from_attributes(kind: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            attributes,
            ..Self::new(kind)
        }
    }

    /// Builds a model from any value serializing to a JSON object.
    pub fn from_serialize<T>(kind: impl Into<String>, value: &T) -> Result<Self>
    where
        T: Serialize + ?Sized,
    {
        Ok(Self::from_attributes(kind, json::attributes_of(value)?))
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Hides an attribute from the structured value.
    pub fn hide(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.hidden.contains(&name) {
            self.hidden.push(name);
        }
        self
    }

    /// Marks a relationship as loaded with the given value.
    pub fn with_relation(mut self, relation: impl Into<String>, value: impl Into<Value>) -> Self {
        self.relations.insert(relation.into(), value.into());
        self
    }

    pub fn with_method<F>(mut self, name: impl Into<String>, method: F) -> Self
    where
        F: Fn(&Model, &[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        self.methods.insert(name.into(), Arc::new(method));
        self
    }

    pub fn hidden(&self) -> &[String] {
        &self.hidden
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Convenience read returning the attribute as a string slice.
    pub fn str_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).and_then(Value::as_str)
    }
}

impl Record for Model {
    fn attribute(&self, name: &str) -> Option<Value> {
        self.attributes.get(name).cloned()
    }

    fn to_attributes(&self) -> Attributes {
        let mut attributes: Attributes = self
            .attributes
            .iter()
            .filter(|(name, _)| !self.hidden.contains(*name))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();

        for (relation, value) in &self.relations {
            attributes.insert(relation.clone(), value.clone());
        }

        attributes
    }

    fn call(&self, method: &str, args: &[Value]) -> Result<Value> {
        match self.methods.get(method) {
            Some(handler) => handler(self, args),
            None => Err(PresentError::undefined_method(self.kind.clone(), method)),
        }
    }

    fn relation_loaded(&self, relation: &str) -> bool {
        self.relations.contains_key(relation)
    }

    fn relation(&self, relation: &str) -> Option<Value> {
        self.relations.get(relation).cloned()
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("kind", &self.kind)
            .field("attributes", &self.attributes)
            .field("hidden", &self.hidden)
            .field("relations", &self.relations)
            .field("methods", &self.methods.keys().collect::<Vec<_>>())
            .finish()
    }
}
