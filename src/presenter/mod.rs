//! Presentation engine
//!
//! A presenter wraps exactly one [`Record`] and renders it into an ordered
//! attribute map. Anything the presenter does not define itself is read
//! from the record.
//!
//! ```
//! use presentable::{Attributes, FromRecord, Model, Presenter, Record, Value};
//!
//! struct UserPresenter<'r> {
//!     user: &'r Model,
//! }
//!
//! impl Presenter for UserPresenter<'_> {
//!     type Record = Model;
//!
//!     fn record(&self) -> &Model {
//!         self.user
//!     }
//!
//!     fn to_attributes(&self) -> Attributes {
//!         let mut attributes = Attributes::new();
//!         attributes.insert("email".into(), self.attribute("email").unwrap_or(Value::Null));
//!         attributes
//!     }
//! }
//!
//! impl<'r> FromRecord<'r> for UserPresenter<'r> {
//!     fn from_record(user: &'r Model) -> Self {
//!         Self { user }
//!     }
//! }
//!
//! let user = Model::new("User")
//!     .with_attribute("email", "john@example.com")
//!     .with_attribute("password", "secret");
//!
//! let presented = UserPresenter::make(&user);
//! assert_eq!(presented.to_json().unwrap(), r#"{"email":"john@example.com"}"#);
//! assert!(presented.get("password").is_err());
//! ```

mod collection;
pub mod registry;

pub use collection::PresentedCollection;
pub use registry::{DynamicPresenter, PresenterRegistry, Renderer};

use crate::config::PresentConfig;
use crate::core::{AttributeView, Attributes, Result, Value};
use crate::json;
use crate::pagination::{PageSource, PaginationEnvelope};
use crate::record::Record;
use serde::{Serialize, Serializer};
use std::fmt;
use tracing::{Level, event};

/// A controlled, serializable view of one record.
pub trait Presenter {
    type Record: Record;

    /// The wrapped record.
    fn record(&self) -> &Self::Record;

    /// Renders the presented attributes. Every presenter defines its own.
    fn to_attributes(&self) -> Attributes;

    fn to_value(&self) -> Value {
        Value::Object(self.to_attributes())
    }

    fn to_json(&self) -> Result<String> {
        json::to_string(&self.to_attributes())
    }

    fn to_json_with(&self, config: &PresentConfig) -> Result<String> {
        json::to_string_with(&self.to_attributes(), config)
    }

    /// Immutable keyed view of [`Presenter::to_attributes`].
    fn view(&self) -> AttributeView {
        AttributeView::new(self.to_attributes())
    }

    /// Reads one presented attribute; an undeclared key is an error.
    fn get(&self, key: &str) -> Result<Value> {
        self.view().get(key).cloned()
    }

    fn contains_key(&self, key: &str) -> bool {
        self.to_attributes().contains_key(key)
    }

    /// Reads a field of the wrapped record.
    fn attribute(&self, name: &str) -> Option<Value> {
        self.record().attribute(name)
    }

    /// Invokes a behaviour method of the wrapped record.
    fn call(&self, method: &str, args: &[Value]) -> Result<Value> {
        self.record().call(method, args)
    }

    /// Returns a relationship only if the record already loaded it.
    ///
    /// A loaded relationship without a value yields `Some(Value::Null)`.
    fn when_loaded(&self, relation: &str) -> Option<Value> {
        let record = self.record();
        if !record.relation_loaded(relation) {
            return None;
        }

        Some(record.relation(relation).unwrap_or(Value::Null))
    }
}

impl<P: Presenter + ?Sized> Presenter for &P {
    type Record = P::Record;

    fn record(&self) -> &Self::Record {
        (**self).record()
    }

    fn to_attributes(&self) -> Attributes {
        (**self).to_attributes()
    }

    fn to_value(&self) -> Value {
        (**self).to_value()
    }

    fn to_json(&self) -> Result<String> {
        (**self).to_json()
    }

    fn to_json_with(&self, config: &PresentConfig) -> Result<String> {
        (**self).to_json_with(config)
    }

    fn view(&self) -> AttributeView {
        (**self).view()
    }

    fn get(&self, key: &str) -> Result<Value> {
        (**self).get(key)
    }

    fn contains_key(&self, key: &str) -> bool {
        (**self).contains_key(key)
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        (**self).attribute(name)
    }

    fn call(&self, method: &str, args: &[Value]) -> Result<Value> {
        (**self).call(method, args)
    }

    fn when_loaded(&self, relation: &str) -> Option<Value> {
        (**self).when_loaded(relation)
    }
}

/// Presenters that can be built from a borrowed record.
///
/// Implementing this trait is what makes a type a valid presentation type:
/// `make`, `collection` and `pagination` are only callable on presenters.
pub trait FromRecord<'r>: Presenter<Record: 'r> + Sized {
    fn from_record(record: &'r Self::Record) -> Self;

    fn make(record: &'r Self::Record) -> Self {
        Self::from_record(record)
    }

    /// Presents every record, keeping order and count.
    fn collection<I>(records: I) -> PresentedCollection<Self>
    where
        I: IntoIterator<Item = &'r Self::Record>,
    {
        let presented = PresentedCollection::from_records(records, Self::from_record);
        event!(
            Level::TRACE,
            presenter = std::any::type_name::<Self>(),
            count = presented.len(),
            "presented collection"
        );
        presented
    }

    /// Presents the items of a page together with its links and metadata.
    fn pagination<S>(source: &'r S) -> PaginationEnvelope<Self>
    where
        S: PageSource<Item = Self::Record> + ?Sized,
    {
        let envelope = PaginationEnvelope::from_source(source, Self::from_record);
        event!(
            Level::TRACE,
            presenter = std::any::type_name::<Self>(),
            page = envelope.meta().current_page,
            count = envelope.data().len(),
            total = envelope.meta().total,
            "presented page"
        );
        envelope
    }
}

/// Serialization adapter for a single presenter.
///
/// Serializes as the presenter's attributes and displays as its JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presented<P>(pub P);

impl<P: Presenter> Presented<P> {
    pub fn into_inner(self) -> P {
        self.0
    }
}

impl<P: Presenter> Serialize for Presented<P> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.to_attributes().serialize(serializer)
    }
}

impl<P: Presenter> fmt::Display for Presented<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_value())
    }
}
