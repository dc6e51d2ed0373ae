//! Records: the persisted entities presenters wrap.
//!
//! The crate never owns or loads records. It reads them through the
//! [`Record`] capability trait, which host frameworks implement for their
//! entity types (by hand, with [`serde_record!`](crate::serde_record), or by
//! using the dynamic [`Model`]).

mod macros;
mod model;

pub use model::{Model, ModelMethod};

use crate::core::{Attributes, PresentError, Result, Value};
use crate::presenter::{DynamicPresenter, FromRecord, PresenterRegistry};

/// Read-only capability interface of a persisted entity.
pub trait Record {
    /// Reads a named field. `None` when the record has no such field.
    fn attribute(&self, name: &str) -> Option<Value>;

    /// Converts the record into its own structured value.
    fn to_attributes(&self) -> Attributes;

    /// Invokes a named behaviour method.
    fn call(&self, method: &str, args: &[Value]) -> Result<Value> {
        let _ = args;
        Err(PresentError::undefined_method(
            std::any::type_name::<Self>(),
            method,
        ))
    }

    /// Reports whether a relationship has already been loaded.
    fn relation_loaded(&self, relation: &str) -> bool {
        let _ = relation;
        false
    }

    /// Returns a loaded relationship's value. Must not trigger a load.
    fn relation(&self, relation: &str) -> Option<Value> {
        let _ = relation;
        None
    }
}

/// Presentation entry points available on every record.
pub trait Presentable: Record + Sized {
    /// Wraps this record in the presenter `P`.
    fn present<'r, P>(&'r self) -> P
    where
        P: FromRecord<'r, Record = Self>,
    {
        P::make(self)
    }

    /// Wraps this record in the presenter registered under `name`.
    fn present_as<'r>(
        &'r self,
        registry: &PresenterRegistry<Self>,
        name: &str,
    ) -> Result<DynamicPresenter<'r, Self>> {
        registry.make(name, self)
    }
}

impl<R: Record> Presentable for R {}
