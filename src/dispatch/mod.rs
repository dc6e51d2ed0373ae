//! Call-site disambiguation
//!
//! `present_collection` is one call style for two output shapes: called on
//! a plain collection it yields presented items, called on a page source it
//! yields a pagination envelope. Which one applies is decided by the static
//! type of the receiver, through [`PresentationSource`]:
//!
//! - `[R]` and `Vec<R>` resolve to [`PresentationTarget::Direct`];
//! - every [`PageSource`] resolves to [`PresentationTarget::ForwardedFrom`].
//!
//! A page type that dereferences to its items keeps the page behaviour,
//! because method lookup finds the page's own `present_collection` before
//! auto-deref reaches the collection. A wrapper that only dereferences to a
//! collection, without implementing [`PageSource`], resolves to `Direct`.

use crate::config::PresentConfig;
use crate::core::{Result, Value};
use crate::json;
use crate::pagination::{PageSource, PaginationEnvelope};
use crate::presenter::{FromRecord, PresentedCollection, Presenter};
use serde::{Serialize, Serializer};
use std::fmt;
use tracing::{Level, event};

/// What a `present_collection` call operates on.
pub enum PresentationTarget<'r, R> {
    /// Called directly on a collection of records.
    Direct(&'r [R]),
    /// Reached through a page source wrapping the records.
    ForwardedFrom(&'r dyn PageSource<Item = R>),
}

impl<R> PresentationTarget<'_, R> {
    pub fn is_page(&self) -> bool {
        matches!(self, Self::ForwardedFrom(_))
    }

    /// Records the presentation will wrap.
    pub fn items(&self) -> &[R] {
        match self {
            Self::Direct(items) => items,
            Self::ForwardedFrom(page) => page.items(),
        }
    }
}

impl<R> fmt::Debug for PresentationTarget<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct(items) => f.debug_tuple("Direct").field(&items.len()).finish(),
            Self::ForwardedFrom(page) => f
                .debug_struct("ForwardedFrom")
                .field("current_page", &page.current_page())
                .field("items", &page.items().len())
                .field("total", &page.total())
                .finish(),
        }
    }
}

/// Anything `present_collection` can be called on.
pub trait PresentationSource {
    type Item;

    fn presentation_target(&self) -> PresentationTarget<'_, Self::Item>;

    /// Presents the records with `P`: a plain collection for collections,
    /// a pagination envelope for page sources.
    fn present_collection<'r, P>(&'r self) -> Presentation<P>
    where
        Self::Item: 'r,
        P: FromRecord<'r, Record = Self::Item>,
    {
        present_target(resolve_presentation_target(self), P::from_record)
    }
}

impl<R> PresentationSource for [R] {
    type Item = R;

    fn presentation_target(&self) -> PresentationTarget<'_, R> {
        PresentationTarget::Direct(self)
    }
}

impl<R> PresentationSource for Vec<R> {
    type Item = R;

    fn presentation_target(&self) -> PresentationTarget<'_, R> {
        PresentationTarget::Direct(self.as_slice())
    }
}

/// Every page source is reached as a page, with no further opt-in.
impl<S: PageSource> PresentationSource for S {
    type Item = S::Item;

    fn presentation_target(&self) -> PresentationTarget<'_, S::Item> {
        PresentationTarget::ForwardedFrom(self)
    }
}

/// Classifies a `present_collection` receiver.
pub fn resolve_presentation_target<S>(source: &S) -> PresentationTarget<'_, S::Item>
where
    S: PresentationSource + ?Sized,
{
    let target = source.presentation_target();
    event!(
        Level::DEBUG,
        source = std::any::type_name::<S>(),
        page = target.is_page(),
        items = target.items().len(),
        "resolved presentation target"
    );
    target
}

/// Runs the engine entry point matching `target`.
pub fn present_target<'r, R, P, F>(target: PresentationTarget<'r, R>, make: F) -> Presentation<P>
where
    R: 'r,
    F: FnMut(&'r R) -> P,
{
    match target {
        PresentationTarget::Direct(items) => {
            Presentation::Collection(PresentedCollection::from_records(items, make))
        }
        PresentationTarget::ForwardedFrom(page) => {
            Presentation::Page(PaginationEnvelope::from_source(page, make))
        }
    }
}

/// Result of the unified `present_collection` call.
#[derive(Debug, Clone, PartialEq)]
pub enum Presentation<P> {
    Collection(PresentedCollection<P>),
    Page(PaginationEnvelope<P>),
}

impl<P> Presentation<P> {
    pub fn is_page(&self) -> bool {
        matches!(self, Self::Page(_))
    }

    /// Presented records, whichever the shape.
    pub fn data(&self) -> &PresentedCollection<P> {
        match self {
            Self::Collection(collection) => collection,
            Self::Page(envelope) => envelope.data(),
        }
    }

    pub fn as_collection(&self) -> Option<&PresentedCollection<P>> {
        match self {
            Self::Collection(collection) => Some(collection),
            Self::Page(_) => None,
        }
    }

    pub fn as_page(&self) -> Option<&PaginationEnvelope<P>> {
        match self {
            Self::Page(envelope) => Some(envelope),
            Self::Collection(_) => None,
        }
    }

    pub fn into_collection(self) -> Option<PresentedCollection<P>> {
        match self {
            Self::Collection(collection) => Some(collection),
            Self::Page(_) => None,
        }
    }

    pub fn into_page(self) -> Option<PaginationEnvelope<P>> {
        match self {
            Self::Page(envelope) => Some(envelope),
            Self::Collection(_) => None,
        }
    }
}

impl<P: Presenter> Presentation<P> {
    pub fn to_value(&self) -> Result<Value> {
        json::to_value(self)
    }

    pub fn to_json(&self) -> Result<String> {
        json::to_string(self)
    }

    pub fn to_json_with(&self, config: &PresentConfig) -> Result<String> {
        json::to_string_with(self, config)
    }
}

impl<P: Presenter> Serialize for Presentation<P> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Collection(collection) => collection.serialize(serializer),
            Self::Page(envelope) => envelope.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::Page;

    #[test]
    fn test_collections_resolve_direct() {
        let records = vec![1, 2, 3];
        assert!(!resolve_presentation_target(&records).is_page());
        assert!(!resolve_presentation_target(records.as_slice()).is_page());
        assert_eq!(resolve_presentation_target(&records).items(), &[1, 2, 3]);
    }

    #[test]
    fn test_page_resolves_forwarded() {
        let page = Page::new(vec![1, 2], 2, 15, 1);
        let target = resolve_presentation_target(&page);
        assert!(target.is_page());
        assert_eq!(target.items(), &[1, 2]);
        assert_eq!(
            format!("{target:?}"),
            "ForwardedFrom { current_page: 1, items: 2, total: 2 }"
        );
    }

    #[test]
    fn test_page_items_resolve_direct() {
        let page = Page::new(vec![1, 2], 2, 15, 1);
        assert!(!resolve_presentation_target(page.items()).is_page());
        assert!(!resolve_presentation_target(&*page).is_page());
    }
}
