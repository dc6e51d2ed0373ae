//! Named presentation types.
//!
//! Static presenters are checked by the compiler. When the presenter is only
//! known at runtime (a `?view=summary` query parameter, a per-tenant
//! setting), hosts register renderers under names and present through the
//! registry instead. Every registry entry point validates the name first.

use crate::core::{Attributes, PresentError, Result};
use crate::dispatch::{
    Presentation, PresentationSource, present_target, resolve_presentation_target,
};
use crate::pagination::{PageSource, PaginationEnvelope};
use crate::presenter::{Presenter, PresentedCollection};
use crate::record::Record;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Renders a record into presented attributes.
pub type Renderer<R> = Arc<dyn Fn(&R) -> Attributes + Send + Sync>;

pub struct PresenterRegistry<R> {
    renderers: BTreeMap<String, Renderer<R>>,
}

impl<R: Record> PresenterRegistry<R> {
    pub fn new() -> Self {
        Self {
            renderers: BTreeMap::new(),
        }
    }

    /// Registers `render` under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: impl Into<String>, render: F) -> &mut Self
    where
        F: Fn(&R) -> Attributes + Send + Sync + 'static,
    {
        let name = name.into();
        if self.renderers.insert(name.clone(), Arc::new(render)).is_some() {
            debug!("presenter '{}' replaced", name);
        }
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.renderers.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.renderers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }

    /// Looks up a presentation type by name.
    ///
    /// This is the single validation point shared by every other entry point.
    pub fn resolve(&self, name: &str) -> Result<&Renderer<R>> {
        self.renderers.get(name).ok_or_else(|| {
            warn!(
                "presenter '{}' is not registered (known: {})",
                name,
                self.names().collect::<Vec<_>>().join(", ")
            );
            PresentError::InvalidPresenter(name.to_string())
        })
    }

    pub fn make<'r>(&self, name: &str, record: &'r R) -> Result<DynamicPresenter<'r, R>>
    where
        R: 'r,
    {
        let factory = self.factory(name)?;
        Ok(factory(record))
    }

    pub fn collection<'r, I>(
        &self,
        name: &str,
        records: I,
    ) -> Result<PresentedCollection<DynamicPresenter<'r, R>>>
    where
        R: 'r,
        I: IntoIterator<Item = &'r R>,
    {
        let factory = self.factory(name)?;
        Ok(PresentedCollection::from_records(records, factory))
    }

    pub fn pagination<'r, S>(
        &self,
        name: &str,
        source: &'r S,
    ) -> Result<PaginationEnvelope<DynamicPresenter<'r, R>>>
    where
        R: 'r,
        S: PageSource<Item = R> + ?Sized,
    {
        let factory = self.factory(name)?;
        Ok(PaginationEnvelope::from_source(source, factory))
    }

    /// Unified entry point: a collection or a page, decided by `source`.
    pub fn present_collection<'r, S>(
        &self,
        name: &str,
        source: &'r S,
    ) -> Result<Presentation<DynamicPresenter<'r, R>>>
    where
        R: 'r,
        S: PresentationSource<Item = R> + ?Sized,
    {
        let factory = self.factory(name)?;
        Ok(present_target(resolve_presentation_target(source), factory))
    }

    fn factory<'r>(&self, name: &str) -> Result<impl Fn(&'r R) -> DynamicPresenter<'r, R>>
    where
        R: 'r,
    {
        let renderer = self.resolve(name)?;
        let name: Arc<str> = Arc::from(name);
        Ok(move |record: &'r R| DynamicPresenter {
            record,
            name: Arc::clone(&name),
            renderer: Arc::clone(renderer),
        })
    }
}

impl<R: Record> Default for PresenterRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for PresenterRegistry<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresenterRegistry")
            .field("presenters", &self.renderers.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Presenter produced by a [`PresenterRegistry`].
pub struct DynamicPresenter<'r, R> {
    record: &'r R,
    name: Arc<str>,
    renderer: Renderer<R>,
}

impl<R> DynamicPresenter<'_, R> {
    /// Name the presenter was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<R: Record> Presenter for DynamicPresenter<'_, R> {
    type Record = R;

    fn record(&self) -> &R {
        self.record
    }

    fn to_attributes(&self) -> Attributes {
        (self.renderer)(self.record)
    }
}

impl<R> Clone for DynamicPresenter<'_, R> {
    fn clone(&self) -> Self {
        Self {
            record: self.record,
            name: Arc::clone(&self.name),
            renderer: Arc::clone(&self.renderer),
        }
    }
}

impl<R> fmt::Debug for DynamicPresenter<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicPresenter")
            .field("name", &self.name)
            .field("record", &std::any::type_name::<R>())
            .finish()
    }
}
