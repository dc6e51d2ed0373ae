use crate::config::PresentConfig;
use crate::core::{Result, Value};
use crate::json;
use crate::pagination::PageSource;
use crate::presenter::{PresentedCollection, Presenter};
use serde::{Deserialize, Serialize};

/// Navigation links of a page. `prev` and `next` are passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationLinks {
    pub first: String,
    pub last: String,
    pub prev: Option<String>,
    pub next: Option<String>,
}

impl PaginationLinks {
    pub fn from_source<S>(source: &S) -> Self
    where
        S: PageSource + ?Sized,
    {
        Self {
            first: source.url(1),
            last: source.url(source.last_page()),
            prev: source.previous_page_url(),
            next: source.next_page_url(),
        }
    }
}

/// Page metadata. Absent item ordinals (an empty page) become `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub current_page: u64,
    pub from: u64,
    pub last_page: u64,
    pub path: String,
    pub per_page: u64,
    pub to: u64,
    pub total: u64,
}

impl PaginationMeta {
    pub fn from_source<S>(source: &S) -> Self
    where
        S: PageSource + ?Sized,
    {
        Self {
            current_page: source.current_page(),
            from: source.first_item().unwrap_or(0),
            last_page: source.last_page(),
            path: source.path().to_string(),
            per_page: source.per_page(),
            to: source.last_item().unwrap_or(0),
            total: source.total(),
        }
    }
}

/// Presented page: `{ data, links, meta }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = "P: Presenter"))]
pub struct PaginationEnvelope<P> {
    data: PresentedCollection<P>,
    links: PaginationLinks,
    meta: PaginationMeta,
}

impl<P> PaginationEnvelope<P> {
    pub fn new(data: PresentedCollection<P>, links: PaginationLinks, meta: PaginationMeta) -> Self {
        Self { data, links, meta }
    }

    /// Presents the page's items through `make` and copies links and metadata.
    pub fn from_source<'r, S, F>(source: &'r S, make: F) -> Self
    where
        S: PageSource + ?Sized,
        S::Item: 'r,
        F: FnMut(&'r S::Item) -> P,
    {
        Self {
            data: PresentedCollection::from_records(source.items(), make),
            links: PaginationLinks::from_source(source),
            meta: PaginationMeta::from_source(source),
        }
    }

    pub fn data(&self) -> &PresentedCollection<P> {
        &self.data
    }

    pub fn links(&self) -> &PaginationLinks {
        &self.links
    }

    pub fn meta(&self) -> &PaginationMeta {
        &self.meta
    }

    pub fn into_parts(self) -> (PresentedCollection<P>, PaginationLinks, PaginationMeta) {
        (self.data, self.links, self.meta)
    }
}

impl<P: Presenter> PaginationEnvelope<P> {
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
