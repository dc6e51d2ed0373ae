//! Paginated result sets
//!
//! The crate never computes pages. A host paginator exposes what it already
//! knows through [`PageSource`], and [`PaginationEnvelope`] shapes it into the
//! `{ data, links, meta }` wire format:
//!
//! ```json
//! {
//!   "data": [ ... ],
//!   "links": { "first": "...", "last": "...", "prev": null, "next": "..." },
//!   "meta": {
//!     "current_page": 1, "from": 1, "last_page": 100,
//!     "path": "...", "per_page": 15, "to": 10, "total": 10
//!   }
//! }
//! ```

mod envelope;
mod page;

pub use envelope::{PaginationEnvelope, PaginationLinks, PaginationMeta};
pub use page::Page;

/// One page of a larger result set, plus navigation metadata.
pub trait PageSource {
    type Item;

    /// Items on the current page.
    fn items(&self) -> &[Self::Item];

    fn current_page(&self) -> u64;

    /// Ordinal of the first item on this page, `None` for an empty page.
    fn first_item(&self) -> Option<u64>;

    /// Ordinal of the last item on this page, `None` for an empty page.
    fn last_item(&self) -> Option<u64>;

    fn last_page(&self) -> u64;

    /// Item count across all pages.
    fn total(&self) -> u64;

    fn per_page(&self) -> u64;

    /// Base path the page URLs are built on.
    fn path(&self) -> &str;

    /// URL of an arbitrary page, including any extra query parameters.
    fn url(&self, page: u64) -> String;

    fn next_page_url(&self) -> Option<String>;

    fn previous_page_url(&self) -> Option<String>;
}
