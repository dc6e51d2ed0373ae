// ============================================================================
// Presentable Library
// ============================================================================

pub mod config;
pub mod core;
pub mod dispatch;
pub mod json;
pub mod pagination;
pub mod prelude;
pub mod presenter;
pub mod record;
pub mod web;

// Re-export main types for convenience
pub use config::{JsonStyle, PresentConfig};
pub use crate::core::{AttributeView, Attributes, PresentError, Result, Value};
pub use dispatch::{
    Presentation, PresentationSource, PresentationTarget, present_target,
    resolve_presentation_target,
};
pub use pagination::{Page, PageSource, PaginationEnvelope, PaginationLinks, PaginationMeta};
pub use presenter::{
    DynamicPresenter, FromRecord, Presented, PresentedCollection, Presenter, PresenterRegistry,
    Renderer,
};
pub use record::{Model, ModelMethod, Presentable, Record};
