//! Everything needed to define and use presenters.
//!
//! ```
//! use presentable::prelude::*;
//! ```

pub use crate::{
    Attributes, FromRecord, Page, PageSource, Presentable, PresentationSource, Presenter,
    PresenterRegistry, Record, Value, serde_record,
};
