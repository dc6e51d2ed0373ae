pub mod error;
pub mod value;

pub use error::{PresentError, Result};
pub use value::{AttributeView, Attributes, Value};
