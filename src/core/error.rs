use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PresentError {
    #[error("Invalid presenter: '{0}' is not a registered presenter")]
    InvalidPresenter(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Undefined offset: {0}")]
    UndefinedKey(String),

    #[error("Call to undefined method {record}::{method}()")]
    UndefinedMethod { record: String, method: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PresentError {
    pub fn undefined_method(record: impl Into<String>, method: impl Into<String>) -> Self {
        Self::UndefinedMethod {
            record: record.into(),
            method: method.into(),
        }
    }

    /// True for errors caused by the caller passing something unusable,
    /// such as an unknown presenter name.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidPresenter(_) | Self::InvalidArgument(_))
    }
}

pub type Result<T> = std::result::Result<T, PresentError>;

impl From<serde_json::Error> for PresentError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_classification() {
        assert!(PresentError::InvalidPresenter("summary".into()).is_invalid_argument());
        assert!(PresentError::InvalidArgument("bad".into()).is_invalid_argument());
        assert!(!PresentError::UndefinedKey("email".into()).is_invalid_argument());
        assert!(!PresentError::undefined_method("User", "fullname").is_invalid_argument());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            PresentError::UndefinedKey("email".into()).to_string(),
            "Undefined offset: email"
        );
        assert_eq!(
            PresentError::undefined_method("Role", "title").to_string(),
            "Call to undefined method Role::title()"
        );
    }
}
