use crate::core::{PresentError, Result};
use serde::{Deserialize, Serialize};

/// JSON layout used when presenters are encoded to strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JsonStyle {
    #[default]
    Compact,
    Pretty,
}

/// Presentation configuration
///
/// Controls how page URLs are built and how presentations are encoded.
/// Every field has a default, so a partial JSON document is enough:
///
/// ```
/// use presentable::{JsonStyle, PresentConfig};
///
/// let config = PresentConfig::from_json_str(r#"{ "json_style": "pretty" }"#).unwrap();
/// assert_eq!(config.json_style, JsonStyle::Pretty);
/// assert_eq!(config.page_name, "page");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentConfig {
    /// Query parameter carrying the page number in generated page URLs
    pub page_name: String,

    /// Layout of encoded JSON strings
    pub json_style: JsonStyle,
}

impl Default for PresentConfig {
    fn default() -> Self {
        Self {
            page_name: "page".to_string(),
            json_style: JsonStyle::Compact,
        }
    }
}

impl PresentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page query parameter name
    pub fn page_name(mut self, page_name: &str) -> Self {
        self.page_name = page_name.to_string();
        self
    }

    /// Set the JSON layout
    pub fn json_style(mut self, style: JsonStyle) -> Self {
        self.json_style = style;
        self
    }

    /// Shorthand for `json_style(JsonStyle::Pretty)`
    pub fn pretty(self) -> Self {
        self.json_style(JsonStyle::Pretty)
    }

    /// Parse and validate a configuration from a JSON document
    pub fn from_json_str(input: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.page_name.trim().is_empty() {
            return Err(PresentError::InvalidArgument(
                "page_name cannot be empty".to_string(),
            ));
        }

        if self.page_name.contains(['=', '&', '?', '#']) {
            return Err(PresentError::InvalidArgument(format!(
                "page_name '{}' contains reserved URL characters",
                self.page_name
            )));
        }

        Ok(())
    }
}
