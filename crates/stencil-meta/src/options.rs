//! Parse options
//!
//! Options control which front matter keys feed the convenience fields of
//! [`Metadata`](crate::Metadata). They can be built in code or loaded from a
//! TOML file:
//!
//! ```toml
//! template_key = "layout"
//! date_layouts = ["%Y-%m-%d"]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Date layouts tried in order when reading the date field
pub const DEFAULT_DATE_LAYOUTS: [&str; 3] = ["%Y-%m-%d %H:%M:%S%z", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d"];

/// Keys and layouts used when building metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParseOptions {
    /// Key holding the page title
    pub title_key: String,
    /// Key holding the template name
    pub template_key: String,
    /// Key holding the page date
    pub date_key: String,
    /// `chrono` format strings tried in order for the date field
    pub date_layouts: Vec<String>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            title_key: "title".to_string(),
            template_key: "template".to_string(),
            date_key: "date".to_string(),
            date_layouts: DEFAULT_DATE_LAYOUTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ParseOptions {
    /// Parse options from TOML source
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| Error::InvalidOptions {
            message: e.to_string(),
        })
    }

    /// Load options from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        let options = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "Loaded parse options");
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ParseOptions::default();
        assert_eq!(options.title_key, "title");
        assert_eq!(options.template_key, "template");
        assert_eq!(options.date_key, "date");
        assert_eq!(options.date_layouts.len(), 3);
    }

    #[test]
    fn test_partial_override() {
        let options = ParseOptions::from_toml_str("template_key = \"layout\"\n").unwrap();
        assert_eq!(options.template_key, "layout");
        assert_eq!(options.title_key, "title");
        assert_eq!(options.date_layouts, ParseOptions::default().date_layouts);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = ParseOptions::from_toml_str("layout_key = \"layout\"\n").unwrap_err();
        assert!(matches!(err, Error::InvalidOptions { .. }));
    }
}
