//! Front matter formats and the parser trait

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::metadata::Metadata;
use crate::options::ParseOptions;

/// Recognised document layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    /// The whole document is a JSON object or array
    ValidJson,
    /// A JSON object followed by a body, or a bare JSON array
    Json,
    /// `---` fenced YAML front matter
    Yaml,
    /// `+++` fenced TOML front matter
    Toml,
    /// No front matter; the document is all body
    None,
}

impl Format {
    /// Fence line opening and closing a front matter block, if the format
    /// uses one
    pub fn fence(&self) -> Option<&'static str> {
        match self {
            Self::Yaml => Some("---"),
            Self::Toml => Some("+++"),
            Self::ValidJson | Self::Json | Self::None => None,
        }
    }

    /// Short display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::ValidJson => "ValidJSON",
            Self::Json => "JSON",
            Self::Yaml => "YAML",
            Self::Toml => "TOML",
            Self::None => "None",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Successful parse of a document: decoded metadata and the residual body.
///
/// The body borrows from the document that was parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome<'a> {
    pub format: Format,
    pub metadata: Metadata,
    pub body: &'a [u8],
}

impl<'a> ParseOutcome<'a> {
    pub fn new(format: Format, metadata: Metadata, body: &'a [u8]) -> Self {
        Self {
            format,
            metadata,
            body,
        }
    }

    /// Body as text, replacing invalid UTF-8 sequences
    pub fn body_str(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.body)
    }
}

/// Trait for format-specific front matter parsers.
///
/// Implementations are stateless: the same input always yields the same
/// outcome, and nothing is retained between calls.
pub trait FrontMatterParser: Send + Sync {
    /// Format identifier
    fn format(&self) -> Format;

    /// Attempt to split `input` into metadata and body.
    ///
    /// Returns [`Error::NoMatch`](crate::Error::NoMatch) or
    /// [`Error::Decode`](crate::Error::Decode) when the input is not in this
    /// parser's format.
    fn parse<'a>(&self, input: &'a [u8], options: &ParseOptions) -> Result<ParseOutcome<'a>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fences() {
        assert_eq!(Format::Yaml.fence(), Some("---"));
        assert_eq!(Format::Toml.fence(), Some("+++"));
        assert_eq!(Format::Json.fence(), None);
        assert_eq!(Format::None.fence(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Format::ValidJson.to_string(), "ValidJSON");
        assert_eq!(Format::None.to_string(), "None");
    }

    #[test]
    fn test_body_str_lossy() {
        let outcome = ParseOutcome::new(Format::None, Metadata::default(), b"caf\xc3\xa9 \xff");
        assert_eq!(outcome.body_str(), "café \u{fffd}");
    }
}
