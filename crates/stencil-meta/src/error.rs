//! Error types for stencil-meta

use crate::format::Format;

/// Result type for stencil-meta operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while recognising or reading a document
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No {format} front matter: {reason}")]
    NoMatch { format: Format, reason: &'static str },

    #[error("Failed to decode {format} front matter: {message}")]
    Decode { format: Format, message: String },

    #[error("Invalid parse options: {message}")]
    InvalidOptions { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn no_match(format: Format, reason: &'static str) -> Self {
        Self::NoMatch { format, reason }
    }

    pub fn decode(format: Format, message: impl Into<String>) -> Self {
        Self::Decode {
            format,
            message: message.into(),
        }
    }

    /// Whether the dispatcher may recover from this error by trying the next
    /// candidate parser.
    pub fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch { .. } | Self::Decode { .. })
    }
}
