//! Front matter detection and parsing for Stencil documents
//!
//! A document may be pure JSON, a JSON array, JSON/YAML/TOML front matter
//! followed by a body, or plain content. [`parse_document`] works out which
//! and splits it into [`Metadata`] and body bytes:
//!
//! ```
//! use stencil_meta::{Format, parse_document};
//!
//! let outcome = parse_document(b"+++\ntitle = \"A title\"\n+++\nPage content\n");
//! assert_eq!(outcome.format, Format::Toml);
//! assert_eq!(outcome.metadata.title, "A title");
//! assert_eq!(outcome.body, b"Page content\n");
//! ```

pub mod dispatch;
pub mod error;
pub mod format;
pub mod handlers;
pub mod logging;
pub mod metadata;
pub mod options;
pub mod page;
pub mod split;
pub mod value;

pub use dispatch::{parse_document, parse_document_with};
pub use error::{Error, Result};
pub use format::{Format, FrontMatterParser, ParseOutcome};
pub use metadata::Metadata;
pub use options::ParseOptions;
pub use page::{Extensions, Page, title_from_path};
pub use value::{Map, Value};
