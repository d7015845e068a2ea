//! Fallback parser for documents without front matter

use crate::error::Result;
use crate::format::{Format, FrontMatterParser, ParseOutcome};
use crate::metadata::Metadata;
use crate::options::ParseOptions;
use crate::value::Map;

/// Parser for content with no metadata. Always matches; the whole input is
/// the body.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoneParser;

impl NoneParser {
    pub fn new() -> Self {
        Self
    }

    /// The infallible form of [`FrontMatterParser::parse`]
    pub fn outcome<'a>(&self, input: &'a [u8], options: &ParseOptions) -> ParseOutcome<'a> {
        ParseOutcome::new(
            Format::None,
            Metadata::with_options(Map::new(), options),
            input,
        )
    }
}

impl FrontMatterParser for NoneParser {
    fn format(&self) -> Format {
        Format::None
    }

    fn parse<'a>(&self, input: &'a [u8], options: &ParseOptions) -> Result<ParseOutcome<'a>> {
        Ok(self.outcome(input, options))
    }
}
