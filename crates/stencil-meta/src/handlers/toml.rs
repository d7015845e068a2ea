//! TOML front matter parser

use super::fenced::parse_fenced;
use crate::error::{Error, Result};
use crate::format::{Format, FrontMatterParser, ParseOutcome};
use crate::options::ParseOptions;
use crate::value::Value;

/// Parser for `+++` fenced TOML front matter
#[derive(Debug, Default, Clone, Copy)]
pub struct TomlParser;

impl TomlParser {
    pub fn new() -> Self {
        Self
    }

    fn decode(meta: &[u8]) -> Result<Value> {
        let source = std::str::from_utf8(meta).map_err(|e| Error::decode(Format::Toml, e.to_string()))?;
        let table: toml::Table =
            toml::from_str(source).map_err(|e| Error::decode(Format::Toml, e.to_string()))?;
        Ok(Value::from(table))
    }
}

impl FrontMatterParser for TomlParser {
    fn format(&self) -> Format {
        Format::Toml
    }

    fn parse<'a>(&self, input: &'a [u8], options: &ParseOptions) -> Result<ParseOutcome<'a>> {
        parse_fenced(Format::Toml, input, options, Self::decode)
    }
}
