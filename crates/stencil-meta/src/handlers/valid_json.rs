//! Parser for documents that are entirely valid JSON

use serde_json::Value as JsonValue;

use crate::error::{Error, Result};
use crate::format::{Format, FrontMatterParser, ParseOutcome};
use crate::metadata::Metadata;
use crate::options::ParseOptions;
use crate::value::Value;

/// Parser for whole-document JSON objects and arrays.
///
/// Matches only when the entire input is one JSON object or array; the body
/// is always empty. Scalar documents (`42`, `"text"`) are left to the other
/// parsers so their content is kept as body.
#[derive(Debug, Default, Clone, Copy)]
pub struct ValidJsonParser;

impl ValidJsonParser {
    pub fn new() -> Self {
        Self
    }
}

impl FrontMatterParser for ValidJsonParser {
    fn format(&self) -> Format {
        Format::ValidJson
    }

    fn parse<'a>(&self, input: &'a [u8], options: &ParseOptions) -> Result<ParseOutcome<'a>> {
        if !matches!(input.trim_ascii_start().first(), Some(b'{' | b'[')) {
            return Err(Error::no_match(
                Format::ValidJson,
                "document is not a JSON object or array",
            ));
        }

        let value: JsonValue = serde_json::from_slice(input)
            .map_err(|e| Error::decode(Format::ValidJson, e.to_string()))?;

        Ok(ParseOutcome::new(
            Format::ValidJson,
            Metadata::wrapped(Value::from(value), options),
            &[],
        ))
    }
}
