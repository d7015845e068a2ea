//! JSON front matter parser
//!
//! Two shapes are accepted:
//!
//! - a bare array, as returned by an API, which must be the whole document
//!   and carries no body;
//! - an object, optionally followed by a body. The object is read with a
//!   streaming decoder and every byte it did not consume is the body.

use serde_json::{Deserializer, Map as JsonMap, Value as JsonValue};

use crate::error::{Error, Result};
use crate::format::{Format, FrontMatterParser, ParseOutcome};
use crate::metadata::Metadata;
use crate::options::ParseOptions;
use crate::value::Value;

/// Parser for JSON front matter and JSON array documents
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonParser;

impl JsonParser {
    pub fn new() -> Self {
        Self
    }

    fn parse_array<'a>(input: &'a [u8], options: &ParseOptions) -> Result<ParseOutcome<'a>> {
        let array: JsonValue =
            serde_json::from_slice(input).map_err(|e| Error::decode(Format::Json, e.to_string()))?;

        Ok(ParseOutcome::new(
            Format::Json,
            Metadata::wrapped(Value::from(array), options),
            &[],
        ))
    }

    fn parse_object<'a>(input: &'a [u8], options: &ParseOptions) -> Result<ParseOutcome<'a>> {
        // A document that is nothing but the object has an empty body, even
        // with trailing whitespace.
        if let Ok(object) = serde_json::from_slice::<JsonMap<String, JsonValue>>(input) {
            return Ok(ParseOutcome::new(
                Format::Json,
                Metadata::wrapped(Value::from(JsonValue::Object(object)), options),
                &[],
            ));
        }

        let mut stream = Deserializer::from_slice(input).into_iter::<JsonMap<String, JsonValue>>();
        let object = match stream.next() {
            Some(Ok(object)) => object,
            Some(Err(e)) => return Err(Error::decode(Format::Json, e.to_string())),
            None => return Err(Error::no_match(Format::Json, "empty document")),
        };

        let consumed = stream.byte_offset();
        tracing::trace!(consumed, total = input.len(), "JSON front matter boundary");

        Ok(ParseOutcome::new(
            Format::Json,
            Metadata::wrapped(Value::from(JsonValue::Object(object)), options),
            &input[consumed..],
        ))
    }
}

impl FrontMatterParser for JsonParser {
    fn format(&self) -> Format {
        Format::Json
    }

    fn parse<'a>(&self, input: &'a [u8], options: &ParseOptions) -> Result<ParseOutcome<'a>> {
        match input.trim_ascii_start().first() {
            Some(b'[') => Self::parse_array(input, options),
            Some(b'{') => Self::parse_object(input, options),
            _ => Err(Error::no_match(
                Format::Json,
                "document does not start with `{` or `[`",
            )),
        }
    }
}
