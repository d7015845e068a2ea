//! Shared fenced front matter parsing for the TOML and YAML handlers
//!
//! Both formats open and close their block with a fence line (`+++` or
//! `---`). The block between the fences is handed to the format's decoder
//! and the decoded map is stored under `data`.

use crate::error::{Error, Result};
use crate::format::{Format, ParseOutcome};
use crate::metadata::Metadata;
use crate::options::ParseOptions;
use crate::split::split;
use crate::value::Value;

/// Split `input` on the format's fence and decode the block with `decode`.
pub fn parse_fenced<'a, F>(
    format: Format,
    input: &'a [u8],
    options: &ParseOptions,
    decode: F,
) -> Result<ParseOutcome<'a>>
where
    F: FnOnce(&[u8]) -> Result<Value>,
{
    let fence = format
        .fence()
        .ok_or_else(|| Error::no_match(format, "format has no fence"))?;

    let parts = split(input, fence)
        .ok_or_else(|| Error::no_match(format, "missing or unterminated front matter"))?;

    let data = decode(parts.meta)?;
    if data.as_map().is_none() {
        return Err(Error::decode(format, "front matter is not a map"));
    }

    Ok(ParseOutcome::new(
        format,
        Metadata::wrapped(data, options),
        parts.body,
    ))
}
