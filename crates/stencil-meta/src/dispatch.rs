//! Format dispatch
//!
//! A document is offered to each parser in a fixed order and the first one
//! that matches wins:
//!
//! 1. [`ValidJsonParser`]: the whole document is a JSON object or array
//! 2. [`TomlParser`]: `+++` fenced front matter
//! 3. [`YamlParser`]: `---` fenced front matter
//! 4. [`JsonParser`]: a JSON object followed by a body
//! 5. [`NoneParser`]: no front matter at all
//!
//! The last parser always matches, so dispatch never fails.

use crate::format::{FrontMatterParser, ParseOutcome};
use crate::handlers::{JsonParser, NoneParser, TomlParser, ValidJsonParser, YamlParser};
use crate::options::ParseOptions;

/// Parsers tried before falling back to [`NoneParser`], in order
pub static CANDIDATES: [&dyn FrontMatterParser; 4] =
    [&ValidJsonParser, &TomlParser, &YamlParser, &JsonParser];

/// Parse a document with the default options
pub fn parse_document(input: &[u8]) -> ParseOutcome<'_> {
    parse_document_with(input, &ParseOptions::default())
}

/// Parse a document, returning the first matching parser's outcome
pub fn parse_document_with<'a>(input: &'a [u8], options: &ParseOptions) -> ParseOutcome<'a> {
    for parser in CANDIDATES.iter() {
        match parser.parse(input, options) {
            Ok(outcome) => {
                tracing::debug!(format = %outcome.format, body_len = outcome.body.len(), "Front matter parsed");
                return outcome;
            }
            Err(e) => {
                tracing::debug!(format = %parser.format(), error = %e, "Parser rejected document");
            }
        }
    }

    tracing::debug!("No front matter found");
    NoneParser::new().outcome(input, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Format;

    #[test]
    fn test_dispatch_order() {
        let formats: Vec<Format> = CANDIDATES.iter().map(|p| p.format()).collect();
        assert_eq!(
            formats,
            vec![Format::ValidJson, Format::Toml, Format::Yaml, Format::Json]
        );
    }

    #[test]
    fn test_whole_json_prefers_valid_json() {
        assert_eq!(parse_document(b"{\"title\": \"A\"}").format, Format::ValidJson);
    }

    #[test]
    fn test_json_with_body() {
        let outcome = parse_document(b"{\"title\": \"A\"}\nbody");
        assert_eq!(outcome.format, Format::Json);
        assert_eq!(outcome.body, b"\nbody");
    }

    #[test]
    fn test_fenced_formats() {
        assert_eq!(parse_document(b"+++\na = 1\n+++\n").format, Format::Toml);
        assert_eq!(parse_document(b"---\na: 1\n---\n").format, Format::Yaml);
    }

    #[test]
    fn test_fallback_to_none() {
        let input = b"---\nunterminated: true\n";
        let outcome = parse_document(input);
        assert_eq!(outcome.format, Format::None);
        assert_eq!(outcome.body, input);
    }

    #[test]
    fn test_json_scalar_is_body() {
        let outcome = parse_document(b"42");
        assert_eq!(outcome.format, Format::None);
        assert_eq!(outcome.body, b"42");
    }
}
