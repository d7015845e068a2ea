//! Tests for the TOML front matter parser

mod common;

use common::{TOML_FIELDS, expected_data};
use pretty_assertions::assert_eq;
use rstest::rstest;
use stencil_meta::handlers::TomlParser;
use stencil_meta::{Error, Format, FrontMatterParser, ParseOptions, Value, parse_document};
use stencil_test_utils::fenced;

fn parse(input: &str) -> stencil_meta::Result<stencil_meta::ParseOutcome<'_>> {
    TomlParser::new().parse(input.as_bytes(), &ParseOptions::default())
}

#[test]
fn test_toml_with_body() {
    let doc = fenced("+++", TOML_FIELDS, "Page content\n\t");
    let outcome = parse(&doc).unwrap();

    assert_eq!(outcome.format, Format::Toml);
    assert_eq!(outcome.metadata.title, "A title");
    assert_eq!(outcome.metadata.template, "default");
    assert_eq!(outcome.metadata.data(), Some(&Value::Map(expected_data())));
    assert_eq!(outcome.body_str().trim(), "Page content");
}

#[test]
fn test_toml_without_body() {
    let doc = fenced("+++", TOML_FIELDS, "");
    let outcome = parse(&doc).unwrap();
    assert!(outcome.body.is_empty());
    assert_eq!(outcome.metadata.data(), Some(&Value::Map(expected_data())));
}

#[test]
fn test_toml_scenario() {
    let doc = "+++\ntitle = \"A title\"\ntemplate = \"default\"\n+++\nPage content\n";
    let outcome = parse_document(doc.as_bytes());
    assert_eq!(outcome.format, Format::Toml);
    assert_eq!(outcome.metadata.title, "A title");
    assert_eq!(outcome.metadata.template, "default");
    assert_eq!(outcome.body_str().trim(), "Page content");
}

#[rstest]
#[case::no_fences(TOML_FIELDS)]
#[case::unterminated("+++\ntitle = \"A title\"\ntemplate = \"default\"\n\t")]
#[case::one_line(r#"title = "A title" template = "default" [variables] name = "value""#)]
fn test_toml_no_match(#[case] input: &str) {
    let err = parse(input).unwrap_err();
    assert!(matches!(err, Error::NoMatch { format: Format::Toml, .. }));
}

#[test]
fn test_toml_invalid_block_is_decode_error() {
    let doc = fenced("+++", "title = = \"broken\"\n", "body");
    let err = parse(&doc).unwrap_err();
    assert!(matches!(err, Error::Decode { format: Format::Toml, .. }));

    // Dispatch falls back to treating the whole document as body
    let outcome = parse_document(doc.as_bytes());
    assert_eq!(outcome.format, Format::None);
    assert_eq!(outcome.body, doc.as_bytes());
}

#[test]
fn test_toml_nested_tables() {
    let doc = fenced(
        "+++",
        "title = \"T\"\ntags = [\"a\", \"b\"]\n\n[author]\nname = \"Ada\"\n",
        "text",
    );
    let outcome = parse(&doc).unwrap();
    let data = outcome.metadata.data().unwrap();
    assert_eq!(
        data.get("tags"),
        Some(&Value::Sequence(vec![Value::from("a"), Value::from("b")]))
    );
    assert_eq!(
        data.get("author").and_then(|a| a.get("name")),
        Some(&Value::from("Ada"))
    );
}

#[rstest]
#[case::quoted_with_offset("date = \"2018-03-04 10:11:12+0100\"\n", true)]
#[case::quoted_naive("date = \"2018-03-04 10:11:12\"\n", true)]
#[case::bare_local_date("date = 2018-03-04\n", true)]
#[case::rfc3339_not_a_layout("date = 2018-03-04T10:11:12Z\n", false)]
#[case::not_a_date("date = \"soon\"\n", false)]
fn test_toml_date(#[case] meta: &str, #[case] parsed: bool) {
    let doc = fenced("+++", meta, "");
    let outcome = parse(&doc).unwrap();
    assert_eq!(outcome.metadata.date.is_some(), parsed);
}
