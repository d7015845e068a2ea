//! Normalized document metadata

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::options::ParseOptions;
use crate::value::{Map, Value};

/// Key under which parsers store the decoded front matter
pub const DATA_KEY: &str = "data";

/// A document's metadata.
///
/// `variables` holds every decoded field verbatim. The convenience fields are
/// looked up in `variables` and never invented: missing or non-string values
/// leave them empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Metadata {
    /// Page title
    pub title: String,
    /// Page template name
    pub template: String,
    /// Page date, when present and in a recognised layout
    pub date: Option<DateTime<FixedOffset>>,
    /// Variables to be used with the template
    pub variables: Map,
}

impl Metadata {
    /// Build metadata from a decoded field map using the default keys
    pub fn new(raw: Map) -> Self {
        Self::with_options(raw, &ParseOptions::default())
    }

    /// Build metadata from a decoded field map.
    ///
    /// Fields are looked up at the top level first, then inside a nested
    /// `data` map.
    pub fn with_options(raw: Map, options: &ParseOptions) -> Self {
        let title = lookup_str(&raw, &options.title_key);
        let template = lookup_str(&raw, &options.template_key);
        let date = lookup(&raw, &options.date_key)
            .and_then(Value::as_str)
            .and_then(|s| parse_date(s, &options.date_layouts));

        Self {
            title,
            template,
            date,
            variables: raw,
        }
    }

    /// Build metadata with `data` stored under the `data` key
    pub fn wrapped(data: Value, options: &ParseOptions) -> Self {
        let mut raw = Map::new();
        raw.insert(DATA_KEY.to_string(), data);
        Self::with_options(raw, options)
    }

    /// The decoded front matter when it was stored under `data`
    pub fn data(&self) -> Option<&Value> {
        self.variables.get(DATA_KEY)
    }
}

fn lookup<'a>(raw: &'a Map, key: &str) -> Option<&'a Value> {
    raw.get(key)
        .or_else(|| raw.get(DATA_KEY).and_then(|data| data.get(key)))
}

fn lookup_str(raw: &Map, key: &str) -> String {
    lookup(raw, key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Parse a date against `layouts`, keeping the first layout that matches.
///
/// Layouts without an offset are read as UTC; date-only layouts as midnight.
pub fn parse_date<S: AsRef<str>>(input: &str, layouts: &[S]) -> Option<DateTime<FixedOffset>> {
    let input = input.trim();
    layouts.iter().find_map(|layout| {
        let layout: &str = layout.as_ref();
        if let Ok(dt) = DateTime::parse_from_str(input, layout) {
            return Some(dt);
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, layout) {
            return Some(naive.and_utc().fixed_offset());
        }
        NaiveDate::parse_from_str(input, layout)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc().fixed_offset())
    })
}
