//! YAML front matter parser using serde_yaml

use serde_yaml::Value as YamlValue;

use super::fenced::parse_fenced;
use crate::error::{Error, Result};
use crate::format::{Format, FrontMatterParser, ParseOutcome};
use crate::options::ParseOptions;
use crate::value::{Map, Value};

/// Parser for `---` fenced YAML front matter
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlParser;

impl YamlParser {
    pub fn new() -> Self {
        Self
    }

    fn decode(meta: &[u8]) -> Result<Value> {
        if meta.trim_ascii().is_empty() {
            return Ok(Value::Map(Map::new()));
        }

        let yaml: YamlValue = serde_yaml::from_slice(meta)
            .map_err(|e| Error::decode(Format::Yaml, e.to_string()))?;

        // `~` or `null` on its own
        if yaml.is_null() {
            return Ok(Value::Map(Map::new()));
        }
        Ok(Value::from(yaml))
    }
}

impl FrontMatterParser for YamlParser {
    fn format(&self) -> Format {
        Format::Yaml
    }

    fn parse<'a>(&self, input: &'a [u8], options: &ParseOptions) -> Result<ParseOutcome<'a>> {
        parse_fenced(Format::Yaml, input, options, Self::decode)
    }
}
