//! Front matter parsers

mod fenced;
mod json;
mod none;
mod toml;
mod valid_json;
mod yaml;

pub use self::json::JsonParser;
pub use self::toml::TomlParser;
pub use self::yaml::YamlParser;
pub use none::NoneParser;
pub use valid_json::ValidJsonParser;
