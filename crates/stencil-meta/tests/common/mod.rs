//! Fixtures shared by the parser test suites

#![allow(dead_code)]

use stencil_meta::{Map, Value};

/// Fields every well-formed fixture decodes to
pub fn expected_data() -> Map {
    let mut map = Map::new();
    map.insert("title".to_string(), Value::from("A title"));
    map.insert("template".to_string(), Value::from("default"));
    map.insert("name".to_string(), Value::from("value"));
    map.insert("positive".to_string(), Value::Bool(true));
    map.insert("negative".to_string(), Value::Bool(false));
    map.insert("number".to_string(), Value::Integer(1410));
    map.insert("float".to_string(), Value::Float(1410.07));
    map
}

pub const TOML_FIELDS: &str = r#"title = "A title"
template = "default"
name = "value"
positive = true
negative = false
number = 1410
float = 1410.07
"#;

pub const YAML_FIELDS: &str = "title : A title
template : default
name : value
positive : true
negative : false
number : 1410
float : 1410.07
";

pub const JSON_OBJECT: &str = r#"{
	"title" : "A title",
	"template" : "default",
	"name" : "value",
	"positive" : true,
	"negative" : false,
	"number" : 1410,
	"float": 1410.07
}"#;
