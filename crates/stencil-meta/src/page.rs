//! Page assembly
//!
//! Turns a raw document into the variable set a template renderer consumes:
//! the decoded front matter plus `body`, with `title` falling back to one
//! derived from the file name.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::dispatch::parse_document_with;
use crate::error::Result;
use crate::format::Format;
use crate::options::ParseOptions;
use crate::value::{Map, Value};

/// Variable holding the document body
pub const BODY_KEY: &str = "body";

/// Variable holding the fallback title
pub const TITLE_KEY: &str = "title";

/// Fallback title for a path: the last `/`-separated element without its
/// extension.
///
/// The extension runs from the final `.` of the last element, so a dotfile
/// such as `.bashrc` has an empty title. A path of only slashes is titled
/// `/` and an empty path `.`.
pub fn title_from_path(path: impl AsRef<Path>) -> String {
    let path = path.as_ref().to_string_lossy();
    let base = base_name(&path);
    let ext = match path.rfind(['.', '/']) {
        Some(i) if path[i..].starts_with('.') => &path[i..],
        _ => "",
    };
    base.strip_suffix(ext).unwrap_or(base).to_string()
}

fn base_name(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/";
    }
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

/// A parsed document ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    /// Format the front matter was found in
    pub format: Format,
    /// Front matter title, or the fallback title
    pub title: String,
    /// Template to render with; empty selects the default template
    pub template: String,
    pub date: Option<DateTime<FixedOffset>>,
    /// Front matter variables plus `body` and, when needed, `title`
    pub variables: Map,
}

impl Page {
    /// Parse `document` and build its variables.
    ///
    /// `fallback_title` fills `title` when the front matter has none. A
    /// top-level `title` variable that is not a string is left untouched.
    pub fn assemble(fallback_title: &str, document: &[u8], options: &ParseOptions) -> Self {
        let outcome = parse_document_with(document, options);
        let body = outcome.body_str().into_owned();
        let metadata = outcome.metadata;

        let mut variables = metadata.variables;
        variables.insert(BODY_KEY.to_string(), Value::String(body));

        let title = if metadata.title.is_empty() {
            variables
                .entry(TITLE_KEY.to_string())
                .or_insert_with(|| Value::from(fallback_title));
            fallback_title.to_string()
        } else {
            metadata.title
        };

        Self {
            format: outcome.format,
            title,
            template: metadata.template,
            date: metadata.date,
            variables,
        }
    }

    /// Read and assemble the document at `path`.
    ///
    /// Reading the file is the only step that can fail.
    pub fn read(path: impl AsRef<Path>, options: &ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        let document = fs::read(path)?;
        let page = Self::assemble(&title_from_path(path), &document, options);
        tracing::debug!(path = %path.display(), format = %page.format, template = %page.template, "Assembled page");
        Ok(page)
    }

    /// The body variable
    pub fn body(&self) -> &str {
        self.variables
            .get(BODY_KEY)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}

/// File extensions treated as stencil documents within a path scope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Extensions(BTreeSet<String>);

impl Extensions {
    /// Extensions used when a scope configures none
    pub const DEFAULT: [&'static str; 2] = [".html", ".json"];

    /// Build the set, falling back to [`Extensions::DEFAULT`] when empty.
    /// A missing leading dot is added.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set: BTreeSet<String> = extensions
            .into_iter()
            .map(|ext| {
                let ext = ext.as_ref();
                if ext.starts_with('.') {
                    ext.to_string()
                } else {
                    format!(".{ext}")
                }
            })
            .collect();

        if set.is_empty() {
            Self::default()
        } else {
            Self(set)
        }
    }

    /// Whether `path` carries one of the extensions
    pub fn matches(&self, path: impl AsRef<Path>) -> bool {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.0.contains(&format!(".{ext}")))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for Extensions {
    fn default() -> Self {
        Self(Self::DEFAULT.iter().map(|s| s.to_string()).collect())
    }
}

impl From<Vec<String>> for Extensions {
    fn from(extensions: Vec<String>) -> Self {
        Self::new(extensions)
    }
}

impl From<Extensions> for Vec<String> {
    fn from(extensions: Extensions) -> Self {
        extensions.0.into_iter().collect()
    }
}
