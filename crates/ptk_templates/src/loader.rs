//! Data source loading.
//!
//! A data source is described by a `scheme://payload` string:
//!
//! - `file://PATH` reads a YAML (or JSON) file from disk
//! - `yaml://DOCUMENT` parses an inline YAML document
//! - `json://DOCUMENT` parses an inline JSON document
//!
//! JSON is accepted by the YAML parser, so both inline forms share one code path.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::error::{TemplateError, TemplateResult};

const FILE_SCHEME: &str = "file://";
const YAML_SCHEME: &str = "yaml://";
const JSON_SCHEME: &str = "json://";

/// A single parsed data document.
pub type Document = Mapping;

/// Where a document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Yaml(String),
    Json(String),
}

impl DataSource {
    /// Parse a `scheme://payload` descriptor.
    pub fn parse(descriptor: &str) -> TemplateResult<Self> {
        if let Some(path) = descriptor.strip_prefix(FILE_SCHEME) {
            Ok(Self::File(PathBuf::from(path)))
        } else if let Some(payload) = descriptor.strip_prefix(YAML_SCHEME) {
            Ok(Self::Yaml(payload.to_string()))
        } else if let Some(payload) = descriptor.strip_prefix(JSON_SCHEME) {
            Ok(Self::Json(payload.to_string()))
        } else {
            Err(TemplateError::UnknownSource(descriptor.to_string()))
        }
    }

    /// Load and parse the document this source points at.
    pub fn load(&self) -> TemplateResult<Document> {
        debug!("Loading data from {}", self);

        match self {
            Self::File(path) => {
                let origin = path.display().to_string();
                let bytes = read_bytes(path)?;
                let content = String::from_utf8(bytes)
                    .map_err(|e| TemplateError::parse(origin.as_str(), e))?;
                parse_document(&content, &origin)
            }
            Self::Yaml(payload) => parse_document(payload, "inline YAML"),
            Self::Json(payload) => parse_document(payload, "inline JSON"),
        }
    }
}

impl FromStr for DataSource {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Inline payloads are summarised; they may hold secrets.
        match self {
            Self::File(path) => write!(f, "{}{}", FILE_SCHEME, path.display()),
            Self::Yaml(payload) => write!(f, "{}<{} bytes>", YAML_SCHEME, payload.len()),
            Self::Json(payload) => write!(f, "{}<{} bytes>", JSON_SCHEME, payload.len()),
        }
    }
}

/// Parse a descriptor and load the document it names.
pub fn load_document(descriptor: &str) -> TemplateResult<Document> {
    DataSource::parse(descriptor)?.load()
}

/// Parse a raw YAML/JSON payload into a document.
///
/// An empty payload yields an empty document. Merge keys (`<<: *anchor`) are
/// resolved. Any top-level value other than a mapping is rejected.
pub fn parse_document(payload: &str, origin: &str) -> TemplateResult<Document> {
    if payload.trim().is_empty() {
        return Ok(Document::new());
    }

    let mut value: Value =
        serde_yaml::from_str(payload).map_err(|e| TemplateError::parse(origin, e))?;
    value
        .apply_merge()
        .map_err(|e| TemplateError::parse(origin, e))?;

    match value {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Document::new()),
        other => Err(TemplateError::parse(
            origin,
            format!("expected a mapping at the top level, found {}", kind_of(&other)),
        )),
    }
}

/// Read a whole file, attaching the path to any I/O error.
///
/// Decoding is left to the caller so malformed contents are not reported
/// as read failures.
pub(crate) fn read_bytes(path: &Path) -> TemplateResult<Vec<u8>> {
    fs::read(path).map_err(|source| TemplateError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
