//! Error types for templates.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur while loading data or rendering a template.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Could not read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse data from {origin}: {message}")]
    Parse { origin: String, message: String },

    #[error("Unrecognised data source '{0}' (expected file://, yaml:// or json://)")]
    UnknownSource(String),

    #[error("Template syntax error: {0}")]
    Syntax(String),

    #[error("Template rendering failed: {0}")]
    Render(String),
}

impl TemplateError {
    pub(crate) fn parse(origin: impl Into<String>, message: impl ToString) -> Self {
        Self::Parse {
            origin: origin.into(),
            message: message.to_string(),
        }
    }

    /// Whether this error came from reading the filesystem.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Whether this error came from a malformed or unrecognised data source.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::UnknownSource(_))
    }

    /// Whether this error came from compiling or evaluating the template.
    pub fn is_template(&self) -> bool {
        matches!(self, Self::Syntax(_) | Self::Render(_))
    }
}

impl From<minijinja::Error> for TemplateError {
    fn from(err: minijinja::Error) -> Self {
        let message = err.to_string();
        match err.kind() {
            minijinja::ErrorKind::SyntaxError => Self::Syntax(message),
            _ => Self::Render(message),
        }
    }
}
