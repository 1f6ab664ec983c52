//! Error types for field extraction.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Everything that can abort an extraction run.
///
/// None of these are recovered internally. The binary prints the message
/// and exits non-zero.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Source file does not exist.
    #[error("source file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Read or write failure on either file.
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Source content is not well-formed JSON.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Top-level JSON value is something other than an array.
    #[error("expected a top-level array of records, found {0}")]
    NotASequence(&'static str),

    /// An array element is not an object.
    #[error("record {index} is not an object (found {found})")]
    NotARecord { index: usize, found: &'static str },

    /// The designated field is present but does not hold a string.
    #[error("record {index}: field '{field}' is {found}, expected a string")]
    FieldType {
        index: usize,
        field: String,
        found: &'static str,
    },
}

impl ExtractError {
    /// Wrap an I/O error with the path it happened on, promoting a missing
    /// file to `NotFound`.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            ExtractError::NotFound(path)
        } else {
            ExtractError::Io { path, source }
        }
    }

    /// Short class label for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            ExtractError::NotFound(_) => "not found",
            ExtractError::Io { .. } => "io",
            ExtractError::Parse(_) | ExtractError::NotASequence(_) => "parse",
            ExtractError::NotARecord { .. } | ExtractError::FieldType { .. } => "type",
        }
    }
}

/// Name of a JSON value's type, for error messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
