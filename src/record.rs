//! Records and the source collection they are loaded into.
//!
//! The source is a single JSON document holding a top-level array. Every
//! element must be an object; anything else is rejected while loading, so a
//! bad element never gets as far as the output file.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{ExtractError, Result, json_type_name};

/// One entry of the source array: field name to JSON value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Look up a field. An absent key is `None`, never an error.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Presence check for library callers. Any value counts, null included.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

/// The whole source array, held in memory in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceCollection {
    records: Vec<Record>,
}

impl SourceCollection {
    /// Read and parse a source file.
    ///
    /// Bytes that are not valid UTF-8 are a parse error, not an I/O error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| ExtractError::io(path, e))?;
        debug!(path = %path.display(), bytes = bytes.len(), "read source file");
        Self::from_json_slice(&bytes)
    }

    /// Parse source text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::from_json_slice(text.as_bytes())
    }

    /// Parse raw source bytes.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::try_from(value)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl TryFrom<Value> for SourceCollection {
    type Error = ExtractError;

    fn try_from(value: Value) -> Result<Self> {
        let elements = match value {
            Value::Array(elements) => elements,
            other => return Err(ExtractError::NotASequence(json_type_name(&other))),
        };

        let records = elements
            .into_iter()
            .enumerate()
            .map(|(index, element)| match element {
                Value::Object(fields) => Ok(Record::new(fields)),
                other => Err(ExtractError::NotARecord {
                    index,
                    found: json_type_name(&other),
                }),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { records })
    }
}
