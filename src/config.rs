//! Run configuration: where to read, where to write, which field to take.

use std::fmt;
use std::path::PathBuf;

/// Source read when no input path is given.
pub const DEFAULT_INPUT: &str = "data/stoic-content.json";
/// Destination written when no output path is given.
pub const DEFAULT_OUTPUT: &str = "quotes_list.txt";
/// Field extracted when none is named.
pub const DEFAULT_FIELD: &str = "quote";

/// Output path that selects stdout instead of a file.
pub const STDOUT_MARKER: &str = "-";

/// Where extracted lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Truncate (or create) this file and write to it.
    File(PathBuf),
    Stdout,
}

impl Destination {
    /// Parse an output argument, treating `-` as stdout.
    pub fn from_arg(arg: &str) -> Self {
        if arg == STDOUT_MARKER {
            Destination::Stdout
        } else {
            Destination::File(PathBuf::from(arg))
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::File(path) => write!(f, "{}", path.display()),
            Destination::Stdout => f.write_str("(stdout)"),
        }
    }
}

/// Everything an [`Extractor`](crate::Extractor) needs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    pub input: PathBuf,
    pub output: Destination,
    pub field: String,
}

impl ExtractConfig {
    pub fn new(input: impl Into<PathBuf>, output: Destination, field: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output,
            field: field.into(),
        }
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_INPUT,
            Destination::from_arg(DEFAULT_OUTPUT),
            DEFAULT_FIELD,
        )
    }
}
