//! # field-extract
//!
//! Pull a single string field out of a JSON array of records and write the
//! values to a text file, one per line.
//!
//! ## Overview
//!
//! - **Source**: one JSON document holding a top-level array of objects
//! - **Selection**: records holding the field contribute one line each,
//!   records without it are skipped
//! - **Output**: values written verbatim in source order, each followed by `\n`
//!
//! ## Example
//!
//! ```
//! use field_extract::{SourceCollection, extract_lines};
//!
//! let source = SourceCollection::from_json_str(r#"[
//!     {"quote": "Waste no more time arguing what a good man should be. Be one."},
//!     {"prompt": "What did you postpone today?"},
//!     {"quote": "No man is free who is not master of himself."}
//! ]"#).unwrap();
//!
//! let text = extract_lines(&source, "quote").unwrap();
//! assert_eq!(text.lines().count(), 2);
//! ```

pub mod config;
pub mod error;
pub mod extractor;
pub mod record;

pub use config::{DEFAULT_FIELD, DEFAULT_INPUT, DEFAULT_OUTPUT, Destination, ExtractConfig};
pub use error::{ExtractError, Result};
pub use extractor::{ExtractSummary, Extractor, extract_lines, select_field, write_lines};
pub use record::{Record, SourceCollection};
