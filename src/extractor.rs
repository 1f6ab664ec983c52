//! Field extraction: select one field from every record and write the
//! values out one per line.
//!
//! A run happens in two passes over the in-memory source. The first picks
//! out the values and checks their types; the second writes them. The
//! destination is only opened once the first pass has succeeded, so a bad
//! source never truncates an existing output file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::{Destination, ExtractConfig};
use crate::error::{ExtractError, Result, json_type_name};
use crate::record::SourceCollection;

/// Counts from one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    /// Records in the source.
    pub records: usize,
    /// Lines produced, one per record holding the field.
    pub lines: usize,
    /// Records without the field.
    pub skipped: usize,
}

/// Values of `field`, borrowed from `source`, in source order.
///
/// Records without the key are skipped. A present key must hold a string;
/// the empty string counts and yields an empty line.
pub fn select_field<'a>(source: &'a SourceCollection, field: &str) -> Result<Vec<&'a str>> {
    let mut lines = Vec::with_capacity(source.len());
    for (index, record) in source.iter().enumerate() {
        match record.get(field) {
            Some(serde_json::Value::String(value)) => lines.push(value.as_str()),
            Some(other) => {
                return Err(ExtractError::FieldType {
                    index,
                    field: field.to_string(),
                    found: json_type_name(other),
                });
            }
            None => debug!(index, field, "record has no such field, skipping"),
        }
    }
    Ok(lines)
}

/// Write each value followed by `\n`. Values are not escaped or trimmed.
pub fn write_lines<W: Write>(lines: &[&str], out: &mut W) -> io::Result<()> {
    for line in lines {
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Extract `field` from `source` into a newline-terminated string.
///
/// # Example
///
/// ```
/// use field_extract::{SourceCollection, extract_lines};
///
/// let source = SourceCollection::from_json_str(
///     r#"[{"quote": "A"}, {"author": "B"}, {"quote": "C"}]"#,
/// ).unwrap();
/// assert_eq!(extract_lines(&source, "quote").unwrap(), "A\nC\n");
/// ```
pub fn extract_lines(source: &SourceCollection, field: &str) -> Result<String> {
    let lines = select_field(source, field)?;
    let mut out = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    Ok(out)
}

/// Runs one load, select, write pass for a configuration.
#[derive(Debug, Clone)]
pub struct Extractor {
    config: ExtractConfig,
}

impl Extractor {
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    /// Load the source, then create or truncate the destination and write
    /// one line per record holding the field.
    pub fn run(&self) -> Result<ExtractSummary> {
        let source = SourceCollection::load(&self.config.input)?;
        let lines = select_field(&source, &self.config.field)?;

        match &self.config.output {
            Destination::File(path) => {
                let file = File::create(path).map_err(|e| write_error(path, e))?;
                let mut out = BufWriter::new(file);
                write_lines(&lines, &mut out).map_err(|e| write_error(path, e))?;
                out.flush().map_err(|e| write_error(path, e))?;
            }
            Destination::Stdout => {
                let stdout = io::stdout();
                let mut out = BufWriter::new(stdout.lock());
                write_lines(&lines, &mut out).map_err(|e| write_error(Path::new("-"), e))?;
                out.flush().map_err(|e| write_error(Path::new("-"), e))?;
            }
        }

        let summary = ExtractSummary {
            records: source.len(),
            lines: lines.len(),
            skipped: source.len() - lines.len(),
        };
        info!(
            input = %self.config.input.display(),
            output = %self.config.output,
            field = %self.config.field,
            records = summary.records,
            lines = summary.lines,
            skipped = summary.skipped,
            "extraction complete"
        );
        Ok(summary)
    }
}

// A missing parent directory on the destination side is an I/O failure,
// not a missing source, so this bypasses `ExtractError::io`.
fn write_error(path: &Path, source: io::Error) -> ExtractError {
    ExtractError::Io {
        path: PathBuf::from(path),
        source,
    }
}
