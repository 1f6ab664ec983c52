//! CLI tool to extract one field from a JSON array of records.
//!
//! Usage:
//!   field-extract
//!   field-extract -i data/stoic-content.json -o quotes_list.txt -f quote
//!   field-extract -i records.json -o -
//!
//! With no arguments, reads `data/stoic-content.json` and writes the `quote`
//! field of every record to `quotes_list.txt`.

use clap::Parser;
use field_extract::{
    DEFAULT_FIELD, DEFAULT_INPUT, DEFAULT_OUTPUT, Destination, ExtractConfig, Extractor,
};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Write one field of every JSON record to a text file, one value per line.
///
/// Records without the field are skipped. An existing output file is
/// overwritten.
#[derive(Parser, Debug)]
#[command(name = "field-extract", version)]
struct Cli {
    /// Input file holding a JSON array of objects
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: String,

    /// Output text file, or `-` for stdout
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: String,

    /// Name of the field to extract
    #[arg(short, long, default_value = DEFAULT_FIELD)]
    field: String,

    /// Show paths and record counts on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl From<Cli> for ExtractConfig {
    fn from(cli: Cli) -> Self {
        ExtractConfig::new(cli.input, Destination::from_arg(&cli.output), cli.field)
    }
}

// `--verbose` reporting goes through eprintln; tracing output is only for
// diagnostics requested via RUST_LOG.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_tracing();

    let config = ExtractConfig::from(cli);
    if verbose {
        eprintln!("Input:  {}", config.input.display());
        eprintln!("Output: {}", config.output);
        eprintln!("Field:  {}", config.field);
    }

    match Extractor::new(config).run() {
        Ok(summary) => {
            if verbose {
                eprintln!(
                    "Processed {} records -> {} lines ({} skipped)",
                    summary.records, summary.lines, summary.skipped
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!(kind = e.kind(), "extraction failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
