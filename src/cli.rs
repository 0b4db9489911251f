//! Command-line entry point.
//!
//! ```bash
//! $ record-table-analyzer path/to/records.txt
//! $ RUST_LOG=info record-table-analyzer path/to/records.txt
//! ```

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;

use crate::error::{AnalyzerError, Result};
use crate::loader::{self, LoadSummary};
use crate::record::RECORD_WIDTH;
use crate::report::Report;

#[derive(Parser, Debug)]
#[command(name = "record-table-analyzer")]
#[command(about = "Load fixed-width integer records and print five batch reports")]
#[command(version)]
pub struct Args {
    /// Text file with one record of whitespace-separated integers per line
    pub input: PathBuf,
}

/// Loads `args.input`, runs every query and writes the report to `out`.
///
/// The input is opened before anything is parsed, so an unreadable path
/// fails without touching `out`.
///
/// # Errors
///
/// * `AnalyzerError::Io` - the input cannot be opened
/// * `AnalyzerError::Allocation` - the table could not grow while loading
/// * `AnalyzerError::Write` - the report could not be written to `out`
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<LoadSummary> {
    let loaded = loader::load_path::<RECORD_WIDTH>(&args.input)?;
    let mut table = loaded.table;

    let report = Report::build(&mut table);
    report
        .render(out)
        .and_then(|()| out.flush())
        .map_err(AnalyzerError::Write)?;

    Ok(loaded.summary)
}

/// Main entry point for the record table analyzer binary.
///
/// # Workflow
///
/// 1. Initialise logging (`RUST_LOG`, default `warn`)
/// 2. Parse the single input path argument
/// 3. Load, analyze and print the report to stdout
/// 4. Map failures to a non-zero exit status
pub fn record_table_analyzer_main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    info!("analyzing {} with {} values per record", args.input.display(), RECORD_WIDTH);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match run(&args, &mut out) {
        Ok(summary) => {
            info!("{} of {} lines accepted", summary.accepted, summary.lines_read);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
