//! Record Table Analyzer - binary entry point.
//!
//! # Usage
//!
//! ```bash
//! $ cargo run --release -- path/to/records.txt
//!
//! # Two integers per record instead of ten
//! $ cargo run --release --features width_2 -- path/to/records.txt
//! ```

use std::process::ExitCode;

use record_table_analyzer::cli::record_table_analyzer_main;

/// call into the library
fn main() -> ExitCode {
    record_table_analyzer_main()
}
