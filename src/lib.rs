//! # Record Table Analyzer
//!
//! Loads a text file of fixed-width integer records into a growable table
//! and runs five batch queries over it:
//!
//! 1. Reverse listing (records and values within each record reversed)
//! 2. Most frequent value(s) in `[-100, 100]`
//! 3. Number of neighbouring records sharing a value
//! 4. Global minimum and maximum
//! 5. Records sorted by ascending sum
//!
//! ## Usage
//!
//! ```
//! use std::io::Cursor;
//! use record_table_analyzer::{loader, Report};
//!
//! let mut table = loader::load::<2, _>(Cursor::new("1 2\n3 -1\n5 5\n")).unwrap().table;
//! let report = Report::build(&mut table);
//! assert_eq!(report.overlapping_pairs, 0);
//! ```

pub mod analyzer;
pub mod cli;
pub mod error;
pub mod loader;
pub mod record;
pub mod report;
pub mod table;

pub use analyzer::{Histogram, MinMax};
pub use error::{AnalyzerError, ParseError, Result};
pub use loader::{LoadSummary, Loaded};
pub use record::{DefaultRecord, RECORD_WIDTH, Record};
pub use report::Report;
pub use table::Table;
