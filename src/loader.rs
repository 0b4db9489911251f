//! Line-oriented loader that turns raw text into a [`Table`].
//!
//! Every input line is parsed independently. Lines that do not start with
//! `N` integers are skipped with a warning; loading only ends when the line
//! source is exhausted.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info, warn};

use crate::error::{AnalyzerError, ParseError, Result};
use crate::record::Record;
use crate::table::Table;

/// Counters describing one load pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Lines pulled from the source, including rejected ones.
    pub lines_read: usize,
    /// Lines turned into records.
    pub accepted: usize,
    /// Lines skipped because they did not start with enough integers.
    pub rejected: usize,
    /// I/O failures from the source. The first one ends the pass.
    pub read_errors: usize,
}

/// A finalized table together with the counters of the pass that built it.
#[derive(Debug)]
pub struct Loaded<const N: usize> {
    pub table: Table<N>,
    pub summary: LoadSummary,
}

/// Parses the first `N` integers of `line`.
///
/// See [`parse_record_bytes`] for the exact rules.
///
/// # Examples
///
/// ```
/// use record_table_analyzer::loader::parse_record;
///
/// let record = parse_record::<2>("3 -1 trailing words").unwrap();
/// assert_eq!(record.values(), &[3, -1]);
/// assert_eq!(record.sum(), 2);
///
/// let record = parse_record::<2>("5 5,").unwrap();
/// assert_eq!(record.values(), &[5, 5]);
///
/// assert!(parse_record::<2>("42").is_err());
/// ```
pub fn parse_record<const N: usize>(line: &str) -> std::result::Result<Record<N>, ParseError> {
    parse_record_bytes(line.as_bytes())
}

/// Parses the first `N` integers of a raw input line.
///
/// Each value is read by skipping whitespace and taking the longest
/// `[+-]?[0-9]+` run that follows. Reading stops at the first position
/// where no digit follows; whatever comes after the `N`th value (text,
/// punctuation, bytes that are not UTF-8) is ignored.
///
/// # Arguments
///
/// * `line` - Bytes of one input line, with or without its line terminator
///
/// # Returns
///
/// * `Ok(Record<N>)` - all `N` values were found
/// * `Err(ParseError::TooFewValues)` - fewer than `N` integers lead the line
/// * `Err(ParseError::OutOfRange)` - a digit run does not fit in `i32`
pub fn parse_record_bytes<const N: usize>(line: &[u8]) -> std::result::Result<Record<N>, ParseError> {
    let mut values = [0i32; N];
    let mut rest = line;

    for (position, slot) in values.iter_mut().enumerate() {
        let (digits, tail) = leading_integer(rest).ok_or(ParseError::TooFewValues {
            expected: N,
            found: position,
        })?;
        *slot = std::str::from_utf8(digits)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| ParseError::OutOfRange {
                position,
                token: String::from_utf8_lossy(digits).into_owned(),
            })?;
        rest = tail;
    }

    Ok(Record::new(values))
}

/// Splits `input` into its leading signed digit run and the remainder.
fn leading_integer(input: &[u8]) -> Option<(&[u8], &[u8])> {
    let start = input
        .iter()
        .position(|&b| !is_c_space(b))
        .unwrap_or(input.len());
    let body = &input[start..];

    let sign_len = usize::from(matches!(body.first(), Some(b'+' | b'-')));
    let digit_len = body[sign_len..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digit_len == 0 {
        return None;
    }
    Some(body.split_at(sign_len + digit_len))
}

// same set as C isspace: includes vertical tab
fn is_c_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0b' | b'\x0c')
}

/// Loads every parseable line of `reader` into a new table.
///
/// Lines are read as raw bytes, so content that is not UTF-8 never causes
/// a rejection on its own. A read failure ends the pass early: what was
/// loaded so far is kept and the failure is logged and counted in
/// `read_errors`.
///
/// # Errors
///
/// * `AnalyzerError::Allocation` - the table could not grow; nothing partial
///   is returned
pub fn load<const N: usize, R: BufRead>(mut reader: R) -> Result<Loaded<N>> {
    let mut table = Table::new();
    let mut summary = LoadSummary::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                warn!("reading stopped after line {}: {e}", summary.lines_read);
                summary.read_errors += 1;
                break;
            }
        }
        summary.lines_read += 1;
        let line_number = summary.lines_read;

        match parse_record_bytes::<N>(&buf) {
            Ok(record) => {
                table.push(record)?;
                summary.accepted += 1;
            }
            Err(e) => {
                warn!(
                    "line {line_number} skipped ({} records accepted so far): {e}",
                    table.len()
                );
                summary.rejected += 1;
            }
        }
    }

    table.finalize();
    debug!("table finalized with capacity {}", table.capacity());
    info!(
        "loaded {} records from {} lines ({} rejected, {} read errors)",
        summary.accepted, summary.lines_read, summary.rejected, summary.read_errors
    );

    Ok(Loaded { table, summary })
}

/// Opens `path` and loads it with [`load`].
///
/// # Errors
///
/// * `AnalyzerError::Io` - the file cannot be opened; no parsing is attempted
/// * `AnalyzerError::Allocation` - see [`load`]
pub fn load_path<const N: usize>(path: impl AsRef<Path>) -> Result<Loaded<N>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| AnalyzerError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load(BufReader::new(file))
}
