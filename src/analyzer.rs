//! The five batch queries run over a loaded [`Table`].
//!
//! All queries are read-only except [`sum_sorted_listing`], which reorders
//! the table. Run it last when the other results must reflect file order.

use crate::error::{AnalyzerError, Result};
use crate::record::Record;
use crate::table::Table;

/// Lowest value tracked by the mode histogram.
pub const HISTOGRAM_MIN: i32 = -100;
/// Highest value tracked by the mode histogram.
pub const HISTOGRAM_MAX: i32 = 100;
/// Number of buckets in `[HISTOGRAM_MIN, HISTOGRAM_MAX]`.
pub const HISTOGRAM_BUCKETS: usize = (HISTOGRAM_MAX - HISTOGRAM_MIN + 1) as usize;

/// Records in reverse order, each with its values reversed.
///
/// # Arguments
///
/// * `table` - Table in file order
///
/// # Returns
///
/// * `Vec<[i32; N]>` - One entry per record, last record first; empty for
///   an empty table
pub fn reverse_listing<const N: usize>(table: &Table<N>) -> Vec<[i32; N]> {
    table
        .iter()
        .rev()
        .map(|record| {
            let mut values = *record.values();
            values.reverse();
            values
        })
        .collect()
}

/// Frequency of every integer in `[HISTOGRAM_MIN, HISTOGRAM_MAX]`.
///
/// Values outside the range are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u32; HISTOGRAM_BUCKETS],
}

impl Histogram {
    /// Counts every in-range value of every record in `table`.
    ///
    /// # Arguments
    ///
    /// * `table` - Table to scan; record order does not matter
    ///
    /// # Returns
    ///
    /// * `Histogram` - Counts for all `HISTOGRAM_BUCKETS` values, zero where
    ///   a value never occurs
    pub fn from_table<const N: usize>(table: &Table<N>) -> Self {
        let mut counts = [0u32; HISTOGRAM_BUCKETS];
        for value in table.values() {
            if let Some(bucket) = Self::bucket(value) {
                counts[bucket] += 1;
            }
        }
        Self { counts }
    }

    fn bucket(value: i32) -> Option<usize> {
        (HISTOGRAM_MIN..=HISTOGRAM_MAX)
            .contains(&value)
            .then(|| (value - HISTOGRAM_MIN) as usize)
    }

    /// Occurrences of `value`; zero for anything out of range.
    pub fn count(&self, value: i32) -> u32 {
        Self::bucket(value).map_or(0, |bucket| self.counts[bucket])
    }

    /// Highest bucket count; zero when nothing fell in range.
    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Every in-range value whose count equals the maximum, ascending.
    ///
    /// When nothing falls in range the maximum is zero and all
    /// `HISTOGRAM_BUCKETS` values are returned.
    pub fn modes(&self) -> Vec<i32> {
        let max = self.max_count();
        (HISTOGRAM_MIN..=HISTOGRAM_MAX)
            .zip(self.counts.iter())
            .filter(|&(_, &count)| count == max)
            .map(|(value, _)| value)
            .collect()
    }
}

/// Most frequent value(s) in `[HISTOGRAM_MIN, HISTOGRAM_MAX]`.
pub fn mode_histogram<const N: usize>(table: &Table<N>) -> Vec<i32> {
    Histogram::from_table(table).modes()
}

/// Number of neighbouring record pairs sharing at least one value.
///
/// Each pair `(i, i + 1)` counts once however many values it shares.
///
/// # Arguments
///
/// * `table` - Table in file order
///
/// # Returns
///
/// * `usize` - Matching pairs; zero for fewer than two records
pub fn adjacency_overlap_count<const N: usize>(table: &Table<N>) -> usize {
    table
        .records()
        .windows(2)
        .filter(|pair| pair[0].shares_value_with(&pair[1]))
        .count()
}

/// Smallest and largest value across the whole table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinMax {
    pub min: i32,
    pub max: i32,
}

/// Global minimum and maximum.
///
/// # Errors
///
/// * `AnalyzerError::EmptyTable` - there is no value to seed the scan with
pub fn min_max<const N: usize>(table: &Table<N>) -> Result<MinMax> {
    let mut values = table.values();
    let first = values.next().ok_or(AnalyzerError::EmptyTable)?;

    Ok(values.fold(MinMax { min: first, max: first }, |acc, v| MinMax {
        min: acc.min.min(v),
        max: acc.max.max(v),
    }))
}

/// Sorts the table by ascending sum, in place, and returns its records.
///
/// Whole records move, so each keeps its own sum. Equal sums keep their
/// previous relative order.
///
/// # Arguments
///
/// * `table` - Table to reorder; stays sorted afterwards
///
/// # Returns
///
/// * `&[Record<N>]` - The sorted records, values and sum
pub fn sum_sorted_listing<const N: usize>(table: &mut Table<N>) -> &[Record<N>] {
    table.sort_by_sum();
    table.records()
}
