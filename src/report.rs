//! Collects the five query results and renders them as text sections.

use std::io::{self, Write};

use log::debug;

use crate::analyzer::{self, MinMax};
use crate::error::AnalyzerError;
use crate::record::Record;
use crate::table::Table;

/// Results of one full analysis run, in output order.
#[derive(Debug)]
pub struct Report<const N: usize> {
    pub reversed: Vec<[i32; N]>,
    pub modes: Vec<i32>,
    pub overlapping_pairs: usize,
    pub min_max: Result<MinMax, AnalyzerError>,
    pub sorted: Vec<Record<N>>,
}

impl<const N: usize> Report<N> {
    /// Runs every query against `table`.
    ///
    /// The order-sensitive queries run first; the sum sort runs last and
    /// leaves `table` sorted by sum.
    pub fn build(table: &mut Table<N>) -> Self {
        let reversed = analyzer::reverse_listing(table);
        let modes = analyzer::mode_histogram(table);
        let overlapping_pairs = analyzer::adjacency_overlap_count(table);
        let min_max = analyzer::min_max(table);
        debug!(
            "{} modes, {} overlapping pairs over {} records",
            modes.len(),
            overlapping_pairs,
            table.len()
        );
        let sorted = analyzer::sum_sorted_listing(table).to_vec();

        Self {
            reversed,
            modes,
            overlapping_pairs,
            min_max,
            sorted,
        }
    }

    /// Writes all five sections to `out`.
    ///
    /// An empty table has no min/max; that section then holds a single
    /// `#` comment line with the error instead of the two values.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "[CONTRARIO]")?;
        for values in &self.reversed {
            writeln!(out, "{}", join_values(values))?;
        }
        writeln!(out)?;

        writeln!(out, "[DISTRIBUZIONE]")?;
        for value in &self.modes {
            writeln!(out, "{value}")?;
        }
        writeln!(out)?;

        writeln!(out, "[NRIGHE]")?;
        writeln!(out, "{}", self.overlapping_pairs)?;

        writeln!(out, "[MIN-MAX]")?;
        match &self.min_max {
            Ok(MinMax { min, max }) => writeln!(out, "{min}\n{max}")?,
            Err(e) => writeln!(out, "# {e}")?,
        }
        writeln!(out)?;

        writeln!(out, "[ORDINAMENTO]")?;
        for record in &self.sorted {
            writeln!(out, "{} ({})", join_values(record.values()), record.sum())?;
        }

        Ok(())
    }
}

fn join_values(values: &[i32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
