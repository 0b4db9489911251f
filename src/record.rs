//! Fixed-width integer records.
//!
//! The number of integers per input line is a compile-time constant chosen
//! through cargo features:
//!
//! ```bash
//! # Default: 10 integers per record
//! cargo build
//!
//! # Two integers per record
//! cargo build --features width_2
//! ```

/// Number of integers carried by every record.
///
/// - `width_2` → 2
/// - `width_10` → 10 (explicit)
/// - (default) → 10 when no feature is specified
#[cfg(not(any(feature = "width_2", feature = "width_10")))]
pub const RECORD_WIDTH: usize = 10;

#[cfg(all(feature = "width_2", not(feature = "width_10")))]
pub const RECORD_WIDTH: usize = 2;

#[cfg(feature = "width_10")]
pub const RECORD_WIDTH: usize = 10;

/// Record type used by the binary.
pub type DefaultRecord = Record<RECORD_WIDTH>;

/// One accepted input line: `N` integers plus their sum.
///
/// The sum is computed once in [`Record::new`] and the fields are private,
/// so a record can be moved around (sorted, reversed) without its sum ever
/// drifting from its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<const N: usize> {
    values: [i32; N],
    sum: i64,
}

impl<const N: usize> Record<N> {
    /// Builds a record and computes its sum.
    ///
    /// # Arguments
    ///
    /// * `values` - The `N` integers of one input line, in line order
    ///
    /// # Returns
    ///
    /// * `Record<N>` - The record, with `sum` equal to the total of `values`
    pub fn new(values: [i32; N]) -> Self {
        // 64-bit accumulator: N i32 values cannot overflow it
        let sum = values.iter().map(|&v| i64::from(v)).sum();
        Self { values, sum }
    }

    /// The integers in input order.
    #[inline]
    pub fn values(&self) -> &[i32; N] {
        &self.values
    }

    /// Sum of all values, fixed at construction.
    #[inline]
    pub fn sum(&self) -> i64 {
        self.sum
    }

    /// True if any value of `self` equals any value of `other`.
    pub fn shares_value_with(&self, other: &Self) -> bool {
        self.values.iter().any(|v| other.values.contains(v))
    }
}
