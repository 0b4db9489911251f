//! Growable in-memory table of records.

use crate::error::{AnalyzerError, Result};
use crate::record::Record;

/// Capacity of a freshly created table.
const INITIAL_CAPACITY: usize = 1;

/// Ordered, append-only collection of records built by the loader.
///
/// Storage grows by doubling whenever it fills up, and is sized in whole
/// records. [`Table::finalize`] trims the excess once loading is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<const N: usize> {
    records: Vec<Record<N>>,
}

impl<const N: usize> Default for Table<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Table<N> {
    /// Creates an empty table with room for a single record.
    pub fn new() -> Self {
        Self {
            records: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Appends a record, doubling capacity when the table is full.
    ///
    /// # Errors
    ///
    /// * `AnalyzerError::Allocation` - the doubled buffer could not be
    ///   allocated; the table keeps its previous contents untouched
    pub fn push(&mut self, record: Record<N>) -> Result<()> {
        if self.records.len() == self.records.capacity() {
            let requested = (self.records.capacity() * 2).max(INITIAL_CAPACITY);
            self.records
                .try_reserve_exact(requested - self.records.len())
                .map_err(|source| AnalyzerError::Allocation { requested, source })?;
        }
        self.records.push(record);
        Ok(())
    }

    /// Trims backing storage to exactly the number of stored records.
    pub fn finalize(&mut self) {
        self.records.shrink_to_fit();
    }

    /// Number of stored records.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records the backing storage can hold without growing.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.records.capacity()
    }

    /// All records in current table order.
    #[inline]
    pub fn records(&self) -> &[Record<N>] {
        &self.records
    }

    /// Iterates over records in current table order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record<N>> {
        self.records.iter()
    }

    /// Every value of every record, in table order.
    pub fn values(&self) -> impl Iterator<Item = i32> + '_ {
        self.records.iter().flat_map(|r| r.values().iter().copied())
    }

    /// Reorders whole records by ascending sum. Equal sums keep their
    /// current relative order.
    pub fn sort_by_sum(&mut self) {
        self.records.sort_by_key(Record::sum);
    }
}

impl<const N: usize> FromIterator<Record<N>> for Table<N> {
    fn from_iter<I: IntoIterator<Item = Record<N>>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a, const N: usize> IntoIterator for &'a Table<N> {
    type Item = &'a Record<N>;
    type IntoIter = std::slice::Iter<'a, Record<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows_geometrically() {
        let mut table: Table<2> = Table::new();
        assert_eq!(table.capacity(), 1);

        let mut reallocations = 0;
        let mut last_capacity = table.capacity();
        for i in 0..100 {
            table.push(Record::new([i, -i])).unwrap();
            if table.capacity() != last_capacity {
                assert!(table.capacity() >= 2 * last_capacity);
                reallocations += 1;
                last_capacity = table.capacity();
            }
        }
        assert_eq!(table.len(), 100);
        // 1 -> 2 -> 4 -> ... -> 128
        assert!(reallocations <= 7, "too many reallocations: {reallocations}");
    }

    #[test]
    fn finalize_trims_capacity() {
        let mut table: Table<2> = Table::new();
        for i in 0..5 {
            table.push(Record::new([i, i])).unwrap();
        }
        assert!(table.capacity() >= 5);
        table.finalize();
        assert_eq!(table.capacity(), 5);
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn finalize_empty_table() {
        let mut table: Table<10> = Table::new();
        table.finalize();
        assert!(table.is_empty());
        assert_eq!(table.capacity(), 0);
    }

    #[test]
    fn sort_moves_whole_records() {
        let mut table: Table<2> = [[1, 2], [3, -1], [5, 5], [0, 2]]
            .into_iter()
            .map(Record::new)
            .collect();
        table.sort_by_sum();

        let sums: Vec<i64> = table.iter().map(Record::sum).collect();
        assert_eq!(sums, vec![2, 2, 3, 10]);
        // stable: [3, -1] came before [0, 2] in the input
        assert_eq!(table.records()[0].values(), &[3, -1]);
        assert_eq!(table.records()[1].values(), &[0, 2]);
        for record in &table {
            assert_eq!(record.sum(), record.values().iter().map(|&v| i64::from(v)).sum());
        }
    }

    #[test]
    fn values_flatten_in_order() {
        let table: Table<2> = [[1, 2], [3, 4]].into_iter().map(Record::new).collect();
        assert_eq!(table.values().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }
}
