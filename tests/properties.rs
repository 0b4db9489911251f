//! Property-based tests for the table queries.

use proptest::prelude::*;

use record_table_analyzer::analyzer::{
    HISTOGRAM_BUCKETS, Histogram, adjacency_overlap_count, min_max, reverse_listing,
    sum_sorted_listing,
};
use record_table_analyzer::{Record, Table};

fn table_from(rows: &[[i32; 3]]) -> Table<3> {
    rows.iter().copied().map(Record::new).collect()
}

fn rows_strategy() -> impl Strategy<Value = Vec<[i32; 3]>> {
    prop::collection::vec(prop::array::uniform3(-150i32..150), 0..40)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn reversing_twice_restores_order(rows in rows_strategy()) {
        let table = table_from(&rows);
        let reversed_table: Table<3> = reverse_listing(&table).into_iter().map(Record::new).collect();
        let restored = reverse_listing(&reversed_table);
        prop_assert_eq!(restored, rows);
    }

    #[test]
    fn sum_sort_is_idempotent(rows in rows_strategy()) {
        let mut table = table_from(&rows);
        let first: Vec<i64> = sum_sorted_listing(&mut table).iter().map(|r| r.sum()).collect();
        let second: Vec<i64> = sum_sorted_listing(&mut table).iter().map(|r| r.sum()).collect();

        prop_assert_eq!(&first, &second);
        prop_assert!(first.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn sums_survive_sorting(rows in rows_strategy()) {
        let mut table = table_from(&rows);
        sum_sorted_listing(&mut table);

        prop_assert_eq!(table.len(), rows.len());
        for record in &table {
            let expected: i64 = record.values().iter().map(|&v| i64::from(v)).sum();
            prop_assert_eq!(record.sum(), expected);
        }
    }

    #[test]
    fn histogram_ignores_out_of_range(rows in rows_strategy()) {
        let table = table_from(&rows);
        let histogram = Histogram::from_table(&table);
        let in_range = rows.iter().flatten().filter(|v| (-100..=100).contains(*v)).count();

        let total: u32 = (-100..=100).map(|v| histogram.count(v)).sum();
        prop_assert_eq!(total as usize, in_range);

        let modes = histogram.modes();
        prop_assert!(modes.windows(2).all(|w| w[0] < w[1]));
        if in_range == 0 {
            prop_assert_eq!(modes.len(), HISTOGRAM_BUCKETS);
        }
    }

    #[test]
    fn min_max_bounds_every_value(rows in rows_strategy()) {
        let table = table_from(&rows);
        match min_max(&table) {
            Ok(mm) => {
                for v in rows.iter().flatten() {
                    prop_assert!(mm.min <= *v && *v <= mm.max);
                }
            }
            Err(_) => prop_assert!(rows.is_empty()),
        }
    }

    #[test]
    fn adjacency_count_is_bounded(rows in rows_strategy()) {
        let table = table_from(&rows);
        prop_assert!(adjacency_overlap_count(&table) <= rows.len().saturating_sub(1));
    }
}
