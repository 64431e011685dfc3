//! Statement merging.
//!
//! Balance-sheet and profit-and-loss exports come from separate downloads and
//! need not cover the same years. [`TableMerger`] keeps only fiscal years
//! present in both and orders the result by date.

use crate::error::Result;
use crate::table::{CombinedTable, DATE_COLUMN, StatementTable};
use polars::prelude::*;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Inner-joins two statements on their fiscal year-end index.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableMerger;

impl TableMerger {
    /// Create a new merger.
    pub const fn new() -> Self {
        Self
    }

    /// Join `left` and `right` on [`DATE_COLUMN`].
    ///
    /// Dates found in only one input are dropped. If a metric name appears in
    /// both inputs the left-hand column is kept. An empty result is valid and
    /// means the statements share no fiscal year.
    pub fn merge(&self, left: &StatementTable, right: &StatementTable) -> Result<CombinedTable> {
        let left_names: HashSet<String> = left.metric_names().into_iter().collect();

        let mut keep = vec![col(DATE_COLUMN)];
        for name in right.metric_names() {
            if left_names.contains(&name) {
                warn!(column = %name, "Column present in both statements, keeping left");
            } else {
                keep.push(col(name));
            }
        }

        let frame = left
            .frame()
            .clone()
            .lazy()
            .join(
                right.frame().clone().lazy().select(keep),
                [col(DATE_COLUMN)],
                [col(DATE_COLUMN)],
                JoinArgs::new(JoinType::Inner),
            )
            .sort([DATE_COLUMN], SortMultipleOptions::default())
            .collect()?;

        let dropped = (left.height() + right.height()).saturating_sub(2 * frame.height());
        if frame.height() == 0 {
            warn!("Statements share no fiscal year, combined table is empty");
        } else {
            debug!(
                rows = frame.height(),
                dropped, "Merged statements on fiscal year"
            );
        }

        Ok(CombinedTable::from_frame(frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, 3, 1).unwrap()
    }

    fn table(years: &[i32], metric: &str, values: &[f64]) -> StatementTable {
        StatementTable::from_columns(
            years.iter().copied().map(date).collect(),
            vec![(metric.to_string(), values.to_vec())],
        )
        .unwrap()
    }

    #[test]
    fn test_merge_keeps_intersection_sorted() {
        let left = table(&[2015, 2013, 2014], "Borrowings", &[3.0, 1.0, 2.0]);
        let right = table(&[2014, 2016, 2013], "Sales", &[20.0, 40.0, 10.0]);

        let combined = TableMerger::new().merge(&left, &right).unwrap();

        assert_eq!(combined.dates().unwrap(), vec![date(2013), date(2014)]);
        assert_eq!(
            combined.values("Borrowings").unwrap(),
            vec![Some(1.0), Some(2.0)]
        );
        assert_eq!(
            combined.values("Sales").unwrap(),
            vec![Some(10.0), Some(20.0)]
        );
    }

    #[test]
    fn test_merge_disjoint_is_empty() {
        let left = table(&[2013], "Borrowings", &[1.0]);
        let right = table(&[2014], "Sales", &[2.0]);

        let combined = TableMerger::new().merge(&left, &right).unwrap();
        assert!(combined.is_empty());
        assert_eq!(combined.column_names(), vec!["Borrowings", "Sales"]);
    }

    #[test]
    fn test_merge_collision_keeps_left() {
        let left = table(&[2013], "Sales", &[1.0]);
        let right = table(&[2013], "Sales", &[2.0]);

        let combined = TableMerger::new().merge(&left, &right).unwrap();
        assert_eq!(combined.column_names(), vec!["Sales"]);
        assert_eq!(combined.values("Sales").unwrap(), vec![Some(1.0)]);
    }
}
