//! Date-indexed statement tables.
//!
//! Both table kinds wrap a polars [`DataFrame`] whose first column is
//! [`DATE_COLUMN`] (`Date` dtype, one row per fiscal year) followed by one
//! `Float64` column per metric.

use crate::error::{DataError, Result};
use chrono::NaiveDate;
use polars::prelude::*;

/// Name of the fiscal year-end index column.
pub const DATE_COLUMN: &str = "date";

/// A single normalized statement (balance sheet or profit and loss).
#[derive(Debug, Clone)]
pub struct StatementTable {
    frame: DataFrame,
}

impl StatementTable {
    /// Build a statement table from fiscal-year dates and metric columns.
    ///
    /// Every metric vector must have one value per date. Rows are sorted by
    /// date ascending, whatever the order of `dates`.
    pub fn from_columns(dates: Vec<NaiveDate>, metrics: Vec<(String, Vec<f64>)>) -> Result<Self> {
        let mut columns: Vec<Column> = Vec::with_capacity(metrics.len() + 1);
        columns.push(
            DateChunked::from_naive_date(DATE_COLUMN.into(), dates)
                .into_series()
                .into(),
        );
        for (name, values) in metrics {
            columns.push(Series::new(name.into(), values).into());
        }

        let frame = DataFrame::new(columns)?
            .lazy()
            .sort([DATE_COLUMN], SortMultipleOptions::default())
            .collect()?;

        Ok(Self { frame })
    }

    /// Underlying data frame.
    pub const fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// Consume the table and return the data frame.
    pub fn into_frame(self) -> DataFrame {
        self.frame
    }

    /// Number of fiscal years.
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    /// Fiscal year-end dates in row order.
    pub fn dates(&self) -> Result<Vec<NaiveDate>> {
        read_dates(&self.frame)
    }

    /// Metric column names in load order.
    pub fn metric_names(&self) -> Vec<String> {
        metric_names(&self.frame)
    }

    /// Values of one metric in row order.
    pub fn values(&self, column: &str) -> Result<Vec<Option<f64>>> {
        read_values(&self.frame, column)
    }
}

/// The inner join of a balance sheet and a profit-and-loss statement.
///
/// Rows are sorted by date ascending. Ratio columns appended by the ratio
/// engine live here alongside the source metrics.
#[derive(Debug, Clone)]
pub struct CombinedTable {
    frame: DataFrame,
}

impl CombinedTable {
    pub(crate) const fn from_frame(frame: DataFrame) -> Self {
        Self { frame }
    }

    /// Underlying data frame.
    pub const fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// Consume the table and return the data frame.
    pub fn into_frame(self) -> DataFrame {
        self.frame
    }

    /// Number of fiscal years present in both statements.
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    /// Whether the statements shared no fiscal year.
    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// Whether the table has a column with this exact name.
    pub fn has_column(&self, column: &str) -> bool {
        self.frame.get_column_index(column).is_some()
    }

    /// All non-index column names, metrics and ratios alike.
    pub fn column_names(&self) -> Vec<String> {
        metric_names(&self.frame)
    }

    /// Fiscal year-end dates, ascending.
    pub fn dates(&self) -> Result<Vec<NaiveDate>> {
        read_dates(&self.frame)
    }

    /// Values of one column in date order.
    pub fn values(&self, column: &str) -> Result<Vec<Option<f64>>> {
        read_values(&self.frame, column)
    }

    /// `(date, value)` pairs for one column in date order.
    pub fn series(&self, column: &str) -> Result<Vec<(NaiveDate, Option<f64>)>> {
        let dates = self.dates()?;
        let values = self.values(column)?;
        Ok(dates.into_iter().zip(values).collect())
    }

    /// Append a derived column, replacing any column of the same name.
    ///
    /// The series must have one value per row.
    pub fn attach(&mut self, series: Series) -> Result<()> {
        if series.name().as_str() == DATE_COLUMN {
            return Err(DataError::DuplicateMetric(DATE_COLUMN.to_string()));
        }
        self.frame.with_column(series)?;
        Ok(())
    }
}

impl From<StatementTable> for CombinedTable {
    fn from(statement: StatementTable) -> Self {
        Self::from_frame(statement.frame)
    }
}

fn metric_names(frame: &DataFrame) -> Vec<String> {
    frame
        .get_column_names()
        .into_iter()
        .filter(|name| name.as_str() != DATE_COLUMN)
        .map(|name| name.to_string())
        .collect()
}

fn read_dates(frame: &DataFrame) -> Result<Vec<NaiveDate>> {
    let dates = frame
        .column(DATE_COLUMN)?
        .as_materialized_series()
        .date()?
        .as_date_iter()
        .flatten()
        .collect();
    Ok(dates)
}

fn read_values(frame: &DataFrame, column: &str) -> Result<Vec<Option<f64>>> {
    if column == DATE_COLUMN || frame.get_column_index(column).is_none() {
        return Err(DataError::MissingColumn(column.to_string()));
    }
    let values = frame
        .column(column)?
        .as_materialized_series()
        .cast(&DataType::Float64)?
        .f64()?
        .into_iter()
        .collect();
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, 3, 1).unwrap()
    }

    fn sample() -> StatementTable {
        StatementTable::from_columns(
            vec![date(2013), date(2014)],
            vec![
                ("Sales".to_string(), vec![100.0, 120.0]),
                ("Inventory".to_string(), vec![10.0, 12.0]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_statement_table_accessors() {
        let table = sample();
        assert_eq!(table.height(), 2);
        assert_eq!(table.metric_names(), vec!["Sales", "Inventory"]);
        assert_eq!(table.dates().unwrap(), vec![date(2013), date(2014)]);
        assert_eq!(table.values("Sales").unwrap(), vec![Some(100.0), Some(120.0)]);
    }

    #[test]
    fn test_values_missing_column() {
        let table = sample();
        assert!(matches!(
            table.values("Debtors"),
            Err(DataError::MissingColumn(name)) if name == "Debtors"
        ));
        assert!(matches!(
            table.values(DATE_COLUMN),
            Err(DataError::MissingColumn(_))
        ));
    }

    #[test]
    fn test_rows_sorted_by_date() {
        let table = StatementTable::from_columns(
            vec![date(2016), date(2014), date(2015)],
            vec![("Sales".to_string(), vec![300.0, 100.0, 200.0])],
        )
        .unwrap();

        assert_eq!(table.dates().unwrap(), vec![date(2014), date(2015), date(2016)]);
        assert_eq!(
            table.values("Sales").unwrap(),
            vec![Some(100.0), Some(200.0), Some(300.0)]
        );
    }

    #[test]
    fn test_mismatched_lengths_rejected() {
        let result = StatementTable::from_columns(
            vec![date(2013), date(2014)],
            vec![("Sales".to_string(), vec![100.0])],
        );
        assert!(matches!(result, Err(DataError::Polars(_))));
    }

    #[test]
    fn test_attach_appends_and_replaces() {
        let mut combined = CombinedTable::from(sample());
        assert!(!combined.has_column("turnover"));

        combined
            .attach(Series::new("turnover".into(), vec![10.0, 10.0]))
            .unwrap();
        assert!(combined.has_column("turnover"));
        assert_eq!(combined.column_names().len(), 3);

        combined
            .attach(Series::new("turnover".into(), vec![1.0, 2.0]))
            .unwrap();
        assert_eq!(combined.column_names().len(), 3);
        assert_eq!(
            combined.series("turnover").unwrap(),
            vec![(date(2013), Some(1.0)), (date(2014), Some(2.0))]
        );
    }

    #[test]
    fn test_attach_rejects_index_name() {
        let mut combined = CombinedTable::from(sample());
        let result = combined.attach(Series::new(DATE_COLUMN.into(), vec![0.0, 0.0]));
        assert!(result.is_err());
    }
}
