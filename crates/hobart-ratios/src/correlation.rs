//! Pairwise correlation between statement metrics.
//!
//! Summarises how closely headline metrics (sales, profits, EPS) have moved
//! together over the available fiscal years.

use crate::columns::{EPS, OPERATING_PROFIT, PROFIT_BEFORE_TAX, SALES};
use crate::error::{RatioError, Result};
use hobart_data::CombinedTable;
use serde::Serialize;

/// Metrics correlated when the caller does not choose any.
pub const DEFAULT_CORRELATION_COLUMNS: [&str; 4] = [SALES, PROFIT_BEFORE_TAX, OPERATING_PROFIT, EPS];

/// Symmetric matrix of Pearson correlation coefficients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    /// Column names, in row/column order
    pub columns: Vec<String>,
    /// `values[i][j]` is the correlation of `columns[i]` with `columns[j]`
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Correlation between two named columns.
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        Some(self.values[i][j])
    }
}

/// Compute pairwise Pearson correlation between `columns`.
///
/// Each pair uses only the rows where both values are finite. Pairs with
/// fewer than two such rows, or with zero variance, are `NaN`.
///
/// # Errors
///
/// Returns [`RatioError::Schema`] if a column is missing.
pub fn correlation_matrix(table: &CombinedTable, columns: &[&str]) -> Result<CorrelationMatrix> {
    let mut series = Vec::with_capacity(columns.len());
    for column in columns {
        if !table.has_column(column) {
            return Err(RatioError::Schema {
                column: (*column).to_string(),
                ratio: "correlation".to_string(),
            });
        }
        series.push(table.values(column)?);
    }

    let values = series
        .iter()
        .map(|a| series.iter().map(|b| pearson(a, b)).collect())
        .collect();

    Ok(CorrelationMatrix {
        columns: columns.iter().map(|c| (*c).to_string()).collect(),
        values,
    })
}

fn pearson(a: &[Option<f64>], b: &[Option<f64>]) -> f64 {
    let pairs: Vec<(f64, f64)> = a
        .iter()
        .zip(b)
        .filter_map(|(x, y)| match (x, y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Some((*x, *y)),
            _ => None,
        })
        .collect();

    if pairs.len() < 2 {
        return f64::NAN;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return f64::NAN;
    }
    cov / (var_x * var_y).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;
    use hobart_data::StatementTable;

    fn table(metrics: Vec<(&str, Vec<f64>)>) -> CombinedTable {
        let rows = metrics[0].1.len();
        let dates = (0..rows)
            .map(|i| NaiveDate::from_ymd_opt(2010 + i as i32, 3, 1).unwrap())
            .collect();
        let metrics = metrics
            .into_iter()
            .map(|(name, values)| (name.to_string(), values))
            .collect();
        CombinedTable::from(StatementTable::from_columns(dates, metrics).unwrap())
    }

    #[test]
    fn test_perfect_correlations() {
        let table = table(vec![
            ("Sales", vec![1.0, 2.0, 3.0, 4.0]),
            ("EPS", vec![2.0, 4.0, 6.0, 8.0]),
            ("Interest", vec![4.0, 3.0, 2.0, 1.0]),
        ]);

        let matrix = correlation_matrix(&table, &["Sales", "EPS", "Interest"]).unwrap();

        assert_relative_eq!(matrix.get("Sales", "Sales").unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(matrix.get("Sales", "EPS").unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(matrix.get("Sales", "Interest").unwrap(), -1.0, epsilon = 1e-12);
        assert_eq!(matrix.get("EPS", "Interest"), matrix.get("Interest", "EPS"));
        assert!(matrix.get("Sales", "Tax").is_none());
    }

    #[test]
    fn test_non_finite_rows_are_skipped() {
        let pairs = pearson(
            &[Some(1.0), Some(f64::INFINITY), Some(2.0), None, Some(3.0)],
            &[Some(10.0), Some(0.0), Some(20.0), Some(5.0), Some(30.0)],
        );
        assert_relative_eq!(pairs, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_inputs_are_nan() {
        assert!(pearson(&[Some(1.0)], &[Some(2.0)]).is_nan());
        assert!(pearson(&[Some(1.0), Some(1.0)], &[Some(2.0), Some(3.0)]).is_nan());
    }

    #[test]
    fn test_missing_column() {
        let table = table(vec![("Sales", vec![1.0, 2.0])]);
        let err = correlation_matrix(&table, &DEFAULT_CORRELATION_COLUMNS).unwrap_err();
        assert!(matches!(
            err,
            RatioError::Schema { ref column, .. } if column == "Profit before tax"
        ));
    }
}
