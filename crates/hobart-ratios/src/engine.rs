//! Ratio application.
//!
//! Computing a ratio appends one `Float64` column, named after the ratio, to
//! the [`CombinedTable`]. Division follows IEEE semantics: a zero denominator
//! yields `inf` or `NaN` for that row and a null input yields null. Nothing is
//! clamped or dropped.

use crate::error::{RatioError, Result};
use crate::registry::all_ratios;
use crate::traits::Ratio;
use hobart_data::CombinedTable;
use polars::prelude::*;
use tracing::debug;

/// Check that every column a ratio reads is present.
///
/// # Errors
///
/// Returns [`RatioError::Schema`] naming the first missing column.
pub fn check_schema(table: &CombinedTable, ratio: &dyn Ratio) -> Result<()> {
    match ratio
        .required_columns()
        .iter()
        .find(|column| !table.has_column(column))
    {
        Some(column) => Err(RatioError::Schema {
            column: (*column).to_string(),
            ratio: ratio.name().to_string(),
        }),
        None => Ok(()),
    }
}

/// Compute `ratio` for every row and attach it as a column.
///
/// On error the table is left unchanged.
pub fn compute_ratio(table: &mut CombinedTable, ratio: &dyn Ratio) -> Result<()> {
    check_schema(table, ratio)?;

    let computed = table
        .frame()
        .clone()
        .lazy()
        .select([ratio.expression().cast(DataType::Float64).alias(ratio.name())])
        .collect()?;
    let series = computed
        .column(ratio.name())?
        .as_materialized_series()
        .clone();

    table.attach(series)?;
    debug!(ratio = ratio.name(), rows = table.height(), "Attached ratio");
    Ok(())
}

/// Outcome of [`RatioEngine::run`].
#[derive(Debug, Default)]
pub struct RatioRun {
    /// Ratios whose columns were attached, in application order
    pub applied: Vec<Box<dyn Ratio>>,
    /// Ratios that failed, by name
    pub failed: Vec<(&'static str, RatioError)>,
}

impl RatioRun {
    /// Whether every ratio was attached.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Applies an ordered list of ratios to a combined table.
///
/// Each ratio is computed and attached in turn, so one table accumulates every
/// ratio column. Callers computing ratios in parallel should clone the table
/// per ratio instead.
#[derive(Debug, Default)]
pub struct RatioEngine {
    ratios: Vec<Box<dyn Ratio>>,
}

impl RatioEngine {
    /// Create an engine with no ratios.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with every registered ratio.
    pub fn with_all_ratios() -> Self {
        Self {
            ratios: all_ratios(),
        }
    }

    /// Add a ratio to the end of the list.
    pub fn with_ratio(mut self, ratio: impl Ratio + 'static) -> Self {
        self.ratios.push(Box::new(ratio));
        self
    }

    /// Add a boxed ratio to the end of the list.
    pub fn push(&mut self, ratio: Box<dyn Ratio>) {
        self.ratios.push(ratio);
    }

    /// Ratios in application order.
    pub fn ratios(&self) -> impl Iterator<Item = &dyn Ratio> {
        self.ratios.iter().map(|r| r.as_ref())
    }

    /// Number of configured ratios.
    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    /// Whether no ratio is configured.
    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }

    /// Apply every ratio in order, stopping at the first failure.
    ///
    /// The schema of every ratio is checked before any column is attached, so
    /// a failure leaves the table unchanged.
    pub fn apply(&self, table: &mut CombinedTable) -> Result<()> {
        for ratio in self.ratios() {
            check_schema(table, ratio)?;
        }
        for ratio in self.ratios() {
            compute_ratio(table, ratio)?;
        }
        Ok(())
    }

    /// Apply every ratio independently, returning each outcome by name.
    ///
    /// A ratio whose columns are missing is skipped; the others are attached.
    pub fn apply_each(&self, table: &mut CombinedTable) -> Vec<(&'static str, Result<()>)> {
        self.ratios()
            .map(|ratio| (ratio.name(), compute_ratio(table, ratio)))
            .collect()
    }

    /// Like [`apply_each`](Self::apply_each), but hands back the ratios that
    /// were attached so callers can go on to chart them.
    pub fn run(self, table: &mut CombinedTable) -> RatioRun {
        let mut run = RatioRun::default();
        for ratio in self.ratios {
            match compute_ratio(table, ratio.as_ref()) {
                Ok(()) => run.applied.push(ratio),
                Err(e) => run.failed.push((ratio.name(), e)),
            }
        }
        run
    }
}

impl FromIterator<Box<dyn Ratio>> for RatioEngine {
    fn from_iter<I: IntoIterator<Item = Box<dyn Ratio>>>(iter: I) -> Self {
        Self {
            ratios: iter.into_iter().collect(),
        }
    }
}
