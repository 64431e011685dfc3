//! Fiscal-year label indexing.
//!
//! The provider labels each annual column `YY-MM` (e.g. `14-03` for the fiscal
//! year ending March 2014). Labels are mapped onto a fixed calendar key,
//! `<2000 + YY>-03-01`, which is sortable and joinable across statements.
//!
//! The key is an identifier for "fiscal year ending March of `<year>`", not a
//! real calendar event. Labels are always read as 2000–2099; the provider's
//! convention for earlier years is unknown.

use crate::error::{DataError, Result};
use chrono::NaiveDate;

/// Month used for every fiscal year-end key.
pub const FISCAL_YEAR_END_MONTH: u32 = 3;

/// Day used for every fiscal year-end key.
pub const FISCAL_YEAR_END_DAY: u32 = 1;

/// Century added to the two-digit year prefix.
const CENTURY: i32 = 2000;

/// Maps provider year labels to fiscal year-end dates.
#[derive(Debug, Clone, Copy, Default)]
pub struct FiscalYearIndexer;

impl FiscalYearIndexer {
    /// Create a new indexer.
    pub const fn new() -> Self {
        Self
    }

    /// Convert a `YY-...` label into its fiscal year-end key.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Format`] if the label has no `-` or the prefix
    /// before the first `-` is not exactly two ASCII digits.
    pub fn index(&self, label: &str) -> Result<NaiveDate> {
        let label = label.trim();
        let Some((prefix, _)) = label.split_once('-') else {
            return Err(format_error(label, "missing '-' separator"));
        };

        if prefix.len() != 2 || !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format_error(label, "year prefix is not two digits"));
        }

        let yy: i32 = prefix
            .parse()
            .map_err(|_| format_error(label, "year prefix is not two digits"))?;

        NaiveDate::from_ymd_opt(CENTURY + yy, FISCAL_YEAR_END_MONTH, FISCAL_YEAR_END_DAY)
            .ok_or_else(|| format_error(label, "year out of range"))
    }

    /// Convert every label, failing on the first invalid one.
    pub fn index_all<S: AsRef<str>>(&self, labels: &[S]) -> Result<Vec<NaiveDate>> {
        labels.iter().map(|l| self.index(l.as_ref())).collect()
    }
}

fn format_error(label: &str, reason: &str) -> DataError {
    DataError::Format {
        label: label.to_string(),
        reason: reason.to_string(),
    }
}
