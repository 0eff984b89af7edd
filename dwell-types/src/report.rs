//! Result rows and the report envelope handed to presentation layers.

use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Time a parameter spent in one state over the requested window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    /// The state value.
    pub key: String,
    /// Share of the window in this state, in `[0, 100]`, rounded to 2 decimals.
    pub percentage: f64,
    /// Whole seconds spent in this state.
    pub absolute: u64,
}

impl ResultRow {
    /// Build a row from its parts.
    pub fn new(key: impl Into<String>, percentage: f64, absolute: u64) -> Self {
        Self {
            key: key.into(),
            percentage,
            absolute,
        }
    }
}

/// Summary of one state-duration computation.
///
/// Window bounds are seconds since the UNIX epoch, already truncated to whole
/// seconds. `rows` carry no particular order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationReport {
    /// Display form of the parameter identifier.
    pub parameter: String,
    /// Name of the trend source that supplied the samples.
    pub source: String,
    /// Inclusive window start (seconds since epoch).
    pub start: i64,
    /// Window end (seconds since epoch).
    pub end: i64,
    /// Sum of `absolute` over all rows.
    pub total_seconds: u64,
    /// True when the source returned no samples and the sentinel row was produced.
    pub no_data: bool,
    /// One row per distinct observed state.
    pub rows: Vec<ResultRow>,
}

impl DurationReport {
    /// Look up the row for a state value.
    #[must_use]
    pub fn row(&self, key: &str) -> Option<&ResultRow> {
        self.rows.iter().find(|r| r.key == key)
    }

    /// Rows sorted by descending absolute time, ties broken by key.
    #[must_use]
    pub fn rows_by_absolute(&self) -> Vec<ResultRow> {
        let mut out = self.rows.clone();
        out.sort_by(|a, b| match b.absolute.cmp(&a.absolute) {
            Ordering::Equal => a.key.cmp(&b.key),
            non_eq => non_eq,
        });
        out
    }
}
