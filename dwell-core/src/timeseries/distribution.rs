use crate::timeseries::aggregate::aggregate;
use crate::timeseries::normalize::normalize;
use crate::{DwellError, ResultRow, Sample, Window};

/// Compute the time-in-state distribution of `samples` over `window`.
///
/// With no samples at all the result is a single `sentinel` row at 100% and
/// zero seconds: there is nothing to measure. Otherwise the samples are
/// normalized and aggregated.
///
/// # Errors
/// Only internal invariant violations, surfaced as `DwellError::Internal`.
///
/// ```
/// use dwell_core::{Sample, Window, distribution};
/// use chrono::DateTime;
///
/// let t = |s: i64| DateTime::from_timestamp(s, 0).unwrap();
/// let samples = vec![Sample::new(t(-10), "A"), Sample::new(t(5), "B")];
/// let window = Window::from_unix(0, 10).unwrap();
///
/// let rows = distribution(samples, &window, "Not trended").unwrap();
/// assert_eq!(rows.len(), 2);
/// assert_eq!((rows[0].key.as_str(), rows[0].absolute), ("A", 5));
/// assert_eq!((rows[1].key.as_str(), rows[1].absolute), ("B", 5));
/// ```
pub fn distribution(
    samples: Vec<Sample>,
    window: &Window,
    sentinel: &str,
) -> Result<Vec<ResultRow>, DwellError> {
    if samples.is_empty() {
        return Ok(vec![no_data_row(sentinel)]);
    }
    let events = normalize(samples, window, sentinel);
    aggregate(&events)
}

/// The single row reported for a parameter without any trend records.
#[must_use]
pub fn no_data_row(sentinel: &str) -> ResultRow {
    ResultRow::new(sentinel, 100.0, 0)
}
