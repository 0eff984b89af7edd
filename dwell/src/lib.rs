//! Dwell computes how long a trended parameter spent in each of its states.
//!
//! Overview
//! - Retrieves the string samples ("trend records") of one parameter from a
//!   `TrendSource` implementing the `dwell_core` contract.
//! - Normalizes them against the requested window: the state at the window start
//!   is carried in from the latest earlier sample, sub-second timestamps are
//!   floored, and the last state is held through the end of the window.
//! - Aggregates whole seconds per state and reports percentage and absolute time.
//!
//! Key behaviors
//! - A parameter with no samples at all yields one `"Not trended"` row at 100% and
//!   zero seconds. This is a success, not an error.
//! - Time before the first known state is attributed to the same sentinel label.
//! - The source is called once per computation, bounded by a timeout; any source
//!   error, timeouts included, surfaces as `RetrievalFailure`.
//! - Rows come out in no guaranteed order; see `DurationReport::rows_by_absolute`.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use dwell::{Dwell, ParameterId, Window};
//!
//! let dwell = Dwell::builder()
//!     .with_source(Arc::new(dwell_mock::MockSource::new()))
//!     .build()?;
//!
//! let pump: ParameterId = "PLANT1:Pump1.Status".parse()?;
//! let day = Window::from_unix(1_704_067_200, 1_704_153_600)?;
//! let report = dwell.distribution(&pump, day).await?;
//! for row in report.rows_by_absolute() {
//!     println!("{:<12} {:>6.2}% {:>6}s", row.key, row.percentage, row.absolute);
//! }
//! ```
//!
//! See `dwell/examples/` for a runnable demonstration.
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use core::{Dwell, DwellBuilder};

// Re-export core types for convenience
pub use dwell_core::{
    DEFAULT_SENTINEL, DurationReport, DwellConfig, DwellError, NormalizedEvent, ParameterId,
    ResultRow, Sample, SourceKey, TrendSource, Window,
};
