//! The closed time window a distribution is measured over.

use chrono::{DateTime, NaiveDateTime, SubsecRound, TimeZone, Utc};
use chrono_tz::Tz;

use crate::DwellError;

/// A validated trend window.
///
/// Both endpoints are truncated to whole seconds on construction, and `start`
/// is strictly before `end` afterwards. A `Window` therefore always spans at
/// least one second.
///
/// The start as requested is kept alongside: which samples lie at or before
/// the start is decided against it, not against the truncated anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    requested_start: DateTime<Utc>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Window {
    /// Build a window from UTC instants.
    ///
    /// # Errors
    /// Returns `InvalidWindow` if `start >= end` once sub-second precision is dropped.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, DwellError> {
        let requested_start = start;
        let start = start.trunc_subsecs(0);
        let end = end.trunc_subsecs(0);
        if start >= end {
            return Err(DwellError::invalid_window(format!(
                "start {start} must be before end {end}"
            )));
        }
        Ok(Self {
            requested_start,
            start,
            end,
        })
    }

    /// Build a window from seconds since the UNIX epoch.
    ///
    /// # Errors
    /// Returns `InvalidWindow` if either bound is out of range or `start >= end`.
    pub fn from_unix(start: i64, end: i64) -> Result<Self, DwellError> {
        let to_utc = |secs: i64| {
            DateTime::from_timestamp(secs, 0).ok_or_else(|| {
                DwellError::invalid_window(format!("timestamp {secs} is out of range"))
            })
        };
        Self::new(to_utc(start)?, to_utc(end)?)
    }

    /// Build a window from wall-clock times in a named timezone.
    ///
    /// Ambiguous local times (clocks going back) resolve to the earliest instant.
    ///
    /// # Errors
    /// Returns `InvalidWindow` if a bound does not exist in `tz` (clocks going
    /// forward) or if the resolved `start >= end`.
    pub fn from_local(
        start: NaiveDateTime,
        end: NaiveDateTime,
        tz: Tz,
    ) -> Result<Self, DwellError> {
        let resolve = |naive: NaiveDateTime| {
            tz.from_local_datetime(&naive)
                .earliest()
                .map(|t| t.with_timezone(&Utc))
                .ok_or_else(|| {
                    DwellError::invalid_window(format!("{naive} does not exist in {tz}"))
                })
        };
        Self::new(resolve(start)?, resolve(end)?)
    }

    /// Window start (whole seconds).
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Window start as requested, sub-second precision included.
    #[must_use]
    pub const fn requested_start(&self) -> DateTime<Utc> {
        self.requested_start
    }

    /// True if `ts` is at or before the requested start, i.e. a carry-in candidate.
    #[must_use]
    pub fn precedes_start(&self, ts: DateTime<Utc>) -> bool {
        ts <= self.requested_start
    }

    /// Window end (whole seconds).
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Length of the window in seconds. Always positive.
    #[must_use]
    pub fn duration_seconds(&self) -> u64 {
        (self.end - self.start).num_seconds().unsigned_abs()
    }

    /// True if `ts` lies strictly inside the window, excluding both endpoints.
    ///
    /// The lower bound is the requested start, the upper bound the truncated end.
    #[must_use]
    pub fn contains_strict(&self, ts: DateTime<Utc>) -> bool {
        self.requested_start < ts && ts < self.end
    }
}
