use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One observed state-change record for a parameter, as returned by a trend source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    /// Instant the state was recorded.
    pub ts: DateTime<Utc>,
    /// Recorded state value.
    pub value: String,
}

impl Sample {
    /// Build a sample from its parts.
    pub fn new(ts: DateTime<Utc>, value: impl Into<String>) -> Self {
        Self {
            ts,
            value: value.into(),
        }
    }

    /// True if the value carries no state (empty or whitespace only).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// A state change after normalization against a window.
///
/// A normalized sequence is sorted, free of duplicate timestamps, and anchored
/// at both window endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedEvent {
    /// Whole-second instant the state takes effect.
    pub ts: DateTime<Utc>,
    /// State value in effect from `ts` until the next event.
    pub value: String,
}

impl NormalizedEvent {
    pub(crate) fn new(ts: DateTime<Utc>, value: impl Into<String>) -> Self {
        Self {
            ts,
            value: value.into(),
        }
    }
}
