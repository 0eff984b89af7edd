#![allow(dead_code)]
// Re-export helpers so tests can `use helpers::*;`
pub mod counting_source;

pub use counting_source::CountingSource;

use chrono::{DateTime, Utc};
use dwell::{ParameterId, Sample, Window};

// ---------- Lightweight fixtures and helpers for tests ----------

/// Reference instant used across tests: 2023-11-14T22:13:20Z.
pub const T0: i64 = 1_700_000_000;

/// Common parameter names used across tests.
pub const PUMP: &str = "Pump1.Status";
pub const VALVE: &str = "Valve7.Position";

/// Instant `offset` seconds after `T0`.
pub fn at(offset: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(T0 + offset, 0).expect("in range")
}

/// Instant `offset_ms` milliseconds after `T0`.
pub fn at_ms(offset_ms: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(T0 * 1000 + offset_ms).expect("in range")
}

/// Sample `offset` seconds after `T0`.
pub fn sample(offset: i64, value: &str) -> Sample {
    Sample::new(at(offset), value)
}

/// Window `[T0 + start, T0 + end]`.
pub fn window(start: i64, end: i64) -> Window {
    Window::from_unix(T0 + start, T0 + end).expect("valid window")
}

pub fn param(s: &str) -> ParameterId {
    s.parse().expect("valid parameter")
}

/// Find a row's `(percentage, absolute)` by key.
pub fn row(rows: &[dwell::ResultRow], key: &str) -> Option<(f64, u64)> {
    rows.iter()
        .find(|r| r.key == key)
        .map(|r| (r.percentage, r.absolute))
}
