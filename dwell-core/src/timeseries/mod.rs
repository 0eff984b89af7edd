//! The state-duration pipeline.
//!
//! Modules include:
//! - `normalize`: turn raw samples into a window-anchored event sequence
//! - `aggregate`: accumulate time-in-state over normalized events
//! - `distribution`: the end-to-end entry point, including the no-data path

/// Per-state accumulation over normalized events.
pub mod aggregate;
/// End-to-end distribution entry point.
pub mod distribution;
/// Sample normalization against a window.
pub mod normalize;
/// Truncation and rounding helpers.
pub mod util;
