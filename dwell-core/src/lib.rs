//! dwell-core
//!
//! Core types, traits, and the pipeline shared across the dwell workspace.
//!
//! - `types`: re-exported errors, configuration, and result rows.
//! - `source`: the `TrendSource` trait implemented by retrieval collaborators.
//! - `timeseries`: normalization and aggregation of state samples.
//!
//! The pipeline is synchronous and does no I/O. Only `TrendSource` is async, so
//! that sources backed by network services can be awaited by the orchestrator.
#![warn(missing_docs)]

mod parameter;
mod sample;
/// Trend source trait implemented by retrieval collaborators.
pub mod source;
/// State-duration normalization and aggregation.
pub mod timeseries;
pub mod types;
mod window;

pub use parameter::ParameterId;
pub use sample::{NormalizedEvent, Sample};
pub use source::TrendSource;
pub use timeseries::aggregate::aggregate;
pub use timeseries::distribution::{distribution, no_data_row};
pub use timeseries::normalize::normalize;
pub use types::*;
pub use window::Window;
