//! Dwell-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod config;
mod error;
mod report;
mod source;

pub use config::{DEFAULT_SENTINEL, DwellConfig};
pub use error::DwellError;
pub use report::{DurationReport, ResultRow};
pub use source::SourceKey;
