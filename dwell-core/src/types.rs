//! Re-export of shared types from `dwell-types`.
// Consolidated re-exports so downstream crates can depend on `dwell-core` only
pub use dwell_types::{
    DEFAULT_SENTINEL, DurationReport, DwellConfig, DwellError, ResultRow, SourceKey,
};
