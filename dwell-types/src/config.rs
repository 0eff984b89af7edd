//! Configuration types shared by the orchestrator and the pipeline.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// State label used when no sample establishes the state at the window start,
/// and for the single row returned when a parameter has no data at all.
pub const DEFAULT_SENTINEL: &str = "Not trended";

/// Global configuration for the `Dwell` orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DwellConfig {
    /// Label of the synthetic state covering time with no known state.
    pub sentinel_label: String,
    /// Upper bound for a single trend source call. Exceeding it is a retrieval failure.
    pub source_timeout: Duration,
}

impl Default for DwellConfig {
    fn default() -> Self {
        Self {
            sentinel_label: DEFAULT_SENTINEL.to_string(),
            source_timeout: Duration::from_secs(5),
        }
    }
}
