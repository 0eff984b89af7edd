use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the dwell workspace.
///
/// Covers caller mistakes (bad window, malformed parameter identifier), failures
/// of the sample-retrieval collaborator, and internal invariant violations.
/// Having no data for a parameter is not an error; it yields the sentinel result.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DwellError {
    /// The requested window is empty, inverted, or cannot be resolved to instants.
    #[error("invalid window: {0}")]
    InvalidWindow(String),

    /// Invalid input argument (parameter identifier, builder misuse).
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The trend source could not produce samples for the request.
    ///
    /// Timeouts of the source call are reported through this variant too.
    #[error("retrieval via {source_name} failed: {msg}")]
    RetrievalFailure {
        /// Name of the trend source that failed.
        source_name: String,
        /// Human-readable error message.
        msg: String,
    },

    /// An internal invariant did not hold. Indicates a bug, not bad input.
    #[error("internal invariant violated: {0}")]
    Internal(String),
}

impl DwellError {
    /// Helper: build a `RetrievalFailure` error with the source name and message.
    pub fn retrieval(source_name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::RetrievalFailure {
            source_name: source_name.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build an `InvalidWindow` error.
    pub fn invalid_window(msg: impl Into<String>) -> Self {
        Self::InvalidWindow(msg.into())
    }

    /// Returns true if the caller must correct the request before retrying it.
    #[must_use]
    pub const fn is_caller_error(&self) -> bool {
        matches!(self, Self::InvalidWindow(_) | Self::InvalidArg(_))
    }

    /// Returns true if the failure originated in the trend source.
    #[must_use]
    pub const fn is_retrieval_failure(&self) -> bool {
        matches!(self, Self::RetrievalFailure { .. })
    }
}
