use async_trait::async_trait;

use crate::{DwellError, ParameterId, Sample, Window};
pub use dwell_types::SourceKey;

/// Retrieval collaborator: the time-series service holding trend records.
///
/// Implementations are invoked once per computation and own any timeout,
/// retry, or transport concerns of their own.
#[async_trait]
pub trait TrendSource: Send + Sync {
    /// Stable source name used in errors and reports.
    fn name(&self) -> &'static str;

    /// Typed key for this source.
    fn key(&self) -> SourceKey {
        SourceKey::new(self.name())
    }

    /// Fetch the string samples recorded for `parameter` around `window`.
    ///
    /// Samples may be returned in any order and may include records before the
    /// window start (used to establish the carry-in state). An empty vector means
    /// the parameter has no trending data; it is not an error.
    ///
    /// # Errors
    /// Returns an error when the backing query fails. The orchestrator reports
    /// any such error as `DwellError::RetrievalFailure`.
    async fn retrieve_samples(
        &self,
        parameter: &ParameterId,
        window: &Window,
    ) -> Result<Vec<Sample>, DwellError>;
}
