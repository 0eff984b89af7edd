use async_trait::async_trait;
use dwell_core::{DwellError, ParameterId, Sample, TrendSource, Window};

mod dynamic;
mod fixtures {
    pub mod trends;
}

pub use dynamic::{DynamicMockController, DynamicMockSource, MockBehavior};
pub use fixtures::trends::FIXTURE_DAY;

/// Mock trend source for CI-safe demos. Provides deterministic data from static fixtures.
///
/// Parameter names with special behavior:
/// - `FAIL`: the query fails.
/// - `TIMEOUT`: the query takes 200ms before answering with no data.
/// - anything without a fixture: no trending data (empty result).
pub struct MockSource;

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    async fn maybe_fail_or_timeout(name: &str) -> Result<(), DwellError> {
        match name {
            "FAIL" => Err(DwellError::retrieval(
                "dwell-mock",
                format!("forced failure for {name}"),
            )),
            "TIMEOUT" => {
                // Keep short to avoid slowing tests excessively
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl TrendSource for MockSource {
    fn name(&self) -> &'static str {
        "dwell-mock"
    }

    async fn retrieve_samples(
        &self,
        parameter: &ParameterId,
        _window: &Window,
    ) -> Result<Vec<Sample>, DwellError> {
        let name = parameter.name();
        Self::maybe_fail_or_timeout(name).await?;
        Ok(fixtures::trends::by_parameter(name).unwrap_or_default())
    }
}
