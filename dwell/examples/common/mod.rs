use dwell::{Dwell, Window};
use std::sync::Arc;

/// Orchestrator over the fixture trend source.
pub fn mock_dwell() -> Result<Dwell, dwell::DwellError> {
    println!("--- (Using fixture trend source) ---");
    Dwell::builder()
        .with_source(Arc::new(dwell_mock::MockSource::new()))
        .build()
}

/// The fixture day, 2024-01-01 UTC.
pub fn fixture_day() -> Result<Window, dwell::DwellError> {
    Window::from_unix(dwell_mock::FIXTURE_DAY, dwell_mock::FIXTURE_DAY + 86_400)
}
