mod common;
use common::{fixture_day, mock_dwell};
use dwell::ParameterId;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,dwell=debug,dwell_core=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let dwell = mock_dwell()?;
    let day = fixture_day()?;

    // A noisy parameter: blank records and a duplicate second get dropped.
    let mixer: ParameterId = "Mixer3.Mode".parse()?;
    let _ = dwell.distribution(&mixer, day).await?;

    // A failing source surfaces as a retrieval failure.
    let broken: ParameterId = "FAIL".parse()?;
    if let Err(e) = dwell.distribution(&broken, day).await {
        tracing::warn!(error = %e, "retrieval failed as expected");
    }

    Ok(())
}
