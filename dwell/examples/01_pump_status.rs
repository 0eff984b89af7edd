mod common;
use chrono::{NaiveDate, NaiveDateTime};
use common::{fixture_day, mock_dwell};
use dwell::{ParameterId, Window};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Build the orchestrator over the fixture source.
    let dwell = mock_dwell()?;

    // 2. A pump on plant PLANT1, over one UTC day.
    let pump: ParameterId = "PLANT1:Pump1.Status".parse()?;
    let report = dwell.distribution(&pump, fixture_day()?).await?;

    println!("{} via {} ({}s)", report.parameter, report.source, report.total_seconds);
    for row in report.rows_by_absolute() {
        println!("  {:<12} {:>6.2}% {:>6}s", row.key, row.percentage, row.absolute);
    }

    // 3. The same day seen from a plant in Berlin: local midnight to noon.
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("bad date")?;
    let from: NaiveDateTime = date.and_hms_opt(0, 0, 0).ok_or("bad time")?;
    let to: NaiveDateTime = date.and_hms_opt(12, 0, 0).ok_or("bad time")?;
    let morning = Window::from_local(from, to, chrono_tz::Europe::Berlin)?;

    let rows = dwell.rows(&pump, morning).await?;
    println!("Berlin morning:");
    for row in rows {
        println!("  {:<12} {:>6.2}% {:>6}s", row.key, row.percentage, row.absolute);
    }

    Ok(())
}
