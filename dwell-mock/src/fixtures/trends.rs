use chrono::{DateTime, Utc};
use dwell_core::Sample;

/// Start of the day all fixture series revolve around: 2024-01-01T00:00:00Z.
pub const FIXTURE_DAY: i64 = 1_704_067_200;

pub fn by_parameter(name: &str) -> Option<Vec<Sample>> {
    match name {
        // 24h day: Stopped until 06:00, Running to 18:00 with a fault at 12:00-12:30.
        "Pump1.Status" => Some(build(&[
            (-3_600, "Stopped"),
            (6 * 3_600, "Running"),
            (12 * 3_600, "Fault"),
            (12 * 3_600 + 1_800, "Running"),
            (18 * 3_600, "Stopped"),
        ])),
        // First record arrives mid-morning; earlier time has no known state.
        "Valve7.Position" => Some(build(&[
            (9 * 3_600, "Open"),
            (9 * 3_600 + 900, "Closed"),
            (15 * 3_600, "Open"),
        ])),
        // Noisy historian: blank records and a sub-second burst.
        "Mixer3.Mode" => Some(vec![
            sample_ms(-60_000, "Auto"),
            sample_ms(3_600_000, ""),
            sample_ms(7_200_100, "Manual"),
            sample_ms(7_200_900, "Auto"),
            sample_ms(10_800_000, "Auto"),
        ]),
        _ => None,
    }
}

fn at(offset_secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(FIXTURE_DAY + offset_secs, 0).expect("fixture in range")
}

fn sample_ms(offset_ms: i64, value: &str) -> Sample {
    let ts = DateTime::from_timestamp_millis(FIXTURE_DAY * 1000 + offset_ms)
        .expect("fixture in range");
    Sample::new(ts, value)
}

fn build(rows: &[(i64, &str)]) -> Vec<Sample> {
    rows.iter()
        .map(|&(offset, value)| Sample::new(at(offset), value))
        .collect()
}
