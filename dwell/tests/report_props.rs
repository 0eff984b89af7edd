use chrono::DateTime;
use dwell::{Dwell, Sample, Window};
use proptest::prelude::*;

mod helpers;
use helpers::{CountingSource, T0, param};

fn arb_samples() -> impl Strategy<Value = Vec<Sample>> {
    let states = prop_oneof![
        Just("Running"),
        Just("Stopped"),
        Just("Fault"),
        Just(""),
    ];
    proptest::collection::vec((-5_000i64..20_000, states), 0..40).prop_map(|v| {
        v.into_iter()
            .map(|(ms, s)| {
                let ts = DateTime::from_timestamp_millis(T0 * 1000 + ms * 100).expect("in range");
                Sample::new(ts, s)
            })
            .collect()
    })
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("runtime")
}

proptest! {
    #[test]
    fn report_covers_window_exactly(samples in arb_samples(), len in 1i64..1_500) {
        let source = CountingSource::new(samples.clone());
        let dwell = Dwell::builder().with_source(source.clone()).build().unwrap();
        let window = Window::from_unix(T0, T0 + len).unwrap();

        let report = runtime()
            .block_on(dwell.distribution(&param("Pump1.Status"), window))
            .unwrap();

        prop_assert_eq!(source.calls(), 1);
        prop_assert_eq!(report.no_data, samples.is_empty());
        if samples.is_empty() {
            prop_assert_eq!(report.total_seconds, 0);
            prop_assert_eq!(report.rows.len(), 1);
        } else {
            prop_assert_eq!(report.total_seconds, u64::try_from(len).unwrap());
            let pct: f64 = report.rows.iter().map(|r| r.percentage).sum();
            prop_assert!((pct - 100.0).abs() <= 0.01 * report.rows.len() as f64);
        }
        for r in &report.rows {
            prop_assert!(!r.key.is_empty());
            prop_assert!((0.0..=100.0).contains(&r.percentage));
        }
        let mut keys: Vec<&str> = report.rows.iter().map(|r| r.key.as_str()).collect();
        keys.sort_unstable();
        keys.dedup();
        prop_assert_eq!(keys.len(), report.rows.len());
    }

    #[test]
    fn orchestrator_is_deterministic(samples in arb_samples()) {
        let source = CountingSource::new(samples);
        let dwell = Dwell::builder().with_source(source).build().unwrap();
        let window = Window::from_unix(T0, T0 + 900).unwrap();
        let rt = runtime();

        let a = rt.block_on(dwell.rows(&param("Pump1.Status"), window)).unwrap();
        let b = rt.block_on(dwell.rows(&param("Pump1.Status"), window)).unwrap();
        prop_assert_eq!(a, b);
    }
}
