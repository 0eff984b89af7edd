use chrono::{DateTime, Utc};
use dwell_core::{DwellError, NormalizedEvent, ResultRow, aggregate};

fn t(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap()
}

fn ev(secs: i64, value: &str) -> NormalizedEvent {
    NormalizedEvent {
        ts: t(secs),
        value: value.to_string(),
    }
}

fn summary(rows: &[ResultRow]) -> Vec<(&str, f64, u64)> {
    rows.iter()
        .map(|r| (r.key.as_str(), r.percentage, r.absolute))
        .collect()
}

#[test]
fn two_states_split_evenly() {
    let rows = aggregate(&[ev(0, "A"), ev(5, "B"), ev(10, "B")]).unwrap();
    assert_eq!(summary(&rows), vec![("A", 50.0, 5), ("B", 50.0, 5)]);
}

#[test]
fn repeated_state_accumulates_in_first_seen_order() {
    let rows = aggregate(&[ev(0, "A"), ev(2, "B"), ev(5, "A"), ev(10, "A")]).unwrap();
    assert_eq!(summary(&rows), vec![("A", 70.0, 7), ("B", 30.0, 3)]);
}

#[test]
fn terminal_event_does_not_create_a_row() {
    let rows = aggregate(&[ev(0, "A"), ev(10, "Z")]).unwrap();
    assert_eq!(summary(&rows), vec![("A", 100.0, 10)]);
}

#[test]
fn thirds_round_to_two_decimals() {
    let rows = aggregate(&[ev(0, "A"), ev(1, "B"), ev(2, "C"), ev(3, "C")]).unwrap();
    for r in &rows {
        assert!((r.percentage - 33.33).abs() < 1e-9, "{r:?}");
        assert_eq!(r.absolute, 1);
    }
}

#[test]
fn fewer_than_two_events_yield_no_rows() {
    assert!(aggregate(&[]).unwrap().is_empty());
    assert!(aggregate(&[ev(0, "A")]).unwrap().is_empty());
}

#[test]
fn zero_total_span_is_internal_error() {
    let err = aggregate(&[ev(5, "A"), ev(5, "B")]).unwrap_err();
    assert!(matches!(err, DwellError::Internal(_)));
}

#[test]
fn out_of_order_events_are_internal_error() {
    let err = aggregate(&[ev(5, "A"), ev(2, "B"), ev(10, "B")]).unwrap_err();
    assert!(matches!(err, DwellError::Internal(_)));
    assert!(!err.is_caller_error());
}
