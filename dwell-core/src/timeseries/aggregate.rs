use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::timeseries::util::round_percentage;
use crate::{DwellError, NormalizedEvent, ResultRow};

/// Accumulate time-in-state over a normalized event sequence.
///
/// Each event's state is active until the next event, in whole seconds truncated
/// toward zero. Rows come out in order of each state's first appearance; callers
/// must not rely on that order.
///
/// Fewer than two events produce no rows.
///
/// # Errors
/// Returns `DwellError::Internal` if the events are out of order or span zero
/// seconds in total. Sequences from [`normalize`](super::normalize::normalize)
/// never do.
pub fn aggregate(events: &[NormalizedEvent]) -> Result<Vec<ResultRow>, DwellError> {
    if events.len() < 2 {
        return Ok(Vec::new());
    }

    let mut totals: Vec<(&str, u64)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut total: u64 = 0;

    for pair in events.windows(2) {
        let [cur, next] = pair else { continue };
        let secs = u64::try_from((next.ts - cur.ts).num_seconds()).map_err(|_| {
            DwellError::Internal(format!("events out of order at {} -> {}", cur.ts, next.ts))
        })?;
        total += secs;
        match index.entry(cur.value.as_str()) {
            Entry::Vacant(v) => {
                v.insert(totals.len());
                totals.push((cur.value.as_str(), secs));
            }
            Entry::Occupied(o) => totals[*o.get()].1 += secs,
        }
    }

    if total == 0 {
        return Err(DwellError::Internal("normalized events span zero seconds".into()));
    }

    totals
        .into_iter()
        .map(|(key, active)| {
            let percentage = round_percentage(active, total).ok_or_else(|| {
                DwellError::Internal(format!("percentage for {key} is not representable"))
            })?;
            Ok(ResultRow::new(key, percentage, active))
        })
        .collect()
}
