use crate::timeseries::util::floor_to_second;
use crate::{NormalizedEvent, Sample, Window};

/// Normalize raw samples into the event sequence covering exactly `window`.
///
/// - Samples are sorted by timestamp (stable on ties).
/// - The first event sits at `window.start()` and carries the state of the latest
///   non-blank sample at or before the requested start, or `sentinel` if there
///   is none. Among samples sharing that latest timestamp the first one wins.
/// - Non-blank samples strictly inside the window are floored to whole seconds;
///   the first sample to claim a given second wins, later ones are dropped.
/// - Samples at or after `window.end()` are ignored.
/// - The last event sits at `window.end()` and repeats the preceding state.
///
/// The result is sorted, free of duplicate timestamps, and has at least two events.
#[must_use]
pub fn normalize(
    mut samples: Vec<Sample>,
    window: &Window,
    sentinel: &str,
) -> Vec<NormalizedEvent> {
    samples.sort_by_key(|s| s.ts);

    let start = window.start();
    let end = window.end();

    let carry_in = samples
        .iter()
        .take_while(|s| window.precedes_start(s.ts))
        .filter(|s| !s.is_blank())
        .fold(None::<&Sample>, |best, s| match best {
            Some(b) if b.ts >= s.ts => Some(b),
            _ => Some(s),
        })
        .map_or(sentinel, |s| s.value.as_str());

    let mut events: Vec<NormalizedEvent> = Vec::with_capacity(samples.len() + 2);
    events.push(NormalizedEvent::new(start, carry_in));

    for s in samples.into_iter().filter(|s| window.contains_strict(s.ts)) {
        if s.is_blank() {
            continue;
        }
        let ts = floor_to_second(s.ts);
        // Sorted input and a whole-second start keep `ts` >= the last event.
        if events.last().is_some_and(|last| last.ts >= ts) {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                target: "dwell_core::normalize",
                ts = %s.ts,
                value = %s.value,
                "dropping sample colliding on truncated timestamp"
            );
            continue;
        }
        events.push(NormalizedEvent::new(ts, s.value));
    }

    if let Some(last) = events.last()
        && last.ts != end
    {
        let tail = NormalizedEvent::new(end, last.value.clone());
        events.push(tail);
    }

    events
}
