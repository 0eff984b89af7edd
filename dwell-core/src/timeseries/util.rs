//! Shared helpers for timestamp truncation and percentage rounding.

use chrono::{DateTime, SubsecRound, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Drop sub-second precision, flooring to the enclosing whole second.
#[must_use]
pub fn floor_to_second(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.trunc_subsecs(0)
}

/// `active / total * 100`, rounded half away from zero to 2 decimal places.
///
/// Computed in decimal arithmetic so values like 12.345 round as written.
/// Returns `None` when `total` is zero.
#[must_use]
pub fn round_percentage(active: u64, total: u64) -> Option<f64> {
    let pct = (Decimal::from(active) * Decimal::ONE_HUNDRED).checked_div(Decimal::from(total))?;
    pct.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
}
