//! Parking fee calculation

use chrono::{DateTime, Utc};

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Fractional hours between `arrived_at` and `now`.
///
/// A `now` earlier than `arrived_at` counts as zero elapsed time.
pub fn hours_elapsed(arrived_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let elapsed = now.signed_duration_since(arrived_at);
    let seconds = elapsed.num_milliseconds() as f64 / 1000.0;
    seconds.max(0.0) / SECONDS_PER_HOUR
}

/// Fee for the elapsed time at the given hourly rate.
///
/// # Formula
/// fee = hours_elapsed x hourly_rate (no rounding)
pub fn compute_fee(hourly_rate: f64, arrived_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    hours_elapsed(arrived_at, now) * hourly_rate
}
