// Pure time arithmetic shared by the lifecycle engine and manual entries.
//
// Boundaries
// - No input or output. Never fails on present timestamps; skew is clamped.

use chrono::{DateTime, Duration, NaiveDate, Utc};

pub const MILLIS_PER_MINUTE: i64 = 60_000;

/// Upper bound for a stored duration, in minutes.
pub const MAX_DURATION_MINUTES: i64 = i32::MAX as i64;

/// Whole minutes worked between `start` and `end` minus paused milliseconds,
/// rounded half up and floored at zero.
pub fn worked_minutes(start: DateTime<Utc>, end: DateTime<Utc>, paused_millis: i64) -> i64 {
    let worked = (end - start).num_milliseconds() - paused_millis;
    if worked <= 0 {
        return 0;
    }
    (worked + MILLIS_PER_MINUTE / 2) / MILLIS_PER_MINUTE
}

/// Milliseconds from `since` to `now`, never negative.
pub fn elapsed_millis(since: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - since).num_milliseconds().max(0)
}

/// Days to add to `start` so it lands on `date`, keeping its time of day.
pub fn days_until(start: DateTime<Utc>, date: NaiveDate) -> Duration {
    Duration::days((date - start.date_naive()).num_days())
}
