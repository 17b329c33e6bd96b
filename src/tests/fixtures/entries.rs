// Shared entry fixtures. All instants fall on 2024-01-01 UTC unless stated.

use crate::modules::time_entries::core::duration::worked_minutes;
use crate::modules::time_entries::core::time_entry::{TimeEntry, TimerKey};
use crate::shared::core::primitives::ManualClock;
use chrono::{DateTime, TimeZone, Utc};

pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, hour, minute, 0).unwrap()
}

pub fn fixed_key() -> TimerKey {
    TimerKey::new("user-fixed-0001", "project-fixed-0001", "task-fixed-0001")
}

pub fn clock_at(hour: u32, minute: u32) -> ManualClock {
    ManualClock::new(at(hour, minute))
}

pub fn running_entry(start: DateTime<Utc>) -> TimeEntry {
    TimeEntry::started("te-fixed-0001", fixed_key(), "This is a test", start)
}

pub fn completed_entry(
    id: &str,
    key: TimerKey,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> TimeEntry {
    let mut entry = TimeEntry::started(id, key, "Completed work", start);
    entry.end_time = Some(end);
    entry.duration = worked_minutes(start, end, 0);
    entry.updated_at = end;
    entry
}

pub fn with_duration(mut entry: TimeEntry, minutes: i64) -> TimeEntry {
    entry.duration = minutes;
    entry
}
