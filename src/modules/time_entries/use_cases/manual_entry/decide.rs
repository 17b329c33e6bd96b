// Pure decisions for manually logged and edited entries.
//
// Rules
// - A manual log creates a completed entry; duration comes from its timestamps.
// - An edited duration is stored as given and never recomputed.
// - A date edit moves start and end by the same whole number of days, so the
//   stored duration still matches.
// - Durations stay within MAX_DURATION_MINUTES so rollups cannot overflow.

use crate::modules::time_entries::core::decision::{DecideError, Decision};
use crate::modules::time_entries::core::duration::{MAX_DURATION_MINUTES, days_until, worked_minutes};
use crate::modules::time_entries::core::time_entry::{TimeEntry, TimerKey};
use crate::modules::time_entries::use_cases::manual_entry::command::{LogManualTime, UpdateTimeEntry};
use chrono::{DateTime, TimeDelta, Utc};

pub fn decide_log_manual_time(command: LogManualTime, new_id: &str, now: DateTime<Utc>) -> Decision {
    let key = TimerKey::new(command.user_id, command.project_id, command.task_id);
    if let Some(field) = key.missing_field() {
        return Decision::rejected(DecideError::MissingField(field));
    }
    let Some(start_time) = command.start_time else {
        return Decision::rejected(DecideError::MissingField("startTime"));
    };
    let Some(end_time) = command.end_time else {
        return Decision::rejected(DecideError::MissingField("endTime"));
    };
    if end_time <= start_time {
        return Decision::rejected(DecideError::InvalidInterval);
    }

    let duration = worked_minutes(start_time, end_time, 0);
    if duration > MAX_DURATION_MINUTES {
        return Decision::rejected(DecideError::DurationTooLarge(MAX_DURATION_MINUTES));
    }

    let mut entry = TimeEntry::started(new_id, key, command.description.unwrap_or_default(), start_time);
    entry.end_time = Some(end_time);
    entry.duration = duration;
    entry.created_at = now;
    entry.updated_at = now;
    Decision::Insert { entry }
}

pub fn decide_update(current: Option<&TimeEntry>, command: UpdateTimeEntry, now: DateTime<Utc>) -> Decision {
    let Some(current) = current else {
        return Decision::rejected(DecideError::EntryNotFound(command.id));
    };
    match command.duration {
        Some(minutes) if minutes < 0 => return Decision::rejected(DecideError::NegativeDuration),
        Some(minutes) if minutes > MAX_DURATION_MINUTES => {
            return Decision::rejected(DecideError::DurationTooLarge(MAX_DURATION_MINUTES));
        }
        _ => {}
    }

    let mut next = current.clone();
    if let Some(minutes) = command.duration {
        next.duration = minutes;
    }
    if let Some(date) = command.date {
        let shift = days_until(next.start_time, date);
        next = match shifted(next, shift) {
            Some(moved) => moved,
            None => return Decision::rejected(DecideError::DateOutOfRange),
        };
    }
    if let Some(description) = command.description {
        next.description = description;
    }
    next.updated_at = now;
    Decision::replace(current, next)
}

fn shifted(mut entry: TimeEntry, shift: TimeDelta) -> Option<TimeEntry> {
    entry.start_time = entry.start_time.checked_add_signed(shift)?;
    if let Some(end) = entry.end_time {
        entry.end_time = Some(end.checked_add_signed(shift)?);
    }
    if let Some(paused) = entry.paused_at {
        entry.paused_at = Some(paused.checked_add_signed(shift)?);
    }
    Some(entry)
}
