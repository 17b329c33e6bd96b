// Pure transition rules for a (user, project, task) timer.
//
// Idle -> Running (start), Running -> Paused (pause), Paused -> Running (resume),
// Running | Paused -> Completed (stop). Start on an open entry restarts it in place.
// Every function receives the open entry as currently stored, or None.

use crate::modules::time_entries::core::decision::{DecideError, Decision};
use crate::modules::time_entries::core::duration::{elapsed_millis, worked_minutes};
use crate::modules::time_entries::core::time_entry::{TimeEntry, TimerStatus};
use crate::modules::time_entries::use_cases::timer_lifecycle::command::StartTimer;
use chrono::{DateTime, Utc};

pub fn decide_start(
    open: Option<&TimeEntry>,
    command: StartTimer,
    new_id: &str,
    now: DateTime<Utc>,
) -> Decision {
    if let Some(field) = command.key.missing_field() {
        return Decision::rejected(DecideError::MissingField(field));
    }
    match open {
        Some(current) => {
            let mut next = current.clone();
            next.start_time = now;
            next.end_time = None;
            next.duration = 0;
            next.is_paused = false;
            next.paused_at = None;
            next.total_paused_time = 0;
            if let Some(description) = command.description {
                next.description = description;
            }
            next.updated_at = now;
            Decision::replace(current, next)
        }
        None => Decision::Insert {
            entry: TimeEntry::started(
                new_id,
                command.key,
                command.description.unwrap_or_default(),
                now,
            ),
        },
    }
}

pub fn decide_pause(open: Option<&TimeEntry>, now: DateTime<Utc>) -> Decision {
    match open {
        Some(current) if current.status() == TimerStatus::Running => {
            let mut next = current.clone();
            next.is_paused = true;
            next.paused_at = Some(now);
            next.updated_at = now;
            Decision::replace(current, next)
        }
        _ => Decision::rejected(DecideError::NoRunningTimer),
    }
}

pub fn decide_resume(open: Option<&TimeEntry>, now: DateTime<Utc>) -> Decision {
    match open {
        Some(current) if current.status() == TimerStatus::Paused => {
            let mut next = current.clone();
            fold_pause(&mut next, now);
            next.updated_at = now;
            Decision::replace(current, next)
        }
        _ => Decision::rejected(DecideError::NoPausedTimer),
    }
}

pub fn decide_stop(open: Option<&TimeEntry>, now: DateTime<Utc>) -> Decision {
    match open {
        Some(current) if current.is_open() => {
            let mut next = current.clone();
            if next.is_paused {
                fold_pause(&mut next, now);
            }
            next.end_time = Some(now);
            next.duration = worked_minutes(next.start_time, now, next.total_paused_time);
            next.updated_at = now;
            Decision::replace(current, next)
        }
        _ => Decision::rejected(DecideError::NoOpenTimer),
    }
}

/// Close the current pause interval into total_paused_time.
fn fold_pause(entry: &mut TimeEntry, now: DateTime<Utc>) {
    if let Some(paused_at) = entry.paused_at.take() {
        entry.total_paused_time += elapsed_millis(paused_at, now);
    }
    entry.is_paused = false;
}
