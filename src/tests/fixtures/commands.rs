// Shared command builders. Defaults match the fixed identifiers in entries.rs.

use crate::modules::time_entries::core::time_entry::TimerKey;
use crate::modules::time_entries::use_cases::manual_entry::command::{LogManualTime, UpdateTimeEntry};
use crate::modules::time_entries::use_cases::timer_lifecycle::command::StartTimer;
use crate::tests::fixtures::entries::{at, fixed_key};
use chrono::{DateTime, NaiveDate, Utc};

pub struct StartTimerBuilder {
    inner: StartTimer,
}

impl Default for StartTimerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl StartTimerBuilder {
    pub fn new() -> Self {
        Self {
            inner: StartTimer {
                key: fixed_key(),
                description: Some("This is a test".to_string()),
            },
        }
    }

    pub fn key(mut self, v: TimerKey) -> Self {
        self.inner.key = v;
        self
    }

    pub fn description(mut self, v: Option<&str>) -> Self {
        self.inner.description = v.map(str::to_string);
        self
    }

    pub fn build(self) -> StartTimer {
        self.inner
    }
}

pub struct LogManualTimeBuilder {
    inner: LogManualTime,
}

impl Default for LogManualTimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl LogManualTimeBuilder {
    pub fn new() -> Self {
        let key = fixed_key();
        Self {
            inner: LogManualTime {
                user_id: key.user_id,
                project_id: key.project_id,
                task_id: key.task_id,
                start_time: Some(at(9, 0)),
                end_time: Some(at(11, 30)),
                description: Some("Workshop".to_string()),
            },
        }
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn task_id(mut self, v: impl Into<String>) -> Self {
        self.inner.task_id = v.into();
        self
    }

    pub fn start_time(mut self, v: Option<DateTime<Utc>>) -> Self {
        self.inner.start_time = v;
        self
    }

    pub fn end_time(mut self, v: Option<DateTime<Utc>>) -> Self {
        self.inner.end_time = v;
        self
    }

    pub fn description(mut self, v: Option<&str>) -> Self {
        self.inner.description = v.map(str::to_string);
        self
    }

    pub fn build(self) -> LogManualTime {
        self.inner
    }
}

pub fn update_command(id: &str) -> UpdateTimeEntry {
    UpdateTimeEntry {
        id: id.to_string(),
        duration: None,
        date: None,
        description: None,
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
