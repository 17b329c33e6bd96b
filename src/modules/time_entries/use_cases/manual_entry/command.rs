// Commands for entries written directly, outside the live timer lifecycle.
//
// Fields arrive as optionals so the decider owns the "required" rules and reports
// which one is missing.

use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogManualTime {
    pub user_id: String,
    pub project_id: String,
    pub task_id: String,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTimeEntry {
    pub id: String,
    /// Minutes. Overrides the stored value as given.
    pub duration: Option<i64>,
    /// Moves the entry to this calendar day, keeping times of day.
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
}
