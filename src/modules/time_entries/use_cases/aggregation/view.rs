use crate::modules::time_entries::adapters::outbound::directory::{ProjectRef, TaskRef, UserRef};
use crate::modules::time_entries::core::time_entry::TimeEntry;
use serde::Serialize;
use std::collections::BTreeMap;

/// A stored entry, optionally joined with display fields of what it references.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntryView {
    #[serde(flatten)]
    pub entry: TimeEntry,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<TaskRef>,
}

impl From<TimeEntry> for TimeEntryView {
    fn from(entry: TimeEntry) -> Self {
        Self {
            entry,
            user: None,
            project: None,
            task: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerList {
    pub timers: Vec<TimeEntryView>,
    pub logged_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub user_id: String,
    pub logged_hours: f64,
    pub by_project: BTreeMap<String, f64>,
    pub by_task: BTreeMap<String, f64>,
    pub open_timers: Vec<TimeEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub project_id: String,
    pub logged_hours: f64,
    pub by_task: BTreeMap<String, f64>,
    pub by_user: BTreeMap<String, f64>,
    pub open_timers: Vec<TimeEntry>,
}
