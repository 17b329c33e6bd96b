// TimeEntry is the single record of a tracked interval, live or manually logged.
//
// Lifecycle
// - Open: end_time is None. Running when is_paused is false, Paused otherwise.
// - Completed: end_time is set and duration holds whole minutes.
//
// Notes
// - All timestamps are UTC. total_paused_time is milliseconds, duration is minutes.
// - version is the store revision used for compare-and-swap writes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The (user, project, task) slot that can hold at most one open timer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerKey {
    pub user_id: String,
    pub project_id: String,
    pub task_id: String,
}

impl TimerKey {
    pub fn new(
        user_id: impl Into<String>,
        project_id: impl Into<String>,
        task_id: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            project_id: project_id.into(),
            task_id: task_id.into(),
        }
    }

    /// Name of the first blank identifier, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("userId", &self.user_id),
            ("projectId", &self.project_id),
            ("taskId", &self.task_id),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerStatus {
    Running,
    Paused,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: String,
    pub user_id: String,
    pub project_id: String,
    pub task_id: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub duration: i64,
    pub is_paused: bool,
    pub paused_at: Option<DateTime<Utc>>,
    pub total_paused_time: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing, default)]
    pub version: i64,
}

impl TimeEntry {
    /// A freshly started timer.
    pub fn started(
        id: impl Into<String>,
        key: TimerKey,
        description: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: key.user_id,
            project_id: key.project_id,
            task_id: key.task_id,
            description: description.into(),
            start_time: now,
            end_time: None,
            duration: 0,
            is_paused: false,
            paused_at: None,
            total_paused_time: 0,
            created_at: now,
            updated_at: now,
            version: 0,
        }
    }

    pub fn key(&self) -> TimerKey {
        TimerKey::new(&self.user_id, &self.project_id, &self.task_id)
    }

    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }

    pub fn belongs_to(&self, key: &TimerKey) -> bool {
        self.user_id == key.user_id && self.project_id == key.project_id && self.task_id == key.task_id
    }

    pub fn status(&self) -> TimerStatus {
        match (self.end_time, self.is_paused) {
            (Some(_), _) => TimerStatus::Completed,
            (None, true) => TimerStatus::Paused,
            (None, false) => TimerStatus::Running,
        }
    }
}
