// Port for the Time Entry Store, the single place time entries are mutated.
//
// Responsibilities
// - insert enforces "at most one open entry per (user, project, task)" atomically.
// - replace is a compare-and-swap on the stored version.
// - No caching across calls. Every operation reads current state.

use crate::modules::time_entries::core::time_entry::{TimeEntry, TimerKey};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("an open timer already exists for user {user_id}, project {project_id}, task {task_id}")]
    OpenTimerExists {
        user_id: String,
        project_id: String,
        task_id: String,
    },

    #[error("version mismatch on time entry {id}: expected {expected}, actual {actual}")]
    VersionMismatch {
        id: String,
        expected: i64,
        actual: i64,
    },

    #[error("time entry {id} no longer exists")]
    Missing { id: String },

    #[error("backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn open_timer_exists(key: &TimerKey) -> Self {
        StoreError::OpenTimerExists {
            user_id: key.user_id.clone(),
            project_id: key.project_id.clone(),
            task_id: key.task_id.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryFilter {
    User(String),
    Project(String),
}

impl EntryFilter {
    pub fn matches(&self, entry: &TimeEntry) -> bool {
        match self {
            EntryFilter::User(user_id) => &entry.user_id == user_id,
            EntryFilter::Project(project_id) => &entry.project_id == project_id,
        }
    }
}

#[async_trait]
pub trait TimeEntryStore: Send + Sync {
    async fn find_open(&self, key: &TimerKey) -> Result<Option<TimeEntry>, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<TimeEntry>, StoreError>;

    /// Persist a new entry at version 1.
    async fn insert(&self, entry: TimeEntry) -> Result<TimeEntry, StoreError>;

    /// Overwrite the entry only if its stored version is still `expected_version`.
    async fn replace(&self, expected_version: i64, entry: TimeEntry) -> Result<TimeEntry, StoreError>;

    /// Hard delete. Returns false when nothing matched.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;

    /// Matching entries, most recent start first.
    async fn list(&self, filter: &EntryFilter) -> Result<Vec<TimeEntry>, StoreError>;
}
