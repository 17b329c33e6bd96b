// Postgres Time Entry Store.
//
// The open-slot rule is a partial unique index, so "find open or create" races are
// settled by the database. replace is a conditional UPDATE on (id, version).

use crate::modules::time_entries::adapters::outbound::time_entry_store::{
    EntryFilter, StoreError, TimeEntryStore,
};
use crate::modules::time_entries::core::time_entry::{TimeEntry, TimerKey};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

const OPEN_SLOT_INDEX: &str = "time_entries_one_open_per_slot";

const SCHEMA: [&str; 4] = [
    "CREATE TABLE IF NOT EXISTS time_entries (
        id TEXT PRIMARY KEY,
        user_id TEXT NOT NULL,
        project_id TEXT NOT NULL,
        task_id TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        start_time TIMESTAMPTZ NOT NULL,
        end_time TIMESTAMPTZ,
        duration BIGINT NOT NULL DEFAULT 0,
        is_paused BOOLEAN NOT NULL DEFAULT FALSE,
        paused_at TIMESTAMPTZ,
        total_paused_time BIGINT NOT NULL DEFAULT 0,
        created_at TIMESTAMPTZ NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL,
        version BIGINT NOT NULL
    )",
    "CREATE UNIQUE INDEX IF NOT EXISTS time_entries_one_open_per_slot
        ON time_entries (user_id, project_id, task_id) WHERE end_time IS NULL",
    "CREATE INDEX IF NOT EXISTS time_entries_by_user ON time_entries (user_id, start_time DESC)",
    "CREATE INDEX IF NOT EXISTS time_entries_by_project ON time_entries (project_id, start_time DESC)",
];

const COLUMNS: &str = "id, user_id, project_id, task_id, description, start_time, end_time, duration,
    is_paused, paused_at, total_paused_time, created_at, updated_at, version";

#[derive(sqlx::FromRow)]
struct TimeEntryRow {
    id: String,
    user_id: String,
    project_id: String,
    task_id: String,
    description: String,
    start_time: DateTime<Utc>,
    end_time: Option<DateTime<Utc>>,
    duration: i64,
    is_paused: bool,
    paused_at: Option<DateTime<Utc>>,
    total_paused_time: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    version: i64,
}

impl From<TimeEntryRow> for TimeEntry {
    fn from(row: TimeEntryRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            project_id: row.project_id,
            task_id: row.task_id,
            description: row.description,
            start_time: row.start_time,
            end_time: row.end_time,
            duration: row.duration,
            is_paused: row.is_paused,
            paused_at: row.paused_at,
            total_paused_time: row.total_paused_time,
            created_at: row.created_at,
            updated_at: row.updated_at,
            version: row.version,
        }
    }
}

pub struct PostgresTimeEntryStore {
    pool: PgPool,
}

impl PostgresTimeEntryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
            .map_err(|e| backend("connect", e))?;
        Ok(Self::new(pool))
    }

    /// Shared with adapters that read neighbouring tables.
    pub fn pool(&self) -> PgPool {
        self.pool.clone()
    }

    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| backend("create schema", e))?;
        }
        Ok(())
    }
}

fn backend(action: &str, error: sqlx::Error) -> StoreError {
    StoreError::Backend(format!("Failed to {action}: {error}"))
}

fn write_error(action: &str, key: &TimerKey, error: sqlx::Error) -> StoreError {
    let open_slot_taken = error.as_database_error().is_some_and(|db| {
        db.is_unique_violation() && db.constraint() == Some(OPEN_SLOT_INDEX)
    });
    if open_slot_taken {
        StoreError::open_timer_exists(key)
    } else {
        backend(action, error)
    }
}

#[async_trait]
impl TimeEntryStore for PostgresTimeEntryStore {
    async fn find_open(&self, key: &TimerKey) -> Result<Option<TimeEntry>, StoreError> {
        sqlx::query_as::<_, TimeEntryRow>(&format!(
            "SELECT {COLUMNS} FROM time_entries
             WHERE user_id = $1 AND project_id = $2 AND task_id = $3 AND end_time IS NULL"
        ))
        .bind(&key.user_id)
        .bind(&key.project_id)
        .bind(&key.task_id)
        .fetch_optional(&self.pool)
        .await
        .map(|row| row.map(Into::into))
        .map_err(|e| backend("find open time entry", e))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<TimeEntry>, StoreError> {
        sqlx::query_as::<_, TimeEntryRow>(&format!("SELECT {COLUMNS} FROM time_entries WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map(|row| row.map(Into::into))
            .map_err(|e| backend("find time entry", e))
    }

    async fn insert(&self, entry: TimeEntry) -> Result<TimeEntry, StoreError> {
        let key = entry.key();
        sqlx::query_as::<_, TimeEntryRow>(&format!(
            "INSERT INTO time_entries ({COLUMNS})
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, 1)
             RETURNING {COLUMNS}"
        ))
        .bind(&entry.id)
        .bind(&entry.user_id)
        .bind(&entry.project_id)
        .bind(&entry.task_id)
        .bind(&entry.description)
        .bind(entry.start_time)
        .bind(entry.end_time)
        .bind(entry.duration)
        .bind(entry.is_paused)
        .bind(entry.paused_at)
        .bind(entry.total_paused_time)
        .bind(entry.created_at)
        .bind(entry.updated_at)
        .fetch_one(&self.pool)
        .await
        .map(Into::into)
        .map_err(|e| write_error("insert time entry", &key, e))
    }

    async fn replace(&self, expected_version: i64, entry: TimeEntry) -> Result<TimeEntry, StoreError> {
        let key = entry.key();
        let updated = sqlx::query_as::<_, TimeEntryRow>(&format!(
            "UPDATE time_entries
             SET description = $3, start_time = $4, end_time = $5, duration = $6, is_paused = $7,
                 paused_at = $8, total_paused_time = $9, updated_at = $10, version = version + 1
             WHERE id = $1 AND version = $2
             RETURNING {COLUMNS}"
        ))
        .bind(&entry.id)
        .bind(expected_version)
        .bind(&entry.description)
        .bind(entry.start_time)
        .bind(entry.end_time)
        .bind(entry.duration)
        .bind(entry.is_paused)
        .bind(entry.paused_at)
        .bind(entry.total_paused_time)
        .bind(entry.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error("update time entry", &key, e))?;

        if let Some(row) = updated {
            return Ok(row.into());
        }

        let actual: Option<(i64,)> = sqlx::query_as("SELECT version FROM time_entries WHERE id = $1")
            .bind(&entry.id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| backend("read time entry version", e))?;
        Err(match actual {
            Some((actual,)) => StoreError::VersionMismatch {
                id: entry.id,
                expected: expected_version,
                actual,
            },
            None => StoreError::Missing { id: entry.id },
        })
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM time_entries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| backend("delete time entry", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, filter: &EntryFilter) -> Result<Vec<TimeEntry>, StoreError> {
        let (column, value) = match filter {
            EntryFilter::User(user_id) => ("user_id", user_id),
            EntryFilter::Project(project_id) => ("project_id", project_id),
        };
        let rows = sqlx::query_as::<_, TimeEntryRow>(&format!(
            "SELECT {COLUMNS} FROM time_entries WHERE {column} = $1 ORDER BY start_time DESC, id ASC"
        ))
        .bind(value)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| backend("list time entries", e))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
