// Postgres reference directory.
//
// Reads display fields from the users, projects and tasks tables that live next to
// time_entries. Rows are owned by other services; this adapter only reads them.

use crate::modules::time_entries::adapters::outbound::directory::{
    ProjectRef, ReferenceDirectory, TaskRef, UserRef,
};
use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;

const SCHEMA: [&str; 3] = [
    "CREATE TABLE IF NOT EXISTS users (id TEXT PRIMARY KEY, name TEXT NOT NULL)",
    "CREATE TABLE IF NOT EXISTS projects (id TEXT PRIMARY KEY, name TEXT NOT NULL)",
    "CREATE TABLE IF NOT EXISTS tasks (id TEXT PRIMARY KEY, title TEXT NOT NULL)",
];

#[derive(sqlx::FromRow)]
struct NamedRow {
    id: String,
    name: String,
}

#[derive(sqlx::FromRow)]
struct TaskRow {
    id: String,
    title: String,
}

pub struct PostgresDirectory {
    pool: PgPool,
}

impl PostgresDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn ensure_schema(&self) -> anyhow::Result<()> {
        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .context("Failed to create reference tables")?;
        }
        Ok(())
    }
}

#[async_trait]
impl ReferenceDirectory for PostgresDirectory {
    async fn user(&self, id: &str) -> anyhow::Result<Option<UserRef>> {
        let row = sqlx::query_as::<_, NamedRow>("SELECT id, name FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Failed to read user {id}"))?;
        Ok(row.map(|row| UserRef { id: row.id, name: row.name }))
    }

    async fn project(&self, id: &str) -> anyhow::Result<Option<ProjectRef>> {
        let row = sqlx::query_as::<_, NamedRow>("SELECT id, name FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Failed to read project {id}"))?;
        Ok(row.map(|row| ProjectRef { id: row.id, name: row.name }))
    }

    async fn task(&self, id: &str) -> anyhow::Result<Option<TaskRef>> {
        let row = sqlx::query_as::<_, TaskRow>("SELECT id, title FROM tasks WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Failed to read task {id}"))?;
        Ok(row.map(|row| TaskRef { id: row.id, title: row.title }))
    }
}
