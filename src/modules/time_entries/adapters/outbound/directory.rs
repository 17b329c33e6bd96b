use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRef {
    pub id: String,
    pub title: String,
}

/// Display fields for the records a time entry points at. Owned by other services.
#[async_trait]
pub trait ReferenceDirectory: Send + Sync {
    async fn user(&self, id: &str) -> anyhow::Result<Option<UserRef>>;
    async fn project(&self, id: &str) -> anyhow::Result<Option<ProjectRef>>;
    async fn task(&self, id: &str) -> anyhow::Result<Option<TaskRef>>;
}
