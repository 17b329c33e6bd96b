use crate::modules::time_entries::adapters::outbound::directory::{
    ProjectRef, ReferenceDirectory, TaskRef, UserRef,
};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

pub struct InMemoryDirectory {
    users: RwLock<HashMap<String, UserRef>>,
    projects: RwLock<HashMap<String, ProjectRef>>,
    tasks: RwLock<HashMap<String, TaskRef>>,
    is_offline: bool,
}

impl Default for InMemoryDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            projects: RwLock::new(HashMap::new()),
            tasks: RwLock::new(HashMap::new()),
            is_offline: false,
        }
    }

    /// A directory preloaded with the given references, e.g. from configuration.
    pub fn seeded(users: Vec<UserRef>, projects: Vec<ProjectRef>, tasks: Vec<TaskRef>) -> Self {
        Self {
            users: RwLock::new(users.into_iter().map(|u| (u.id.clone(), u)).collect()),
            projects: RwLock::new(projects.into_iter().map(|p| (p.id.clone(), p)).collect()),
            tasks: RwLock::new(tasks.into_iter().map(|t| (t.id.clone(), t)).collect()),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn add_user(&self, id: &str, name: &str) {
        self.users.write().await.insert(
            id.to_string(),
            UserRef {
                id: id.to_string(),
                name: name.to_string(),
            },
        );
    }

    pub async fn add_project(&self, id: &str, name: &str) {
        self.projects.write().await.insert(
            id.to_string(),
            ProjectRef {
                id: id.to_string(),
                name: name.to_string(),
            },
        );
    }

    pub async fn add_task(&self, id: &str, title: &str) {
        self.tasks.write().await.insert(
            id.to_string(),
            TaskRef {
                id: id.to_string(),
                title: title.to_string(),
            },
        );
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            anyhow::bail!("Reference directory offline");
        }
        Ok(())
    }
}

#[async_trait]
impl ReferenceDirectory for InMemoryDirectory {
    async fn user(&self, id: &str) -> anyhow::Result<Option<UserRef>> {
        self.ensure_online()?;
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn project(&self, id: &str) -> anyhow::Result<Option<ProjectRef>> {
        self.ensure_online()?;
        Ok(self.projects.read().await.get(id).cloned())
    }

    async fn task(&self, id: &str) -> anyhow::Result<Option<TaskRef>> {
        self.ensure_online()?;
        Ok(self.tasks.read().await.get(id).cloned())
    }
}
