// Picks the store and reference directory from configuration.
//
// With database.url set both come from Postgres and share one pool.
// Otherwise entries live in memory and the directory is seeded from [directory].

use crate::modules::time_entries::adapters::outbound::directory::ReferenceDirectory;
use crate::modules::time_entries::adapters::outbound::directory_postgres::PostgresDirectory;
use crate::modules::time_entries::adapters::outbound::time_entry_store::TimeEntryStore;
use crate::modules::time_entries::adapters::outbound::time_entry_store_in_memory::InMemoryTimeEntryStore;
use crate::modules::time_entries::adapters::outbound::time_entry_store_postgres::PostgresTimeEntryStore;
use crate::shell::config::AppConfig;
use std::sync::Arc;
use tracing::{info, warn};

pub struct Backends {
    pub store: Arc<dyn TimeEntryStore>,
    pub directory: Arc<dyn ReferenceDirectory>,
}

pub async fn backends(config: &AppConfig) -> anyhow::Result<Backends> {
    match &config.database.url {
        Some(url) => {
            let store = PostgresTimeEntryStore::connect(url, config.database.max_connections).await?;
            store.ensure_schema().await?;
            let directory = PostgresDirectory::new(store.pool());
            directory.ensure_schema().await?;
            info!("using postgres time entry store and reference directory");
            Ok(Backends {
                store: Arc::new(store),
                directory: Arc::new(directory),
            })
        }
        None => {
            warn!("database.url not set, time entries are kept in memory only");
            info!(
                users = config.directory.users.len(),
                projects = config.directory.projects.len(),
                tasks = config.directory.tasks.len(),
                "reference directory seeded from configuration"
            );
            Ok(Backends {
                store: Arc::new(InMemoryTimeEntryStore::new()),
                directory: Arc::new(config.directory.in_memory()),
            })
        }
    }
}
