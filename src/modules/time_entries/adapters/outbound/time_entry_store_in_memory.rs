// In memory implementation of the TimeEntryStore port.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Keep entries in a map keyed by id behind one RwLock so each check-and-write is atomic.
// - Enforce the single open entry per triple on insert and optimistic concurrency on replace.

use crate::modules::time_entries::adapters::outbound::time_entry_store::{
    EntryFilter, StoreError, TimeEntryStore,
};
use crate::modules::time_entries::core::time_entry::{TimeEntry, TimerKey};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryTimeEntryStore {
    entries: RwLock<HashMap<String, TimeEntry>>,
    delay_write_ms: AtomicU64,
    is_offline: bool,
}

impl InMemoryTimeEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Sleep before every write, widening the gap between a caller's read and its write.
    pub fn set_delay_write_ms(&self, ms: u64) {
        self.delay_write_ms.store(ms, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Time entry store offline".into()));
        }
        Ok(())
    }

    async fn delay_write(&self) {
        let ms = self.delay_write_ms.load(Ordering::SeqCst);
        if ms > 0 {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }
}

#[async_trait::async_trait]
impl TimeEntryStore for InMemoryTimeEntryStore {
    async fn find_open(&self, key: &TimerKey) -> Result<Option<TimeEntry>, StoreError> {
        self.ensure_online()?;
        let guard = self.entries.read().await;
        Ok(guard
            .values()
            .find(|entry| entry.is_open() && entry.belongs_to(key))
            .cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<TimeEntry>, StoreError> {
        self.ensure_online()?;
        Ok(self.entries.read().await.get(id).cloned())
    }

    async fn insert(&self, mut entry: TimeEntry) -> Result<TimeEntry, StoreError> {
        self.ensure_online()?;
        self.delay_write().await;
        let mut guard = self.entries.write().await;
        if guard.contains_key(&entry.id) {
            return Err(StoreError::Backend(format!(
                "duplicate time entry id {}",
                entry.id
            )));
        }
        if entry.is_open() {
            let key = entry.key();
            if guard.values().any(|e| e.is_open() && e.belongs_to(&key)) {
                return Err(StoreError::open_timer_exists(&key));
            }
        }
        entry.version = 1;
        guard.insert(entry.id.clone(), entry.clone());
        Ok(entry)
    }

    async fn replace(&self, expected_version: i64, mut entry: TimeEntry) -> Result<TimeEntry, StoreError> {
        self.ensure_online()?;
        self.delay_write().await;
        let mut guard = self.entries.write().await;
        let actual = match guard.get(&entry.id) {
            Some(stored) => stored.version,
            None => return Err(StoreError::Missing { id: entry.id }),
        };
        if actual != expected_version {
            return Err(StoreError::VersionMismatch {
                id: entry.id,
                expected: expected_version,
                actual,
            });
        }
        entry.version = expected_version + 1;
        guard.insert(entry.id.clone(), entry.clone());
        Ok(entry)
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        self.ensure_online()?;
        self.delay_write().await;
        Ok(self.entries.write().await.remove(id).is_some())
    }

    async fn list(&self, filter: &EntryFilter) -> Result<Vec<TimeEntry>, StoreError> {
        self.ensure_online()?;
        let guard = self.entries.read().await;
        let mut items: Vec<TimeEntry> = guard
            .values()
            .filter(|entry| filter.matches(entry))
            .cloned()
            .collect();
        items.sort_by(|a, b| b.start_time.cmp(&a.start_time).then_with(|| a.id.cmp(&b.id)));
        Ok(items)
    }
}
