// Manual entry handler: log, edit and delete completed entries.
//
// Manual logs do not consult the open-timer slot. An entry may overlap a live timer
// for the same triple.

use crate::modules::time_entries::adapters::outbound::time_entry_store::TimeEntryStore;
use crate::modules::time_entries::core::decision::{DecideError, Decision};
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::errors::ApplicationError;
use crate::modules::time_entries::use_cases::manual_entry::command::{LogManualTime, UpdateTimeEntry};
use crate::modules::time_entries::use_cases::manual_entry::decide::{decide_log_manual_time, decide_update};
use crate::shared::core::primitives::Clock;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

pub struct ManualEntryHandler {
    store: Arc<dyn TimeEntryStore>,
    clock: Arc<dyn Clock>,
}

impl ManualEntryHandler {
    pub fn new(store: Arc<dyn TimeEntryStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn log(&self, command: LogManualTime) -> Result<TimeEntry, ApplicationError> {
        let new_id = Uuid::now_v7().to_string();
        let decision = decide_log_manual_time(command, &new_id, self.clock.now());
        self.apply(decision, "logged").await
    }

    pub async fn update(&self, command: UpdateTimeEntry) -> Result<TimeEntry, ApplicationError> {
        let current = self.store.find_by_id(&command.id).await?;
        let decision = decide_update(current.as_ref(), command, self.clock.now());
        self.apply(decision, "updated").await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApplicationError> {
        if self.store.delete(id).await? {
            info!(entry_id = %id, "time entry deleted");
            Ok(())
        } else {
            let reason = DecideError::EntryNotFound(id.to_string());
            warn!(%reason, "delete rejected");
            Err(reason.into())
        }
    }

    async fn apply(&self, decision: Decision, action: &'static str) -> Result<TimeEntry, ApplicationError> {
        let entry = match decision {
            Decision::Insert { entry } => self.store.insert(entry).await?,
            Decision::Replace {
                expected_version,
                entry,
            } => self.store.replace(expected_version, entry).await?,
            Decision::Rejected { reason } => {
                warn!(%reason, action, "time entry change rejected");
                return Err(reason.into());
            }
        };
        info!(
            entry_id = %entry.id,
            user_id = %entry.user_id,
            duration = entry.duration,
            "time entry {action}"
        );
        Ok(entry)
    }
}
