// Timer lifecycle handler orchestrates start, pause, resume and stop.
//
// Responsibilities
// - Read the open entry for the triple, decide, then write conditionally on what was read.
// - Resolve a lost race on start by re-reading once and restarting the winner's entry.
//   Losing the insert (OpenTimerExists) and losing a restart (VersionMismatch) are both
//   such races.

use crate::modules::time_entries::adapters::outbound::time_entry_store::{StoreError, TimeEntryStore};
use crate::modules::time_entries::core::decision::{DecideError, Decision};
use crate::modules::time_entries::core::time_entry::{TimeEntry, TimerKey};
use crate::modules::time_entries::use_cases::errors::ApplicationError;
use crate::modules::time_entries::use_cases::timer_lifecycle::command::StartTimer;
use crate::modules::time_entries::use_cases::timer_lifecycle::decide::{
    decide_pause, decide_resume, decide_start, decide_stop,
};
use crate::shared::core::primitives::Clock;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

pub struct TimerLifecycleHandler {
    store: Arc<dyn TimeEntryStore>,
    clock: Arc<dyn Clock>,
}

impl TimerLifecycleHandler {
    pub fn new(store: Arc<dyn TimeEntryStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn start(&self, command: StartTimer) -> Result<TimeEntry, ApplicationError> {
        let new_id = Uuid::now_v7().to_string();
        match self.try_start(command.clone(), &new_id).await {
            Err(ApplicationError::Persistence(
                error @ (StoreError::OpenTimerExists { .. } | StoreError::VersionMismatch { .. }),
            )) => {
                warn!(
                    %error,
                    user_id = %command.key.user_id,
                    project_id = %command.key.project_id,
                    task_id = %command.key.task_id,
                    "concurrent start lost the race, restarting the open timer"
                );
                self.try_start(command, &new_id).await
            }
            result => result,
        }
    }

    pub async fn pause(&self, key: TimerKey) -> Result<TimeEntry, ApplicationError> {
        self.transition(key, "paused", decide_pause).await
    }

    pub async fn resume(&self, key: TimerKey) -> Result<TimeEntry, ApplicationError> {
        self.transition(key, "resumed", decide_resume).await
    }

    pub async fn stop(&self, key: TimerKey) -> Result<TimeEntry, ApplicationError> {
        self.transition(key, "stopped", decide_stop).await
    }

    async fn try_start(&self, command: StartTimer, new_id: &str) -> Result<TimeEntry, ApplicationError> {
        let open = if command.key.missing_field().is_none() {
            self.store.find_open(&command.key).await?
        } else {
            None
        };
        let decision = decide_start(open.as_ref(), command, new_id, self.clock.now());
        self.apply(decision, "started").await
    }

    async fn transition(
        &self,
        key: TimerKey,
        action: &'static str,
        decide: fn(Option<&TimeEntry>, DateTime<Utc>) -> Decision,
    ) -> Result<TimeEntry, ApplicationError> {
        if let Some(field) = key.missing_field() {
            return self.apply(Decision::rejected(DecideError::MissingField(field)), action).await;
        }
        let open = self.store.find_open(&key).await?;
        let decision = decide(open.as_ref(), self.clock.now());
        self.apply(decision, action).await
    }

    async fn apply(&self, decision: Decision, action: &'static str) -> Result<TimeEntry, ApplicationError> {
        let written = match decision {
            Decision::Insert { entry } => self.store.insert(entry).await,
            Decision::Replace {
                expected_version,
                entry,
            } => self.store.replace(expected_version, entry).await,
            Decision::Rejected { reason } => {
                warn!(%reason, action, "timer transition rejected");
                return Err(reason.into());
            }
        };
        let entry = written?;
        info!(
            entry_id = %entry.id,
            user_id = %entry.user_id,
            project_id = %entry.project_id,
            task_id = %entry.task_id,
            duration = entry.duration,
            "timer {action}"
        );
        Ok(entry)
    }
}
