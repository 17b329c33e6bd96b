use crate::modules::time_entries::adapters::outbound::directory::ReferenceDirectory;
use crate::modules::time_entries::adapters::outbound::time_entry_store::TimeEntryStore;
use crate::modules::time_entries::use_cases::aggregation::handler::TimeEntryQueryHandler;
use crate::modules::time_entries::use_cases::manual_entry::handler::ManualEntryHandler;
use crate::modules::time_entries::use_cases::timer_lifecycle::handler::TimerLifecycleHandler;
use crate::shared::core::primitives::Clock;
use axum::http::HeaderName;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub timers: Arc<TimerLifecycleHandler>,
    pub manual_entries: Arc<ManualEntryHandler>,
    pub queries: Arc<TimeEntryQueryHandler>,
    pub user_header: HeaderName,
}

impl AppState {
    pub fn new(
        store: Arc<dyn TimeEntryStore>,
        directory: Arc<dyn ReferenceDirectory>,
        clock: Arc<dyn Clock>,
        user_header: HeaderName,
    ) -> Self {
        Self {
            timers: Arc::new(TimerLifecycleHandler::new(store.clone(), clock.clone())),
            manual_entries: Arc::new(ManualEntryHandler::new(store.clone(), clock)),
            queries: Arc::new(TimeEntryQueryHandler::new(store, directory)),
            user_header,
        }
    }
}
