use crate::modules::time_entries::adapters::outbound::time_entry_store::TimeEntryStore;
use crate::modules::time_entries::adapters::outbound::time_entry_store_in_memory::InMemoryTimeEntryStore;
use crate::modules::time_entries::core::time_entry::TimerStatus;
use crate::modules::time_entries::use_cases::timer_lifecycle::handler::TimerLifecycleHandler;
use crate::tests::fixtures::commands::StartTimerBuilder;
use crate::tests::fixtures::entries::{clock_at, fixed_key};
use std::sync::Arc;

#[tokio::test]
async fn concurrent_starts_leave_one_open_entry() {
    let store = Arc::new(InMemoryTimeEntryStore::new());
    // Both callers read "no open timer" before either write lands.
    store.set_delay_write_ms(20);
    let handler = TimerLifecycleHandler::new(store.clone(), Arc::new(clock_at(9, 0)));

    let (first, second) = tokio::join!(
        handler.start(StartTimerBuilder::new().build()),
        handler.start(StartTimerBuilder::new().description(Some("Second")).build()),
    );
    let (first, second) = (first.unwrap(), second.unwrap());

    assert_eq!(first.id, second.id);
    assert_eq!(store.len().await, 1);
    let open = store.find_open(&fixed_key()).await.unwrap().unwrap();
    assert_eq!(open.status(), TimerStatus::Running);
    assert_eq!(open.version, 2);
}

#[tokio::test]
async fn concurrent_restarts_of_an_open_timer_both_succeed() {
    let store = Arc::new(InMemoryTimeEntryStore::new());
    let handler = TimerLifecycleHandler::new(store.clone(), Arc::new(clock_at(9, 0)));
    let existing = handler.start(StartTimerBuilder::new().build()).await.unwrap();
    // Both callers read version 1 before either restart lands.
    store.set_delay_write_ms(20);

    let (first, second) = tokio::join!(
        handler.start(StartTimerBuilder::new().build()),
        handler.start(StartTimerBuilder::new().description(Some("Second")).build()),
    );
    let (first, second) = (first.unwrap(), second.unwrap());

    assert_eq!(first.id, existing.id);
    assert_eq!(second.id, existing.id);
    assert_eq!(store.len().await, 1);
    let open = store.find_open(&fixed_key()).await.unwrap().unwrap();
    assert_eq!(open.status(), TimerStatus::Running);
    assert_eq!(open.version, 3);
}
