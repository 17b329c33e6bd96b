use crate::modules::time_entries::adapters::outbound::directory_in_memory::InMemoryDirectory;
use crate::modules::time_entries::adapters::outbound::time_entry_store_in_memory::InMemoryTimeEntryStore;
use crate::modules::time_entries::use_cases::aggregation::handler::TimeEntryQueryHandler;
use crate::modules::time_entries::use_cases::manual_entry::handler::ManualEntryHandler;
use crate::modules::time_entries::use_cases::timer_lifecycle::handler::TimerLifecycleHandler;
use crate::tests::fixtures::commands::{LogManualTimeBuilder, StartTimerBuilder, date, update_command};
use crate::tests::fixtures::entries::{at, clock_at, fixed_key};
use chrono::Duration;
use std::sync::Arc;

#[tokio::test]
async fn tracks_a_working_day_into_logged_hours() {
    let store = Arc::new(InMemoryTimeEntryStore::new());
    let clock = Arc::new(clock_at(9, 0));
    let timers = TimerLifecycleHandler::new(store.clone(), clock.clone());
    let manual = ManualEntryHandler::new(store.clone(), clock.clone());
    let queries = TimeEntryQueryHandler::new(store.clone(), Arc::new(InMemoryDirectory::new()));

    timers.start(StartTimerBuilder::new().build()).await.unwrap();
    clock.advance(Duration::minutes(45));
    timers.pause(fixed_key()).await.unwrap();
    clock.advance(Duration::minutes(15));
    timers.resume(fixed_key()).await.unwrap();
    clock.advance(Duration::minutes(45));
    let live = timers.stop(fixed_key()).await.unwrap();
    assert_eq!(live.duration, 90);

    let logged = manual
        .log(
            LogManualTimeBuilder::new()
                .start_time(Some(at(13, 0)))
                .end_time(Some(at(13, 30)))
                .build(),
        )
        .await
        .unwrap();
    assert_eq!(logged.duration, 30);

    let list = queries.entries_for_user("user-fixed-0001", false).await.unwrap();
    assert_eq!(list.timers.len(), 2);
    assert_eq!(list.logged_hours, 2.0);
    assert_eq!(list.timers[0].entry.id, logged.id);

    let mut correction = update_command(&logged.id);
    correction.duration = Some(60);
    correction.date = Some(date(2024, 1, 2));
    manual.update(correction).await.unwrap();

    let summary = queries.user_summary("user-fixed-0001").await.unwrap();
    assert_eq!(summary.logged_hours, 2.5);
    assert_eq!(summary.by_project.get("project-fixed-0001"), Some(&2.5));
    assert!(summary.open_timers.is_empty());

    manual.delete(&live.id).await.unwrap();
    let after_delete = queries.entries_for_project("project-fixed-0001", false).await.unwrap();
    assert_eq!(after_delete.logged_hours, 1.0);
}

#[tokio::test]
async fn stopping_a_paused_timer_excludes_the_final_pause() {
    let store = Arc::new(InMemoryTimeEntryStore::new());
    let clock = Arc::new(clock_at(9, 0));
    let timers = TimerLifecycleHandler::new(store.clone(), clock.clone());

    timers.start(StartTimerBuilder::new().build()).await.unwrap();
    clock.advance(Duration::minutes(30));
    timers.pause(fixed_key()).await.unwrap();
    clock.advance(Duration::minutes(20));
    let stopped = timers.stop(fixed_key()).await.unwrap();

    assert_eq!(stopped.duration, 30);
    assert!(!stopped.is_paused);
    assert_eq!(stopped.end_time, Some(at(9, 50)));
}
