// Read side: entry listings, optional display join, and hour rollups.
//
// Responsibilities
// - Read straight from the Time Entry Store, so results are never stale.
// - Expansion is best effort. A failing directory leaves entries unexpanded.

use crate::modules::time_entries::adapters::outbound::directory::ReferenceDirectory;
use crate::modules::time_entries::adapters::outbound::time_entry_store::{EntryFilter, TimeEntryStore};
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::aggregation::rollup::{hours_by, logged_hours};
use crate::modules::time_entries::use_cases::aggregation::view::{
    ProjectSummary, TimeEntryView, TimerList, UserSummary,
};
use crate::modules::time_entries::use_cases::errors::ApplicationError;
use std::sync::Arc;
use tracing::warn;

pub struct TimeEntryQueryHandler {
    store: Arc<dyn TimeEntryStore>,
    directory: Arc<dyn ReferenceDirectory>,
}

impl TimeEntryQueryHandler {
    pub fn new(store: Arc<dyn TimeEntryStore>, directory: Arc<dyn ReferenceDirectory>) -> Self {
        Self { store, directory }
    }

    pub async fn entries_for_user(&self, user_id: &str, expand: bool) -> Result<TimerList, ApplicationError> {
        self.entries(EntryFilter::User(user_id.to_string()), expand).await
    }

    pub async fn entries_for_project(
        &self,
        project_id: &str,
        expand: bool,
    ) -> Result<TimerList, ApplicationError> {
        self.entries(EntryFilter::Project(project_id.to_string()), expand).await
    }

    pub async fn user_summary(&self, user_id: &str) -> Result<UserSummary, ApplicationError> {
        let entries = self.store.list(&EntryFilter::User(user_id.to_string())).await?;
        Ok(UserSummary {
            user_id: user_id.to_string(),
            logged_hours: logged_hours(&entries),
            by_project: hours_by(&entries, |entry| entry.project_id.as_str()),
            by_task: hours_by(&entries, |entry| entry.task_id.as_str()),
            open_timers: open_timers(entries),
        })
    }

    pub async fn project_summary(&self, project_id: &str) -> Result<ProjectSummary, ApplicationError> {
        let entries = self.store.list(&EntryFilter::Project(project_id.to_string())).await?;
        Ok(ProjectSummary {
            project_id: project_id.to_string(),
            logged_hours: logged_hours(&entries),
            by_task: hours_by(&entries, |entry| entry.task_id.as_str()),
            by_user: hours_by(&entries, |entry| entry.user_id.as_str()),
            open_timers: open_timers(entries),
        })
    }

    async fn entries(&self, filter: EntryFilter, expand: bool) -> Result<TimerList, ApplicationError> {
        let entries = self.store.list(&filter).await?;
        let logged_hours = logged_hours(&entries);
        let timers = if expand {
            match self.expand(&entries).await {
                Ok(views) => views,
                Err(error) => {
                    warn!(%error, ?filter, "reference lookup failed, returning unexpanded entries");
                    entries.into_iter().map(TimeEntryView::from).collect()
                }
            }
        } else {
            entries.into_iter().map(TimeEntryView::from).collect()
        };
        Ok(TimerList { timers, logged_hours })
    }

    async fn expand(&self, entries: &[TimeEntry]) -> anyhow::Result<Vec<TimeEntryView>> {
        let mut views = Vec::with_capacity(entries.len());
        for entry in entries {
            views.push(TimeEntryView {
                user: self.directory.user(&entry.user_id).await?,
                project: self.directory.project(&entry.project_id).await?,
                task: self.directory.task(&entry.task_id).await?,
                entry: entry.clone(),
            });
        }
        Ok(views)
    }
}

fn open_timers(entries: Vec<TimeEntry>) -> Vec<TimeEntry> {
    entries.into_iter().filter(TimeEntry::is_open).collect()
}

#[cfg(test)]
mod time_entry_query_handler_tests {
    use super::*;
    use crate::modules::time_entries::adapters::outbound::directory_in_memory::InMemoryDirectory;
    use crate::modules::time_entries::adapters::outbound::time_entry_store::StoreError;
    use crate::modules::time_entries::adapters::outbound::time_entry_store_in_memory::InMemoryTimeEntryStore;
    use crate::modules::time_entries::core::time_entry::TimerKey;
    use crate::tests::fixtures::entries::{at, completed_entry, running_entry, with_duration};
    use rstest::{fixture, rstest};

    async fn seed(store: &InMemoryTimeEntryStore) {
        let design = TimerKey::new("user-1", "project-1", "task-design");
        let build = TimerKey::new("user-1", "project-2", "task-build");
        let other = TimerKey::new("user-2", "project-1", "task-design");
        for entry in [
            with_duration(completed_entry("te-1", design, at(8, 0), at(9, 0)), 30),
            with_duration(completed_entry("te-2", build.clone(), at(9, 0), at(10, 0)), 45),
            with_duration(completed_entry("te-3", other, at(10, 0), at(11, 0)), 15),
        ] {
            store.insert(entry).await.unwrap();
        }
        let mut open = running_entry(at(11, 0));
        open.id = "te-open".into();
        open.user_id = build.user_id;
        open.project_id = build.project_id;
        open.task_id = build.task_id;
        store.insert(open).await.unwrap();
    }

    #[fixture]
    async fn handler() -> TimeEntryQueryHandler {
        let store = Arc::new(InMemoryTimeEntryStore::new());
        seed(&store).await;
        let directory = InMemoryDirectory::new();
        directory.add_user("user-1", "Ada").await;
        directory.add_project("project-1", "Website").await;
        directory.add_task("task-design", "Design").await;
        TimeEntryQueryHandler::new(store, Arc::new(directory))
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_a_users_entries_with_logged_hours(#[future] handler: TimeEntryQueryHandler) {
        let list = handler.await.entries_for_user("user-1", false).await.unwrap();
        assert_eq!(list.timers.len(), 3);
        assert_eq!(list.logged_hours, 1.3);
        assert_eq!(list.timers[0].entry.id, "te-open");
        assert!(list.timers.iter().all(|view| view.user.is_none()));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_a_projects_entries(#[future] handler: TimeEntryQueryHandler) {
        let list = handler.await.entries_for_project("project-1", false).await.unwrap();
        let ids: Vec<_> = list.timers.iter().map(|view| view.entry.id.as_str()).collect();
        assert_eq!(ids, vec!["te-3", "te-1"]);
        assert_eq!(list.logged_hours, 0.8);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_join_display_fields_when_expanded(#[future] handler: TimeEntryQueryHandler) {
        let list = handler.await.entries_for_project("project-1", true).await.unwrap();
        let first = list.timers.iter().find(|view| view.entry.id == "te-1").unwrap();
        assert_eq!(first.user.as_ref().map(|u| u.name.as_str()), Some("Ada"));
        assert_eq!(first.project.as_ref().map(|p| p.name.as_str()), Some("Website"));
        assert_eq!(first.task.as_ref().map(|t| t.title.as_str()), Some("Design"));
        let unknown_user = list.timers.iter().find(|view| view.entry.id == "te-3").unwrap();
        assert_eq!(unknown_user.user, None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fall_back_to_unexpanded_entries_when_the_directory_fails() {
        let store = Arc::new(InMemoryTimeEntryStore::new());
        seed(&store).await;
        let mut directory = InMemoryDirectory::new();
        directory.toggle_offline();
        let handler = TimeEntryQueryHandler::new(store, Arc::new(directory));
        let list = handler.entries_for_user("user-1", true).await.unwrap();
        assert_eq!(list.timers.len(), 3);
        assert!(list.timers.iter().all(|view| view.task.is_none()));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_summarize_a_user(#[future] handler: TimeEntryQueryHandler) {
        let summary = handler.await.user_summary("user-1").await.unwrap();
        assert_eq!(summary.logged_hours, 1.3);
        assert_eq!(summary.by_project.get("project-1"), Some(&0.5));
        assert_eq!(summary.by_project.get("project-2"), Some(&0.8));
        assert_eq!(summary.by_task.get("task-build"), Some(&0.8));
        assert_eq!(summary.open_timers.len(), 1);
        assert_eq!(summary.open_timers[0].id, "te-open");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_summarize_a_project(#[future] handler: TimeEntryQueryHandler) {
        let summary = handler.await.project_summary("project-1").await.unwrap();
        assert_eq!(summary.logged_hours, 0.8);
        assert_eq!(summary.by_user.get("user-1"), Some(&0.5));
        assert_eq!(summary.by_user.get("user-2"), Some(&0.3));
        assert_eq!(summary.by_task.get("task-design"), Some(&0.8));
        assert!(summary.open_timers.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_an_empty_list_for_an_unknown_user(#[future] handler: TimeEntryQueryHandler) {
        let list = handler.await.entries_for_user("user-unknown", true).await.unwrap();
        assert!(list.timers.is_empty());
        assert_eq!(list.logged_hours, 0.0);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_surface_an_offline_store() {
        let mut store = InMemoryTimeEntryStore::new();
        store.toggle_offline();
        let handler = TimeEntryQueryHandler::new(Arc::new(store), Arc::new(InMemoryDirectory::new()));
        let result = handler.user_summary("user-1").await;
        assert!(matches!(
            result,
            Err(ApplicationError::Persistence(StoreError::Backend(_)))
        ));
    }
}
