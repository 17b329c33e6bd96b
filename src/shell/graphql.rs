use async_graphql::{EmptySubscription, MergedObject, Schema, SimpleObject};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Extension;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::aggregation::inbound::graphql::AggregationQuery;
use crate::modules::time_entries::use_cases::aggregation::view::{
    ProjectSummary, TimeEntryView, TimerList, UserSummary,
};
use crate::modules::time_entries::use_cases::manual_entry::inbound::graphql::ManualEntryMutation;
use crate::modules::time_entries::use_cases::timer_lifecycle::inbound::graphql::TimerLifecycleMutation;
use crate::shell::auth::Identity;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(AggregationQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(TimerLifecycleMutation, ManualEntryMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    Extension(identity): Extension<Identity>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner().data(identity)).await.into()
}

pub async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/api/v1/gql").finish())
}

#[derive(SimpleObject, Clone)]
pub struct GqlUser {
    pub id: String,
    pub name: String,
}

#[derive(SimpleObject, Clone)]
pub struct GqlProject {
    pub id: String,
    pub name: String,
}

#[derive(SimpleObject, Clone)]
pub struct GqlTask {
    pub id: String,
    pub title: String,
}

#[derive(SimpleObject, Clone)]
pub struct GqlTimeEntry {
    pub id: String,
    pub user_id: String,
    pub project_id: String,
    pub task_id: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    /// Minutes.
    pub duration: i64,
    pub is_paused: bool,
    pub paused_at: Option<DateTime<Utc>>,
    /// Milliseconds.
    pub total_paused_time: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: Option<GqlUser>,
    pub project: Option<GqlProject>,
    pub task: Option<GqlTask>,
}

impl From<TimeEntry> for GqlTimeEntry {
    fn from(entry: TimeEntry) -> Self {
        TimeEntryView::from(entry).into()
    }
}

impl From<TimeEntryView> for GqlTimeEntry {
    fn from(view: TimeEntryView) -> Self {
        let entry = view.entry;
        Self {
            id: entry.id,
            user_id: entry.user_id,
            project_id: entry.project_id,
            task_id: entry.task_id,
            description: entry.description,
            start_time: entry.start_time,
            end_time: entry.end_time,
            duration: entry.duration,
            is_paused: entry.is_paused,
            paused_at: entry.paused_at,
            total_paused_time: entry.total_paused_time,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
            user: view.user.map(|u| GqlUser { id: u.id, name: u.name }),
            project: view.project.map(|p| GqlProject { id: p.id, name: p.name }),
            task: view.task.map(|t| GqlTask {
                id: t.id,
                title: t.title,
            }),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlHours {
    pub key: String,
    pub hours: f64,
}

fn hours(rollup: BTreeMap<String, f64>) -> Vec<GqlHours> {
    rollup
        .into_iter()
        .map(|(key, hours)| GqlHours { key, hours })
        .collect()
}

#[derive(SimpleObject, Clone)]
pub struct GqlTimerList {
    pub timers: Vec<GqlTimeEntry>,
    pub logged_hours: f64,
}

impl From<TimerList> for GqlTimerList {
    fn from(list: TimerList) -> Self {
        Self {
            timers: list.timers.into_iter().map(Into::into).collect(),
            logged_hours: list.logged_hours,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlUserSummary {
    pub user_id: String,
    pub logged_hours: f64,
    pub by_project: Vec<GqlHours>,
    pub by_task: Vec<GqlHours>,
    pub open_timers: Vec<GqlTimeEntry>,
}

impl From<UserSummary> for GqlUserSummary {
    fn from(summary: UserSummary) -> Self {
        Self {
            user_id: summary.user_id,
            logged_hours: summary.logged_hours,
            by_project: hours(summary.by_project),
            by_task: hours(summary.by_task),
            open_timers: summary.open_timers.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlProjectSummary {
    pub project_id: String,
    pub logged_hours: f64,
    pub by_task: Vec<GqlHours>,
    pub by_user: Vec<GqlHours>,
    pub open_timers: Vec<GqlTimeEntry>,
}

impl From<ProjectSummary> for GqlProjectSummary {
    fn from(summary: ProjectSummary) -> Self {
        Self {
            project_id: summary.project_id,
            logged_hours: summary.logged_hours,
            by_task: hours(summary.by_task),
            by_user: hours(summary.by_user),
            open_timers: summary.open_timers.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod graphql_schema_tests {
    use super::*;
    use crate::modules::time_entries::adapters::outbound::directory_in_memory::InMemoryDirectory;
    use crate::modules::time_entries::adapters::outbound::time_entry_store_in_memory::InMemoryTimeEntryStore;
    use crate::tests::fixtures::entries::clock_at;
    use async_graphql::Request;
    use std::sync::Arc;

    fn schema() -> AppSchema {
        build_schema(AppState::new(
            Arc::new(InMemoryTimeEntryStore::new()),
            Arc::new(InMemoryDirectory::new()),
            Arc::new(clock_at(9, 0)),
            "x-user-id".parse().unwrap(),
        ))
    }

    fn as_caller(query: &str) -> Request {
        Request::new(query).data(Identity("user-auth".into()))
    }

    #[tokio::test]
    async fn it_should_start_and_stop_a_timer_for_the_caller() {
        let schema = schema();
        let started = schema
            .execute(as_caller(
                r#"mutation { startTimer(projectId: "p-1", taskId: "t-1") { userId isPaused } }"#,
            ))
            .await;
        assert!(started.errors.is_empty(), "{:?}", started.errors);
        let data = started.data.into_json().unwrap();
        assert_eq!(data["startTimer"]["userId"], "user-auth");

        let stopped = schema
            .execute(as_caller(
                r#"mutation { stopTimer(projectId: "p-1", taskId: "t-1") { duration endTime } }"#,
            ))
            .await;
        assert!(stopped.errors.is_empty(), "{:?}", stopped.errors);
        assert_eq!(stopped.data.into_json().unwrap()["stopTimer"]["duration"], 0);
    }

    #[tokio::test]
    async fn it_should_report_not_found_in_the_error_extensions() {
        let response = schema()
            .execute(as_caller(
                r#"mutation { pauseTimer(projectId: "p-1", taskId: "t-1") { id } }"#,
            ))
            .await;
        assert_eq!(response.errors.len(), 1);
        let code = response.errors[0]
            .extensions
            .as_ref()
            .and_then(|extensions| extensions.get("code").cloned());
        assert_eq!(code, Some(async_graphql::Value::from("NOT_FOUND")));
    }

    #[tokio::test]
    async fn it_should_summarize_logged_time() {
        let schema = schema();
        let logged = schema
            .execute(as_caller(
                r#"mutation { logManualTime(projectId: "p-1", taskId: "t-1",
                    startTime: "2024-01-01T09:00:00Z", endTime: "2024-01-01T10:30:00Z") { id } }"#,
            ))
            .await;
        assert!(logged.errors.is_empty(), "{:?}", logged.errors);

        let summary = schema
            .execute(as_caller(
                r#"{ userSummary(userId: "user-auth") { loggedHours byTask { key hours } } }"#,
            ))
            .await;
        let data = summary.data.into_json().unwrap();
        assert_eq!(data["userSummary"]["loggedHours"], 1.5);
        assert_eq!(data["userSummary"]["byTask"][0]["key"], "t-1");
    }
}
