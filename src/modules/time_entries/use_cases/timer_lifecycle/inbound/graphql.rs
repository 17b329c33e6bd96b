use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::time_entries::core::time_entry::TimerKey;
use crate::modules::time_entries::use_cases::timer_lifecycle::command::StartTimer;
use crate::shell::auth::Identity;
use crate::shell::graphql::GqlTimeEntry;
use crate::shell::response::graphql_error;
use crate::shell::state::AppState;

fn timer_key(
    context: &Context<'_>,
    user_id: Option<String>,
    project_id: String,
    task_id: String,
) -> GqlResult<TimerKey> {
    let identity = context.data::<Identity>()?;
    Ok(TimerKey::new(identity.or_requested(user_id), project_id, task_id))
}

#[derive(Default)]
pub struct TimerLifecycleMutation;

#[Object]
impl TimerLifecycleMutation {
    async fn start_timer(
        &self,
        context: &Context<'_>,
        user_id: Option<String>,
        project_id: String,
        task_id: String,
        description: Option<String>,
    ) -> GqlResult<GqlTimeEntry> {
        let state = context.data_unchecked::<AppState>();
        let key = timer_key(context, user_id, project_id, task_id)?;
        let entry = state
            .timers
            .start(StartTimer { key, description })
            .await
            .map_err(graphql_error)?;
        Ok(entry.into())
    }

    async fn pause_timer(
        &self,
        context: &Context<'_>,
        user_id: Option<String>,
        project_id: String,
        task_id: String,
    ) -> GqlResult<GqlTimeEntry> {
        let state = context.data_unchecked::<AppState>();
        let key = timer_key(context, user_id, project_id, task_id)?;
        let entry = state.timers.pause(key).await.map_err(graphql_error)?;
        Ok(entry.into())
    }

    async fn resume_timer(
        &self,
        context: &Context<'_>,
        user_id: Option<String>,
        project_id: String,
        task_id: String,
    ) -> GqlResult<GqlTimeEntry> {
        let state = context.data_unchecked::<AppState>();
        let key = timer_key(context, user_id, project_id, task_id)?;
        let entry = state.timers.resume(key).await.map_err(graphql_error)?;
        Ok(entry.into())
    }

    async fn stop_timer(
        &self,
        context: &Context<'_>,
        user_id: Option<String>,
        project_id: String,
        task_id: String,
    ) -> GqlResult<GqlTimeEntry> {
        let state = context.data_unchecked::<AppState>();
        let key = timer_key(context, user_id, project_id, task_id)?;
        let entry = state.timers.stop(key).await.map_err(graphql_error)?;
        Ok(entry.into())
    }
}
