use async_graphql::{Context, ID, Object, Result as GqlResult};
use chrono::{DateTime, NaiveDate, Utc};

use crate::modules::time_entries::use_cases::manual_entry::command::{LogManualTime, UpdateTimeEntry};
use crate::shell::auth::Identity;
use crate::shell::graphql::GqlTimeEntry;
use crate::shell::response::graphql_error;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ManualEntryMutation;

#[Object]
impl ManualEntryMutation {
    #[allow(clippy::too_many_arguments)]
    async fn log_manual_time(
        &self,
        context: &Context<'_>,
        user_id: Option<String>,
        project_id: String,
        task_id: String,
        start_time: Option<DateTime<Utc>>,
        end_time: Option<DateTime<Utc>>,
        description: Option<String>,
    ) -> GqlResult<GqlTimeEntry> {
        let state = context.data_unchecked::<AppState>();
        let identity = context.data::<Identity>()?;
        let command = LogManualTime {
            user_id: identity.or_requested(user_id),
            project_id,
            task_id,
            start_time,
            end_time,
            description,
        };
        let entry = state.manual_entries.log(command).await.map_err(graphql_error)?;
        Ok(entry.into())
    }

    async fn update_time_entry(
        &self,
        context: &Context<'_>,
        id: ID,
        duration: Option<i64>,
        date: Option<NaiveDate>,
        description: Option<String>,
    ) -> GqlResult<GqlTimeEntry> {
        let state = context.data_unchecked::<AppState>();
        let command = UpdateTimeEntry {
            id: id.to_string(),
            duration,
            date,
            description,
        };
        let entry = state.manual_entries.update(command).await.map_err(graphql_error)?;
        Ok(entry.into())
    }

    async fn delete_time_entry(&self, context: &Context<'_>, id: ID) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        state.manual_entries.delete(&id).await.map_err(graphql_error)?;
        Ok(id)
    }
}
