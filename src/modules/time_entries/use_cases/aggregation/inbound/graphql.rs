use async_graphql::{Context, Object, Result as GqlResult};

use crate::shell::graphql::{GqlProjectSummary, GqlTimerList, GqlUserSummary};
use crate::shell::response::graphql_error;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct AggregationQuery;

#[Object]
impl AggregationQuery {
    async fn timers_by_user(
        &self,
        context: &Context<'_>,
        user_id: String,
        expand: Option<bool>,
    ) -> GqlResult<GqlTimerList> {
        let state = context.data_unchecked::<AppState>();
        let list = state
            .queries
            .entries_for_user(&user_id, expand.unwrap_or(false))
            .await
            .map_err(graphql_error)?;
        Ok(list.into())
    }

    async fn timers_by_project(
        &self,
        context: &Context<'_>,
        project_id: String,
        expand: Option<bool>,
    ) -> GqlResult<GqlTimerList> {
        let state = context.data_unchecked::<AppState>();
        let list = state
            .queries
            .entries_for_project(&project_id, expand.unwrap_or(false))
            .await
            .map_err(graphql_error)?;
        Ok(list.into())
    }

    async fn user_summary(&self, context: &Context<'_>, user_id: String) -> GqlResult<GqlUserSummary> {
        let state = context.data_unchecked::<AppState>();
        let summary = state.queries.user_summary(&user_id).await.map_err(graphql_error)?;
        Ok(summary.into())
    }

    async fn project_summary(
        &self,
        context: &Context<'_>,
        project_id: String,
    ) -> GqlResult<GqlProjectSummary> {
        let state = context.data_unchecked::<AppState>();
        let summary = state
            .queries
            .project_summary(&project_id)
            .await
            .map_err(graphql_error)?;
        Ok(summary.into())
    }
}
