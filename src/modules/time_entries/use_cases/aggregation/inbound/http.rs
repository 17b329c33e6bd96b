use axum::{
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::Response,
};
use serde::Deserialize;

use crate::shell::response::{ApiError, success};
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub expand: Option<bool>,
}

pub async fn by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params?;
    let list = state
        .queries
        .entries_for_user(&user_id, params.expand.unwrap_or(false))
        .await?;
    Ok(success(StatusCode::OK, list))
}

pub async fn by_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params?;
    let list = state
        .queries
        .entries_for_project(&project_id, params.expand.unwrap_or(false))
        .await?;
    Ok(success(StatusCode::OK, list))
}

pub async fn user_summary(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Response, ApiError> {
    let summary = state.queries.user_summary(&user_id).await?;
    Ok(success(StatusCode::OK, summary))
}

pub async fn project_summary(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Response, ApiError> {
    let summary = state.queries.project_summary(&project_id).await?;
    Ok(success(StatusCode::OK, summary))
}
