use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use crate::modules::time_entries::use_cases::manual_entry::command::{LogManualTime, UpdateTimeEntry};
use crate::shell::auth::Identity;
use crate::shell::response::{ApiError, success};
use crate::shell::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogManualTimeBody {
    #[serde(alias = "user")]
    pub user_id: Option<String>,
    #[serde(default, alias = "project")]
    pub project_id: String,
    #[serde(default, alias = "task")]
    pub task_id: String,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTimeEntryBody {
    pub duration: Option<i64>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
}

pub async fn log(
    State(state): State<AppState>,
    identity: Identity,
    body: Result<Json<LogManualTimeBody>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = body?;
    let command = LogManualTime {
        user_id: identity.or_requested(body.user_id),
        project_id: body.project_id,
        task_id: body.task_id,
        start_time: body.start_time,
        end_time: body.end_time,
        description: body.description,
    };
    let entry = state.manual_entries.log(command).await?;
    Ok(success(StatusCode::CREATED, entry))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateTimeEntryBody>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = body?;
    let command = UpdateTimeEntry {
        id,
        duration: body.duration,
        date: body.date,
        description: body.description,
    };
    let entry = state.manual_entries.update(command).await?;
    Ok(success(StatusCode::OK, entry))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response, ApiError> {
    state.manual_entries.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
