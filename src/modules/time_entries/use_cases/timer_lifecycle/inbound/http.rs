use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Response,
};
use serde::Deserialize;

use crate::modules::time_entries::core::time_entry::TimerKey;
use crate::modules::time_entries::use_cases::timer_lifecycle::command::StartTimer;
use crate::shell::auth::Identity;
use crate::shell::response::{ApiError, success};
use crate::shell::state::AppState;

/// Body shared by every lifecycle route. `userId` defaults to the caller.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerBody {
    pub user_id: Option<String>,
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub task_id: String,
    pub description: Option<String>,
}

impl TimerBody {
    fn key(self, identity: &Identity) -> (TimerKey, Option<String>) {
        let user_id = identity.or_requested(self.user_id);
        (TimerKey::new(user_id, self.project_id, self.task_id), self.description)
    }
}

pub async fn start(
    State(state): State<AppState>,
    identity: Identity,
    body: Result<Json<TimerBody>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = body?;
    let (key, description) = body.key(&identity);
    let entry = state.timers.start(StartTimer { key, description }).await?;
    Ok(success(StatusCode::OK, entry))
}

pub async fn pause(
    State(state): State<AppState>,
    identity: Identity,
    body: Result<Json<TimerBody>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = body?;
    let entry = state.timers.pause(body.key(&identity).0).await?;
    Ok(success(StatusCode::OK, entry))
}

pub async fn resume(
    State(state): State<AppState>,
    identity: Identity,
    body: Result<Json<TimerBody>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = body?;
    let entry = state.timers.resume(body.key(&identity).0).await?;
    Ok(success(StatusCode::OK, entry))
}

pub async fn stop(
    State(state): State<AppState>,
    identity: Identity,
    body: Result<Json<TimerBody>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = body?;
    let entry = state.timers.stop(body.key(&identity).0).await?;
    Ok(success(StatusCode::OK, entry))
}
