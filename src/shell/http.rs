use axum::{
    Extension, Json, Router, middleware,
    routing::{get, patch, post},
};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::time_entries::use_cases::aggregation::inbound::http as aggregation_http;
use crate::modules::time_entries::use_cases::manual_entry::inbound::http as manual_entry_http;
use crate::modules::time_entries::use_cases::timer_lifecycle::inbound::http as timer_http;
use crate::shell::auth::identity_middleware;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub const API_PREFIX: &str = "/api/v1";

/// Routes that require an authenticated caller.
fn api(state: AppState) -> Router {
    Router::new()
        .route("/timers/start", patch(timer_http::start))
        .route("/timers/stop", patch(timer_http::stop))
        .route("/timers/pause", patch(timer_http::pause))
        .route("/timers/resume", patch(timer_http::resume))
        .route("/timers/log", post(manual_entry_http::log))
        .route("/timers/user/{user_id}", get(aggregation_http::by_user))
        .route("/timers/user/{user_id}/summary", get(aggregation_http::user_summary))
        .route("/timers/project/{project_id}", get(aggregation_http::by_project))
        .route(
            "/timers/project/{project_id}/summary",
            get(aggregation_http::project_summary),
        )
        .route(
            "/timers/{id}",
            patch(manual_entry_http::update).delete(manual_entry_http::delete),
        )
        .route("/gql", post(graphql))
        .layer(Extension(build_schema(state.clone())))
        .route_layer(middleware::from_fn_with_state(state.clone(), identity_middleware))
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "success", "data": { "healthy": true } }))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/gql", get(graphiql))
        .nest(API_PREFIX, api(state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
