// Response envelope shared by every REST route.
//
// Success: {"status":"success","data":...}
// Failure: {"status":"fail","message":...} for 4xx, {"status":"error","message":...} for 5xx.

use crate::modules::time_entries::use_cases::errors::ApplicationError;
use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use tracing::error;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    pub data: T,
}

pub fn success<T: Serialize>(code: StatusCode, data: T) -> Response {
    (
        code,
        Json(ApiResponse {
            status: "success",
            data,
        }),
    )
        .into_response()
}

#[derive(Debug)]
pub enum ApiError {
    Unauthenticated,
    BadRequest(String),
    Application(ApplicationError),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) | ApiError::Application(ApplicationError::Validation(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Application(ApplicationError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Application(ApplicationError::Persistence(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(error: ApplicationError) -> Self {
        ApiError::Application(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.status_code();
        let message = match self {
            ApiError::Unauthenticated => "Authentication required".to_string(),
            ApiError::BadRequest(message) => message,
            ApiError::Application(ApplicationError::Persistence(e)) => {
                error!(error = %e, "request failed on persistence");
                "Internal server error".to_string()
            }
            ApiError::Application(e) => e.to_string(),
        };
        let status = if code.is_server_error() { "error" } else { "fail" };
        (code, Json(json!({ "status": status, "message": message }))).into_response()
    }
}

/// GraphQL counterpart of the REST mapping; the status lands in `extensions.code`.
pub fn graphql_error(error: ApplicationError) -> async_graphql::Error {
    use async_graphql::ErrorExtensions;

    let (code, message) = match &error {
        ApplicationError::Validation(m) => ("BAD_REQUEST", m.clone()),
        ApplicationError::NotFound(m) => ("NOT_FOUND", m.clone()),
        ApplicationError::Persistence(e) => {
            error!(error = %e, "graphql request failed on persistence");
            ("INTERNAL_SERVER_ERROR", "Internal server error".to_string())
        }
    };
    async_graphql::Error::new(message).extend_with(|_, extensions| extensions.set("code", code))
}
