// Identity of the caller, as asserted by the upstream auth provider through a header.

use crate::shell::response::ApiError;
use crate::shell::state::AppState;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity(pub String);

impl Identity {
    /// `requested` when it names someone, the caller otherwise.
    pub fn or_requested(&self, requested: Option<String>) -> String {
        requested
            .filter(|user_id| !user_id.trim().is_empty())
            .unwrap_or_else(|| self.0.clone())
    }
}

/// Available on routes behind `identity_middleware`.
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .ok_or(ApiError::Unauthenticated)
    }
}

pub async fn identity_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user_id = request
        .headers()
        .get(&state.user_header)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string);

    match user_id {
        Some(user_id) => {
            debug!(%user_id, "request authenticated");
            request.extensions_mut().insert(Identity(user_id));
            Ok(next.run(request).await)
        }
        None => {
            warn!(header = %state.user_header, "missing authenticated user header");
            Err(ApiError::Unauthenticated)
        }
    }
}
