use axum::http::HeaderName;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use time_tracking::shared::core::primitives::SystemClock;
use time_tracking::shell::config::AppConfig;
use time_tracking::shell::http::{API_PREFIX, router};
use time_tracking::shell::state::AppState;
use time_tracking::shell::wiring::backends;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::load()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.filter));
    fmt().with_env_filter(filter).init();

    let backends = backends(&config).await?;

    let user_header = HeaderName::try_from(config.auth.user_header.as_str())?;
    let state = AppState::new(
        backends.store,
        backends.directory,
        Arc::new(SystemClock),
        user_header,
    );

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("REST endpoint: http://{}{}", addr, API_PREFIX);
    info!("GraphQL endpoint: http://{}{}/gql", addr, API_PREFIX);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
