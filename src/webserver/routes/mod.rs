use crate::webserver::state::AppState;
use axum::{routing::get, Router};
use std::sync::Arc;

pub mod live;
pub mod odds;
pub mod status;

/// Assemble the full route tree
///
/// Four routes are the entire public contract: /health plus the three
/// /api data endpoints.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(status::health_check))
        .nest("/api", api_routes())
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new().merge(odds::routes()).merge(live::routes())
}

/// Parse a fixture ID path segment, rejecting malformed requests before any
/// cache or upstream access
pub(crate) fn parse_fixture_id(raw: &str) -> Result<u64, crate::errors::ProxyError> {
    raw.parse::<u64>()
        .map_err(|_| crate::errors::ProxyError::InvalidRequest(format!("Invalid fixture ID: {}", raw)))
}
