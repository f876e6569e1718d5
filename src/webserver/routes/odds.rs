/// Odds endpoint: read-through cached match-winner odds per fixture
use axum::{
    extract::{Path, Query, State},
    response::Response,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::cache::odds_key;
use crate::errors::ProxyError;
use crate::transform;
use crate::types::OddsQuote;
use crate::webserver::routes::parse_fixture_id;
use crate::webserver::state::AppState;
use crate::webserver::utils::{error_response, success_response};

/// Bookmakers returned when the caller does not ask for a specific count
const DEFAULT_BOOKMAKERS: usize = 3;

#[derive(Debug, Deserialize)]
pub struct OddsQuery {
    pub bookmakers: Option<usize>,
}

#[derive(Debug, Serialize)]
struct OddsListResponse {
    odds: Vec<OddsQuote>,
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/odds/:fixture_id", get(get_odds))
}

/// GET /api/odds/:fixture_id?bookmakers=N
async fn get_odds(
    State(state): State<Arc<AppState>>,
    Path(fixture_id): Path<String>,
    Query(query): Query<OddsQuery>,
) -> Response {
    let fixture_id = match parse_fixture_id(&fixture_id) {
        Ok(id) => id,
        Err(err) => return error_response(&err),
    };
    let max_bookmakers = query.bookmakers.unwrap_or(DEFAULT_BOOKMAKERS);

    match fetch_odds_cached(&state, fixture_id, max_bookmakers).await {
        Ok(odds) => success_response(OddsListResponse { odds }),
        Err(err) => error_response(&err),
    }
}

/// Read-through: cache hit short-circuits; a miss fetches, transforms and
/// populates the odds cache. Upstream failures never populate the cache, so
/// the next request retries unconditionally.
pub async fn fetch_odds_cached(
    state: &AppState,
    fixture_id: u64,
    max_bookmakers: usize,
) -> Result<Vec<OddsQuote>, ProxyError> {
    let key = odds_key(fixture_id, max_bookmakers);

    if let Some(odds) = state.odds_cache.get(&key) {
        log::debug!("Odds cache hit for {}", key);
        return Ok(odds);
    }

    log::info!("Fetching odds for fixture {}", fixture_id);
    let raw = state.api.fetch_odds(fixture_id).await?;
    let odds = transform::to_odds_quotes(&raw, max_bookmakers);

    state.odds_cache.insert(key, odds.clone());
    Ok(odds)
}
