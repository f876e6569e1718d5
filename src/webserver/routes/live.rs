/// Live-state endpoints: single fixture lookup and batch resolution
use axum::{
    extract::{Path, State},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::cache::live_key;
use crate::errors::ProxyError;
use crate::transform;
use crate::types::LiveMatch;
use crate::webserver::routes::parse_fixture_id;
use crate::webserver::state::AppState;
use crate::webserver::utils::{error_response, success_response};

#[derive(Debug, Serialize)]
struct BatchResponse {
    matches: Vec<LiveMatch>,
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        // Static /live/batch takes priority over the :fixture_id capture
        .route("/live/batch", post(post_live_batch))
        .route("/live/:fixture_id", get(get_live))
}

/// GET /api/live/:fixture_id
async fn get_live(State(state): State<Arc<AppState>>, Path(fixture_id): Path<String>) -> Response {
    let fixture_id = match parse_fixture_id(&fixture_id) {
        Ok(id) => id,
        Err(err) => return error_response(&err),
    };

    match fetch_live_cached(&state, fixture_id).await {
        Ok(live) => success_response(live),
        Err(err) => error_response(&err),
    }
}

/// POST /api/live/batch with body {"fixtureIds": [int, ...]}
async fn post_live_batch(State(state): State<Arc<AppState>>, Json(body): Json<Value>) -> Response {
    let ids = match parse_batch_ids(&body) {
        Ok(ids) => ids,
        Err(err) => return error_response(&err),
    };

    match resolve_batch(&state, &ids).await {
        Ok(matches) => success_response(BatchResponse { matches }),
        Err(err) => error_response(&err),
    }
}

/// Read-through for one fixture's live state
///
/// An upstream response with no matching fixture is a distinct not-found
/// outcome, different from an upstream call failure; neither populates the
/// cache.
pub async fn fetch_live_cached(state: &AppState, fixture_id: u64) -> Result<LiveMatch, ProxyError> {
    let key = live_key(fixture_id);

    if let Some(live) = state.live_cache.get(&key) {
        log::debug!("Live cache hit for {}", key);
        return Ok(live);
    }

    log::info!("Fetching live data for fixture {}", fixture_id);
    let raw = state.api.fetch_fixture(fixture_id).await?;

    let live = transform::first_live_match(&raw).ok_or(ProxyError::FixtureNotFound)?;
    state.live_cache.insert(key, live.clone());
    Ok(live)
}

/// Resolve live state for a set of fixtures, reusing cached entries
///
/// Partitions the requested IDs by cache probe, issues at most one upstream
/// call covering the whole uncached subset, and returns cache hits (in probe
/// order) followed by fresh fixtures (in upstream response order). Callers
/// must not assume their original ID ordering. If the upstream call fails
/// the entire batch fails; cached hits are not returned on that branch.
pub async fn resolve_batch(
    state: &AppState,
    fixture_ids: &[u64],
) -> Result<Vec<LiveMatch>, ProxyError> {
    let mut hits = Vec::new();
    let mut uncached = Vec::new();

    for &id in fixture_ids {
        match state.live_cache.get(&live_key(id)) {
            Some(live) => hits.push(live),
            None => uncached.push(id),
        }
    }

    if uncached.is_empty() {
        log::debug!("Batch of {} fixtures served entirely from cache", hits.len());
        return Ok(hits);
    }

    log::info!(
        "Fetching live data for {} of {} requested fixtures",
        uncached.len(),
        fixture_ids.len()
    );
    let raw = state.api.fetch_fixtures(&uncached).await?;

    // Each fresh fixture is cached individually so its TTL runs from this
    // call, independent of the other entries in the batch
    let fresh = transform::to_live_matches(&raw);
    for live in &fresh {
        state.live_cache.insert(live_key(live.fixture_id), live.clone());
    }

    hits.extend(fresh);
    Ok(hits)
}

/// Validate the batch request body by hand
///
/// Returns 400-class errors for a missing, non-array, or empty
/// `fixtureIds`, and for elements that are not non-negative integers -
/// all before any cache or upstream access.
fn parse_batch_ids(body: &Value) -> Result<Vec<u64>, ProxyError> {
    let ids = body
        .get("fixtureIds")
        .and_then(Value::as_array)
        .filter(|ids| !ids.is_empty())
        .ok_or_else(|| ProxyError::InvalidRequest("fixtureIds array is required".to_string()))?;

    ids.iter()
        .map(|id| {
            id.as_u64().ok_or_else(|| {
                ProxyError::InvalidRequest(format!("Invalid fixture ID in fixtureIds: {}", id))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::football::{
        FixtureEntry, FixtureInfo, FixtureStatus, FixturesResponse, Goals, TeamInfo, Teams,
    };
    use crate::apis::mock::MockFootballApi;
    use axum::http::StatusCode;
    use serde_json::json;
    use std::sync::atomic::Ordering;

    fn fixture(id: u64) -> FixtureEntry {
        FixtureEntry {
            fixture: FixtureInfo {
                id,
                status: FixtureStatus {
                    short: "1H".to_string(),
                    elapsed: Some(30),
                },
            },
            goals: Goals {
                home: Some(2),
                away: Some(1),
            },
            teams: Teams {
                home: TeamInfo {
                    name: Some("Home FC".to_string()),
                },
                away: TeamInfo {
                    name: Some("Away FC".to_string()),
                },
            },
        }
    }

    fn fixtures(ids: &[u64]) -> FixturesResponse {
        FixturesResponse {
            response: ids.iter().map(|&id| fixture(id)).collect(),
        }
    }

    fn state_with(
        mock: MockFootballApi,
        live_ttl_secs: u64,
    ) -> (Arc<AppState>, Arc<MockFootballApi>) {
        let api = Arc::new(mock);
        let state = Arc::new(AppState::for_tests(api.clone(), 3600, live_ttl_secs));
        (state, api)
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_single_live_cached_within_ttl() {
        let (state, api) = state_with(MockFootballApi::with_fixtures(fixtures(&[7])), 30);

        fetch_live_cached(&state, 7).await.unwrap();
        fetch_live_cached(&state, 7).await.unwrap();

        assert_eq!(api.fixture_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_single_live_refetched_after_ttl() {
        // Zero TTL: every entry is already expired on the next read
        let (state, api) = state_with(MockFootballApi::with_fixtures(fixtures(&[7])), 0);

        fetch_live_cached(&state, 7).await.unwrap();
        fetch_live_cached(&state, 7).await.unwrap();

        assert_eq!(api.fixture_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_single_live_not_found() {
        let (state, _api) = state_with(MockFootballApi::with_fixtures(fixtures(&[])), 30);

        let response = get_live(State(state.clone()), Path("7".to_string())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Fixture not found");
        // A not-found outcome never populates the cache
        assert!(state.live_cache.is_empty());
    }

    #[tokio::test]
    async fn test_single_live_upstream_503_maps_to_500() {
        let (state, _api) = state_with(MockFootballApi::failing_with(503), 30);

        let response = get_live(State(state), Path("7".to_string())).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "API Football returned 503");
    }

    #[tokio::test]
    async fn test_batch_partial_cache_fetches_only_uncached() {
        let (state, api) = state_with(MockFootballApi::with_fixtures(fixtures(&[3])), 30);

        // Seed 1 and 2 into the cache
        for id in [1u64, 2] {
            let m = transform::to_live_matches(&fixtures(&[id]))
                .pop()
                .unwrap();
            state.live_cache.insert(live_key(id), m);
        }

        let matches = resolve_batch(&state, &[1, 2, 3]).await.unwrap();

        assert_eq!(api.batch_calls.load(Ordering::SeqCst), 1);
        assert_eq!(api.batch_requests.lock().unwrap()[0], vec![3]);
        assert_eq!(matches.len(), 3);
        // Hits in probe order, then fresh fixtures in upstream order
        let ids: Vec<u64> = matches.iter().map(|m| m.fixture_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_batch_all_cached_makes_no_upstream_call() {
        let (state, api) = state_with(MockFootballApi::new(), 30);

        for id in [1u64, 2] {
            let m = transform::to_live_matches(&fixtures(&[id]))
                .pop()
                .unwrap();
            state.live_cache.insert(live_key(id), m);
        }

        let matches = resolve_batch(&state, &[1, 2]).await.unwrap();

        assert_eq!(matches.len(), 2);
        assert_eq!(api.batch_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_batch_populates_cache_per_fixture() {
        let (state, api) = state_with(MockFootballApi::with_fixtures(fixtures(&[4, 5])), 30);

        resolve_batch(&state, &[4, 5]).await.unwrap();

        // Both fixtures now serve from cache without another upstream call
        let matches = resolve_batch(&state, &[4, 5]).await.unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(api.batch_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_batch_upstream_failure_fails_whole_request() {
        let (state, _api) = state_with(MockFootballApi::failing_with(500), 30);

        // One fixture is cached, but there is no partial-success path
        let m = transform::to_live_matches(&fixtures(&[1])).pop().unwrap();
        state.live_cache.insert(live_key(1), m);

        let err = resolve_batch(&state, &[1, 2]).await.unwrap_err();
        assert!(matches!(err, ProxyError::UpstreamStatus(500)));
    }

    #[tokio::test]
    async fn test_batch_request_validation() {
        assert!(parse_batch_ids(&json!({})).is_err());
        assert!(parse_batch_ids(&json!({ "fixtureIds": [] })).is_err());
        assert!(parse_batch_ids(&json!({ "fixtureIds": "5" })).is_err());
        assert!(parse_batch_ids(&json!({ "fixtureIds": [1, "two"] })).is_err());
        assert_eq!(
            parse_batch_ids(&json!({ "fixtureIds": [1, 2, 3] })).unwrap(),
            vec![1, 2, 3]
        );
    }

    #[tokio::test]
    async fn test_batch_handler_rejects_bad_bodies_with_400() {
        let (state, api) = state_with(MockFootballApi::new(), 30);

        for body in [json!({ "fixtureIds": [] }), json!({ "fixtureIds": "5" })] {
            let response = post_live_batch(State(state.clone()), Json(body)).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);

            let body = body_json(response).await;
            assert!(body["error"].is_string());
        }

        assert_eq!(api.batch_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_live_response_wire_shape() {
        let (state, _api) = state_with(MockFootballApi::with_fixtures(fixtures(&[9])), 30);

        let response = get_live(State(state), Path("9".to_string())).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["fixtureId"], 9);
        assert_eq!(body["status"], "1H");
        assert_eq!(body["elapsed"], 30);
        assert_eq!(body["scores"]["home"], 2);
        assert_eq!(body["scores"]["away"], 1);
        assert_eq!(body["teams"]["home"], "Home FC");
        assert_eq!(body["teams"]["away"], "Away FC");
    }
}
