/// Shared application state for the webserver
///
/// Explicitly constructed at startup and injected into every route handler
/// via axum state - no process-wide globals, which keeps the caches easy to
/// stand up with short TTLs in tests.
use crate::apis::football::FootballApi;
use crate::cache::{CacheConfig, CacheManager};
use crate::config::Settings;
use crate::types::{LiveMatch, OddsQuote};
use std::sync::Arc;

/// Shared application state passed to all route handlers
#[derive(Clone)]
pub struct AppState {
    /// Runtime settings
    pub settings: Settings,

    /// Odds namespace cache (`odds:{fixtureId}:{bookmakerCount}`)
    pub odds_cache: CacheManager<String, Vec<OddsQuote>>,

    /// Live-state namespace cache (`live:{fixtureId}`)
    pub live_cache: CacheManager<String, LiveMatch>,

    /// Upstream data source
    pub api: Arc<dyn FootballApi>,
}

impl AppState {
    /// Create new application state with namespace TTLs taken from settings
    pub fn new(settings: Settings, api: Arc<dyn FootballApi>) -> Self {
        let odds_cache = CacheManager::new(CacheConfig::odds(settings.odds_ttl_secs));
        let live_cache = CacheManager::new(CacheConfig::live(settings.live_ttl_secs));

        Self {
            settings,
            odds_cache,
            live_cache,
            api,
        }
    }

    /// State wired to a stub upstream, with TTLs overridable per test
    #[cfg(test)]
    pub fn for_tests(api: Arc<dyn FootballApi>, odds_ttl_secs: u64, live_ttl_secs: u64) -> Self {
        let settings = Settings {
            host: "127.0.0.1".to_string(),
            port: 0,
            api_key: "test-key".to_string(),
            api_base_url: "https://v3.football.api-sports.io".to_string(),
            api_host_header: "v3.football.api-sports.io".to_string(),
            request_timeout_secs: 1,
            odds_ttl_secs,
            live_ttl_secs,
            sweep_interval_secs: 300,
        };
        Self::new(settings, api)
    }
}
