/// In-memory TTL cache for upstream responses
///
/// Two disjoint key namespaces share the key format but live in separate
/// cache instances with independent TTL policy:
/// - `odds:{fixtureId}:{bookmakerCount}` - transformed odds lists
/// - `live:{fixtureId}` - transformed live match state
pub mod config;
pub mod manager;

pub use config::CacheConfig;
pub use manager::{CacheManager, CacheMetrics};

/// Cache key for a fixture's odds, scoped by the requested bookmaker count
/// so `?bookmakers=1` and `?bookmakers=5` never serve each other's entries
pub fn odds_key(fixture_id: u64, max_bookmakers: usize) -> String {
    format!("odds:{}:{}", fixture_id, max_bookmakers)
}

/// Cache key for a fixture's live state
pub fn live_key(fixture_id: u64) -> String {
    format!("live:{}", fixture_id)
}
