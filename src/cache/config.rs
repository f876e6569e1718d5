/// Cache configuration per key namespace
///
/// TTLs match the upstream's own refresh cadence:
/// - Odds: long TTL (upstream recalculates pre-match odds every few hours)
/// - Live state: short TTL (scores and elapsed time move every few seconds)
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Time-to-live for cached entries; fixed per namespace, not per call
    pub ttl: Duration,
}

impl CacheConfig {
    /// Odds namespace (`odds:{fixtureId}:{bookmakerCount}`)
    pub fn odds(ttl_secs: u64) -> Self {
        Self {
            ttl: Duration::from_secs(ttl_secs),
        }
    }

    /// Live-state namespace (`live:{fixtureId}`)
    pub fn live(ttl_secs: u64) -> Self {
        Self {
            ttl: Duration::from_secs(ttl_secs),
        }
    }

    /// Arbitrary TTL, used by tests
    pub fn custom(ttl: Duration) -> Self {
        Self { ttl }
    }
}
