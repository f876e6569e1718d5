/// Generic in-memory cache with TTL expiry
///
/// Thread-safe, generic over key/value types. Expiry is lazy: a read at or
/// past the deadline behaves as a miss and drops the entry; `purge_expired`
/// reclaims entries nobody reads. No LRU or size bound - the fixture-ID key
/// space is small enough that TTL alone bounds memory.
use super::config::CacheConfig;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex};
use std::time::Instant;

/// Cache entry with its expiry deadline
///
/// Entries are never mutated in place; an update is a whole-entry replacement.
struct CacheEntry<V> {
    value: V,
    expires_at: Instant,
}

impl<V> CacheEntry<V> {
    fn new(value: V, config: &CacheConfig) -> Self {
        Self {
            value,
            expires_at: Instant::now() + config.ttl,
        }
    }

    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Cache metrics for monitoring
#[derive(Debug, Clone, Default)]
pub struct CacheMetrics {
    pub hits: u64,
    pub misses: u64,
    pub expirations: u64,
    pub inserts: u64,
}

impl CacheMetrics {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Generic cache manager
///
/// Cloning shares the underlying store; handlers receive clones through
/// the application state rather than a process-wide global.
#[derive(Clone)]
pub struct CacheManager<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    config: CacheConfig,
    data: Arc<Mutex<HashMap<K, CacheEntry<V>>>>,
    metrics: Arc<Mutex<CacheMetrics>>,
}

impl<K, V> CacheManager<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    /// Create new cache with the given namespace configuration
    pub fn new(config: CacheConfig) -> Self {
        Self {
            config,
            data: Arc::new(Mutex::new(HashMap::new())),
            metrics: Arc::new(Mutex::new(CacheMetrics::default())),
        }
    }

    /// Get value from cache (returns None if expired or missing)
    pub fn get(&self, key: &K) -> Option<V> {
        let now = Instant::now();
        let mut data = self.data.lock().unwrap();

        let (value, expired) = match data.get(key) {
            Some(entry) if entry.is_expired(now) => (None, true),
            Some(entry) => (Some(entry.value.clone()), false),
            None => (None, false),
        };

        if expired {
            data.remove(key);
        }
        drop(data);

        let mut metrics = self.metrics.lock().unwrap();
        if value.is_some() {
            metrics.hits += 1;
        } else {
            metrics.misses += 1;
        }
        if expired {
            metrics.expirations += 1;
        }

        value
    }

    /// Insert value, stamping the namespace TTL from now
    ///
    /// Last insert for a key wins; concurrent writers do not merge.
    pub fn insert(&self, key: K, value: V) {
        let entry = CacheEntry::new(value, &self.config);

        let mut data = self.data.lock().unwrap();
        data.insert(key, entry);

        let mut metrics = self.metrics.lock().unwrap();
        metrics.inserts += 1;
    }

    /// Drop every expired entry, returning how many were reclaimed
    ///
    /// Purely a memory-reclamation aid; correctness never depends on it
    /// because `get` checks expiry itself.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut data = self.data.lock().unwrap();

        let before = data.len();
        data.retain(|_, entry| !entry.is_expired(now));
        let purged = before - data.len();

        if purged > 0 {
            let mut metrics = self.metrics.lock().unwrap();
            metrics.expirations += purged as u64;
        }

        purged
    }

    /// Clear all entries
    pub fn clear(&self) {
        self.data.lock().unwrap().clear();
    }

    /// Get current metrics
    pub fn metrics(&self) -> CacheMetrics {
        self.metrics.lock().unwrap().clone()
    }

    /// Number of physically present entries (expired-but-unswept included)
    pub fn len(&self) -> usize {
        self.data.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
