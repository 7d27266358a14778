//! TwoQueue: 2Q replacement across recent, ghost and frequent tiers

use std::hash::Hash;
use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::config::TwoQueueConfig;
use crate::lru::{Evicted, LruStore};
use crate::stats::CacheStats;

/// The three tiers, always locked together
struct Tiers<K, V> {
    /// A1in
    recent: LruStore<K, V>,
    /// A1out, keys only
    ghost: LruStore<K, ()>,
    /// Am
    frequent: LruStore<K, V>,
}

impl<K, V> Tiers<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    fn new(config: &TwoQueueConfig) -> Self {
        Self {
            recent: LruStore::new(config.recent),
            ghost: LruStore::new(config.ghost),
            frequent: LruStore::new(config.frequent),
        }
    }

    fn get(&mut self, key: &K) -> Option<V> {
        if let Some(value) = self.frequent.get(key) {
            return Some(value.clone());
        }
        // Reads never promote out of recent
        self.recent.peek(key).cloned()
    }

    fn peek(&self, key: &K) -> Option<V> {
        self.frequent
            .peek(key)
            .or_else(|| self.recent.peek(key))
            .cloned()
    }

    fn set(&mut self, key: K, value: V, stats: &CacheStats) -> Option<Evicted<K, V>> {
        if self.frequent.contains(&key) {
            return self.admit_frequent(key, value, stats);
        }

        if self.ghost.contains(&key) {
            self.ghost.remove(&key);
            stats.record_promotion();
            trace!(ghost_len = self.ghost.len(), "ghost hit, promoting to frequent");
            return self.admit_frequent(key, value, stats);
        }

        // Already in recent: the new value is dropped
        if self.recent.contains(&key) {
            return None;
        }

        stats.record_insert();
        let evicted = self.recent.set(key, value)?;
        stats.record_eviction();
        trace!(recent_len = self.recent.len(), "recent eviction, remembering key in ghost");

        if self.ghost.set(evicted.key.clone(), ()).is_some() {
            stats.record_ghost_eviction();
            trace!(ghost_len = self.ghost.len(), "ghost full, key forgotten");
        }

        Some(evicted)
    }

    fn admit_frequent(
        &mut self,
        key: K,
        value: V,
        stats: &CacheStats,
    ) -> Option<Evicted<K, V>> {
        let evicted = self.frequent.set(key, value);
        if evicted.is_some() {
            stats.record_eviction();
            trace!(frequent_len = self.frequent.len(), "frequent eviction");
        }
        evicted
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        // Ghost membership is left to age out on its own
        self.frequent
            .remove(key)
            .or_else(|| self.recent.remove(key))
    }

    fn len(&self) -> usize {
        self.frequent.len() + self.recent.len()
    }

    fn clear(&mut self) {
        self.recent.clear();
        self.ghost.clear();
        self.frequent.clear();
    }
}

/// Thread-safe fixed-size 2Q cache
///
/// Keys seen once land in `recent`. When `recent` overflows, the evicted key
/// is remembered (without its value) in `ghost`. Setting a key that `ghost`
/// still remembers admits it into `frequent`, an LRU that a burst of
/// one-time keys can never reach.
///
/// A single lock guards all three tiers for the whole of every operation,
/// so a key moving from `ghost` into `frequent` is never observed half-way.
pub struct TwoQueue<K, V> {
    /// Recent, ghost and frequent tiers
    tiers: Mutex<Tiers<K, V>>,

    /// Cache statistics
    stats: CacheStats,

    /// Tier capacities
    config: TwoQueueConfig,
}

impl<K, V> TwoQueue<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Create a cache holding roughly `size` entries
    ///
    /// Tiers are split 25% recent, 50% ghost, 75% frequent.
    pub fn new(size: usize) -> Self {
        Self::with_config(TwoQueueConfig::from_total(size))
    }

    /// Create a cache with explicit tier capacities
    ///
    /// # Arguments
    /// * `recent` - A1in size, key/value pairs seen once
    /// * `ghost` - A1out size, keys evicted from `recent`
    /// * `frequent` - Am size, key/value pairs proven to recur
    pub fn with_capacities(recent: usize, ghost: usize, frequent: usize) -> Self {
        Self::with_config(TwoQueueConfig::new(recent, ghost, frequent))
    }

    /// Create a cache from a [`TwoQueueConfig`]
    pub fn with_config(config: TwoQueueConfig) -> Self {
        debug!(
            recent = config.recent,
            ghost = config.ghost,
            frequent = config.frequent,
            "creating 2Q cache"
        );

        Self {
            tiers: Mutex::new(Tiers::new(&config)),
            stats: CacheStats::new(),
            config,
        }
    }

    /// Look up a value
    ///
    /// A hit in `frequent` refreshes its recency there. A hit in `recent`
    /// leaves it untouched: only a later `set` can promote it.
    pub fn get(&self, key: &K) -> Option<V> {
        let value = self.tiers.lock().get(key);
        match value {
            Some(_) => self.stats.record_hit(),
            None => self.stats.record_miss(),
        }
        value
    }

    /// Look up a value without changing any tier's recency order
    pub fn peek(&self, key: &K) -> Option<V> {
        self.tiers.lock().peek(key)
    }

    /// Store a key/value pair
    ///
    /// # Returns
    /// * The entry evicted from `recent` or `frequent` to make room, if any
    ///
    /// Keys already in `frequent` are updated in place, keys remembered by
    /// `ghost` are admitted into `frequent`, and unseen keys go to `recent`.
    /// A key already sitting in `recent` is left as is and the new value is
    /// discarded.
    pub fn set(&self, key: K, value: V) -> Option<Evicted<K, V>> {
        self.tiers.lock().set(key, value, &self.stats)
    }

    /// Remove a key from `frequent` or `recent`, returning its value
    pub fn remove(&self, key: &K) -> Option<V> {
        self.tiers.lock().remove(key)
    }

    /// Check whether a value is cached, without touching recency
    pub fn contains(&self, key: &K) -> bool {
        let tiers = self.tiers.lock();
        tiers.frequent.contains(key) || tiers.recent.contains(key)
    }

    /// Number of cached values (`recent` plus `frequent`)
    pub fn len(&self) -> usize {
        self.tiers.lock().len()
    }

    /// Check if no values are cached
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of entries in the recent tier
    pub fn recent_len(&self) -> usize {
        self.tiers.lock().recent.len()
    }

    /// Number of keys in the ghost tier
    pub fn ghost_len(&self) -> usize {
        self.tiers.lock().ghost.len()
    }

    /// Number of entries in the frequent tier
    pub fn frequent_len(&self) -> usize {
        self.tiers.lock().frequent.len()
    }

    /// Cached keys, `frequent` first then `recent`, each most recent first
    pub fn keys(&self) -> Vec<K> {
        let tiers = self.tiers.lock();
        tiers
            .frequent
            .iter()
            .chain(tiers.recent.iter())
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// Tier capacities
    pub fn config(&self) -> &TwoQueueConfig {
        &self.config
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Empty every tier and reset statistics
    pub fn clear(&self) {
        self.tiers.lock().clear();
        self.stats.reset();
        debug!("cleared 2Q cache");
    }
}
