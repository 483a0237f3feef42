//! Response Cache Module
//!
//! Main cache engine combining HashMap storage with insertion-order tracking
//! and TTL expiration. Sits in front of every outbound catalog read.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{CacheEntry, InsertionTracker, MIN_EVICTION_BATCH};

// == Response Cache ==
/// Bounded, time-expiring cache for remote API response bodies.
///
/// Keys are fully-qualified request URLs including the query string.
/// When the cache overflows, expired entries are swept first; if that is
/// not enough, the oldest-inserted entries are evicted in batches of at
/// least [`MIN_EVICTION_BATCH`] to amortize eviction cost.
#[derive(Debug)]
pub struct ResponseCache {
    /// URL-keyed response storage
    entries: HashMap<String, CacheEntry>,
    /// Insertion order tracker for oldest-first eviction
    order: InsertionTracker,
    /// Maximum number of entries allowed
    capacity: usize,
    /// TTL in seconds applied to every entry
    ttl_secs: u64,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates a new ResponseCache with the given capacity and TTL.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries the cache can hold
    /// * `ttl_secs` - Freshness window in seconds for every entry
    pub fn new(capacity: usize, ttl_secs: u64) -> Self {
        Self {
            entries: HashMap::new(),
            order: InsertionTracker::new(),
            capacity,
            ttl_secs,
        }
    }

    // == Get ==
    /// Retrieves a cached response body by URL.
    ///
    /// Returns the value only if present and not expired. An expired but
    /// still present entry counts as a miss and is removed on the spot.
    pub fn get(&mut self, key: &str) -> Option<String> {
        match self.entries.get(key) {
            Some(entry) if !entry.is_expired() => {
                debug!(key, "response cache hit");
                Some(entry.value.clone())
            }
            Some(_) => {
                // Stale entry: drop it and report a miss
                self.entries.remove(key);
                self.order.remove(key);
                debug!(key, "response cache expired");
                None
            }
            None => {
                debug!(key, "response cache miss");
                None
            }
        }
    }

    // == Put ==
    /// Stores a response body under its request URL.
    ///
    /// Before inserting, if the cache size exceeds the capacity all expired
    /// entries are swept; if it is still at or over capacity, the oldest
    /// inserted entries are evicted until at least
    /// `max(MIN_EVICTION_BATCH, overflow + 1)` slots are freed.
    ///
    /// Concurrent fillers of the same key are not coordinated: the last
    /// write wins.
    pub fn put(&mut self, key: String, value: String) {
        if self.entries.len() > self.capacity {
            let swept = self.sweep_expired();
            debug!(swept, "swept expired entries before insert");
        }
        if self.entries.len() >= self.capacity {
            let overflow = self.entries.len() - self.capacity + 1;
            self.evict_oldest(overflow.max(MIN_EVICTION_BATCH));
        }

        let entry = CacheEntry::new(value, self.ttl_secs);
        self.entries.insert(key.clone(), entry);
        self.order.record(&key);
    }

    // == Sweep Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn sweep_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
            self.order.remove(&key);
        }

        count
    }

    // == Evict Oldest ==
    /// Evicts up to `count` entries in insertion order, oldest first.
    fn evict_oldest(&mut self, count: usize) {
        let mut evicted = 0;
        for _ in 0..count {
            match self.order.pop_oldest() {
                Some(key) => {
                    self.entries.remove(&key);
                    evicted += 1;
                }
                None => break,
            }
        }
        debug!(evicted, "evicted oldest cache entries");
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
