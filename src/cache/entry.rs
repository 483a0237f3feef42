//! Cache Entry Module
//!
//! Defines the structure for individual cached responses.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A single cached response body with its freshness window.
///
/// Entries are replace-only: once stored they are never mutated, only
/// removed by expiry or eviction and re-inserted on the next fetch.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached response payload (opaque to the cache)
    pub value: String,
    /// Insertion timestamp (Unix milliseconds)
    pub inserted_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CacheEntry {
    /// Creates a new cache entry expiring `ttl_secs` from now.
    pub fn new(value: String, ttl_secs: u64) -> Self {
        let now = current_timestamp_ms();

        Self {
            value,
            inserted_at: now,
            expires_at: now + ttl_secs * 1000,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is logically expired once the current time reaches its
    /// expiration timestamp, independent of whether it has been physically
    /// evicted from the store.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
