//! Cache Module
//!
//! Provides a bounded, TTL-based response cache keyed by request URL.
//! Eviction runs oldest-inserted-first in batches, not least-recently-used.

mod entry;
mod order;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use order::InsertionTracker;
pub use store::ResponseCache;

// == Public Constants ==
/// Minimum number of entries removed in one eviction batch
pub const MIN_EVICTION_BATCH: usize = 50;
