//! Store Module
//!
//! Durable, fail-soft local storage for user-owned collections.

mod backend;
mod collection;
mod recent;

// Re-export public types
pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use collection::CollectionStore;
pub use recent::RecentlyViewedStore;

// == Public Constants ==
/// Storage key for the collection snapshot
pub const COLLECTION_KEY: &str = "pd-gallery-collection";

/// Storage key for the recently viewed id list
pub const RECENT_KEY: &str = "pd-gallery-recent";

/// Maximum number of recently viewed ids retained
pub const RECENT_CAP: usize = 12;
