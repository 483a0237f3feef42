//! Recently Viewed Module
//!
//! Keeps a short, persisted list of recently viewed artwork ids for the
//! home screen. Same fail-soft persistence policy as the collection store.

use tracing::{debug, warn};

use crate::store::{StorageBackend, RECENT_CAP, RECENT_KEY};

// == Recently Viewed Store ==
/// Persisted list of recently viewed artwork ids, most recent first.
pub struct RecentlyViewedStore {
    ids: Vec<i64>,
    storage: Box<dyn StorageBackend>,
}

impl RecentlyViewedStore {
    /// Creates a store rehydrated from the given backend, falling back to
    /// an empty list when the stored blob is missing or unreadable.
    pub fn new(storage: Box<dyn StorageBackend>) -> Self {
        let ids = match storage.load(RECENT_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                debug!(error = %err, "stored recent list unreadable, starting empty");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(err) => {
                debug!(error = %err, "recent storage unavailable, starting empty");
                Vec::new()
            }
        };

        Self { ids, storage }
    }

    /// Recently viewed ids, most recent first.
    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    /// Records a view. A repeated id moves to the front; the list is
    /// capped at [`RECENT_CAP`] entries.
    pub fn add(&mut self, artwork_id: i64) {
        self.ids.retain(|id| *id != artwork_id);
        self.ids.insert(0, artwork_id);
        self.ids.truncate(RECENT_CAP);
        self.persist();
    }

    fn persist(&self) {
        let serialized = match serde_json::to_string(&self.ids) {
            Ok(json) => json,
            Err(err) => {
                warn!(error = %err, "failed to serialize recent list");
                return;
            }
        };
        if let Err(err) = self.storage.save(RECENT_KEY, &serialized) {
            warn!(error = %err, "failed to persist recent list");
        }
    }
}
