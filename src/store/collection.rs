//! Collection Store Module
//!
//! Owns the user's favorites, view history and named curations. Every
//! mutation synchronously rewrites the whole snapshot to durable storage;
//! persistence is best-effort and never propagates failures to the caller.

use std::collections::HashSet;

use chrono::Utc;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::models::{Curation, FavoriteItem, UserCollectionSnapshot, ViewHistoryItem, HISTORY_CAP};
use crate::store::{StorageBackend, COLLECTION_KEY};

// == Collection Store ==
/// Persistent, mutation-driven store for user-owned collections.
///
/// All mutation happens synchronously on the caller's thread; the snapshot
/// is read once at construction and rewritten after every mutating call.
pub struct CollectionStore {
    favorites: Vec<FavoriteItem>,
    view_history: Vec<ViewHistoryItem>,
    curations: Vec<Curation>,
    storage: Box<dyn StorageBackend>,
}

impl CollectionStore {
    // == Constructor ==
    /// Creates a store rehydrated from the given backend.
    ///
    /// A missing, unreadable or corrupt snapshot falls back to empty
    /// defaults rather than propagating an error; fields absent from an
    /// older-schema blob each default to an empty list.
    pub fn new(storage: Box<dyn StorageBackend>) -> Self {
        let snapshot = Self::load_snapshot(storage.as_ref());

        Self {
            favorites: snapshot.favorites,
            view_history: snapshot.view_history,
            curations: snapshot.curations,
            storage,
        }
    }

    fn load_snapshot(storage: &dyn StorageBackend) -> UserCollectionSnapshot {
        match storage.load(COLLECTION_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(snapshot) => snapshot,
                Err(err) => {
                    debug!(error = %err, "stored collection snapshot unreadable, starting empty");
                    UserCollectionSnapshot::default()
                }
            },
            Ok(None) => UserCollectionSnapshot::default(),
            Err(err) => {
                debug!(error = %err, "collection storage unavailable, starting empty");
                UserCollectionSnapshot::default()
            }
        }
    }

    // == Read Access ==
    /// Current favorites, in insertion order.
    pub fn favorites(&self) -> &[FavoriteItem] {
        &self.favorites
    }

    /// View history, most recent first.
    pub fn view_history(&self) -> &[ViewHistoryItem] {
        &self.view_history
    }

    /// Current curations, in creation order.
    pub fn curations(&self) -> &[Curation] {
        &self.curations
    }

    /// Set of favorited artwork ids.
    pub fn favorite_ids(&self) -> HashSet<i64> {
        self.favorites.iter().map(|f| f.artwork_id).collect()
    }

    /// Returns true if the artwork is currently favorited.
    pub fn is_favorite(&self, artwork_id: i64) -> bool {
        self.favorites.iter().any(|f| f.artwork_id == artwork_id)
    }

    /// Recently viewed artwork ids, most recent first.
    pub fn recently_viewed_ids(&self) -> Vec<i64> {
        self.view_history.iter().map(|v| v.artwork_id).collect()
    }

    // == Favorites ==
    /// Adds a favorite. No-op if the artwork is already favorited.
    pub fn add_favorite(&mut self, artwork_id: i64) {
        if self.is_favorite(artwork_id) {
            return;
        }
        self.favorites.push(FavoriteItem {
            artwork_id,
            added_at: Utc::now().timestamp_millis(),
        });
        self.persist();
    }

    /// Removes a favorite if present; no-op otherwise.
    pub fn remove_favorite(&mut self, artwork_id: i64) {
        self.favorites.retain(|f| f.artwork_id != artwork_id);
        self.persist();
    }

    /// Adds or removes based on current membership.
    pub fn toggle_favorite(&mut self, artwork_id: i64) {
        if self.is_favorite(artwork_id) {
            self.remove_favorite(artwork_id);
        } else {
            self.add_favorite(artwork_id);
        }
    }

    // == View History ==
    /// Records a view. An existing entry for the artwork moves to the
    /// front rather than duplicating; the list is capped at
    /// [`HISTORY_CAP`] entries, most recent first.
    pub fn add_to_history(&mut self, artwork_id: i64) {
        self.view_history.retain(|v| v.artwork_id != artwork_id);
        self.view_history.insert(
            0,
            ViewHistoryItem {
                artwork_id,
                viewed_at: Utc::now().timestamp_millis(),
            },
        );
        self.view_history.truncate(HISTORY_CAP);
        self.persist();
    }

    // == Curations ==
    /// Creates a named, empty curation and returns it.
    pub fn create_curation(&mut self, name: &str) -> Curation {
        let curation = Curation {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            artwork_ids: Vec::new(),
            created_at: Utc::now().timestamp_millis(),
        };
        self.curations.push(curation.clone());
        self.persist();
        curation
    }

    /// Renames a curation in place; no-op if the id is unknown.
    pub fn rename_curation(&mut self, id: &str, name: &str) {
        if let Some(curation) = self.curations.iter_mut().find(|c| c.id == id) {
            curation.name = name.to_string();
        }
        self.persist();
    }

    /// Deletes a curation; no-op if the id is unknown.
    pub fn delete_curation(&mut self, id: &str) {
        self.curations.retain(|c| c.id != id);
        self.persist();
    }

    /// Appends an artwork to a curation unless it is already present
    /// (set semantics over an ordered list).
    pub fn add_to_curation(&mut self, curation_id: &str, artwork_id: i64) {
        if let Some(curation) = self.curations.iter_mut().find(|c| c.id == curation_id) {
            if !curation.artwork_ids.contains(&artwork_id) {
                curation.artwork_ids.push(artwork_id);
            }
        }
        self.persist();
    }

    /// Removes an artwork from a curation if present.
    pub fn remove_from_curation(&mut self, curation_id: &str, artwork_id: i64) {
        if let Some(curation) = self.curations.iter_mut().find(|c| c.id == curation_id) {
            curation.artwork_ids.retain(|id| *id != artwork_id);
        }
        self.persist();
    }

    // == Persistence ==
    /// Serializes the full snapshot to storage.
    ///
    /// Best-effort: failures are logged and swallowed, leaving in-memory
    /// state authoritative for the session.
    fn persist(&self) {
        let snapshot = UserCollectionSnapshot {
            favorites: self.favorites.clone(),
            view_history: self.view_history.clone(),
            curations: self.curations.clone(),
        };
        let serialized = match serde_json::to_string(&snapshot) {
            Ok(json) => json,
            Err(err) => {
                warn!(error = %err, "failed to serialize collection snapshot");
                return;
            }
        };
        if let Err(err) = self.storage.save(COLLECTION_KEY, &serialized) {
            warn!(error = %err, "failed to persist collection snapshot");
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryBackend;
    use std::io;
    use std::sync::Arc;

    /// Backend that always fails, for the fail-soft policy tests.
    struct BrokenBackend;

    impl StorageBackend for BrokenBackend {
        fn load(&self, _key: &str) -> io::Result<Option<String>> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "disabled"))
        }

        fn save(&self, _key: &str, _value: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "disabled"))
        }
    }

    /// Shared memory backend so two stores can see the same snapshot.
    struct SharedBackend(Arc<MemoryBackend>);

    impl StorageBackend for SharedBackend {
        fn load(&self, key: &str) -> io::Result<Option<String>> {
            self.0.load(key)
        }

        fn save(&self, key: &str, value: &str) -> io::Result<()> {
            self.0.save(key, value)
        }
    }

    fn memory_store() -> CollectionStore {
        CollectionStore::new(Box::new(MemoryBackend::new()))
    }

    #[test]
    fn test_add_favorite_is_idempotent() {
        let mut store = memory_store();

        store.add_favorite(100);
        store.add_favorite(100);

        assert_eq!(store.favorites().len(), 1);
        assert_eq!(store.favorites()[0].artwork_id, 100);
    }

    #[test]
    fn test_remove_favorite_unknown_id_is_noop() {
        let mut store = memory_store();

        store.add_favorite(100);
        store.remove_favorite(999);

        assert_eq!(store.favorites().len(), 1);
    }

    #[test]
    fn test_toggle_favorite_is_an_involution() {
        let mut store = memory_store();

        store.toggle_favorite(100);
        assert!(store.is_favorite(100));

        store.toggle_favorite(100);
        assert!(!store.is_favorite(100));
        assert!(store.favorites().is_empty());
    }

    #[test]
    fn test_history_cap_and_recency() {
        let mut store = memory_store();

        for id in 0..55 {
            store.add_to_history(id);
        }

        assert_eq!(store.view_history().len(), HISTORY_CAP);
        assert_eq!(store.view_history()[0].artwork_id, 54);
    }

    #[test]
    fn test_history_reinsert_moves_to_front() {
        let mut store = memory_store();

        store.add_to_history(1);
        store.add_to_history(2);
        store.add_to_history(3);
        store.add_to_history(1);

        assert_eq!(store.recently_viewed_ids(), vec![1, 3, 2]);
    }

    #[test]
    fn test_create_curation() {
        let mut store = memory_store();

        let curation = store.create_curation("Dutch Masters");

        assert_eq!(curation.name, "Dutch Masters");
        assert!(curation.artwork_ids.is_empty());
        assert!(!curation.id.is_empty());
        assert_eq!(store.curations().len(), 1);
    }

    #[test]
    fn test_curation_ids_are_unique() {
        let mut store = memory_store();

        let a = store.create_curation("a");
        let b = store.create_curation("b");

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_rename_curation() {
        let mut store = memory_store();

        let curation = store.create_curation("before");
        store.rename_curation(&curation.id, "after");

        assert_eq!(store.curations()[0].name, "after");
    }

    #[test]
    fn test_rename_unknown_curation_is_noop() {
        let mut store = memory_store();

        store.create_curation("keep");
        store.rename_curation("no-such-id", "new name");

        assert_eq!(store.curations()[0].name, "keep");
    }

    #[test]
    fn test_delete_curation() {
        let mut store = memory_store();

        let curation = store.create_curation("doomed");
        store.delete_curation(&curation.id);

        assert!(store.curations().is_empty());
    }

    #[test]
    fn test_add_to_curation_has_set_semantics() {
        let mut store = memory_store();

        let curation = store.create_curation("set");
        store.add_to_curation(&curation.id, 100);
        store.add_to_curation(&curation.id, 100);

        assert_eq!(store.curations()[0].artwork_ids, vec![100]);
    }

    #[test]
    fn test_remove_nonmember_from_curation_is_noop() {
        let mut store = memory_store();

        let curation = store.create_curation("set");
        store.add_to_curation(&curation.id, 100);
        store.remove_from_curation(&curation.id, 999);

        assert_eq!(store.curations()[0].artwork_ids, vec![100]);
    }

    #[test]
    fn test_snapshot_survives_reload() {
        let backend = Arc::new(MemoryBackend::new());

        {
            let mut store = CollectionStore::new(Box::new(SharedBackend(backend.clone())));
            store.add_favorite(100);
            store.add_to_history(200);
            let curation = store.create_curation("kept");
            store.add_to_curation(&curation.id, 100);
        }

        let reloaded = CollectionStore::new(Box::new(SharedBackend(backend)));
        assert!(reloaded.is_favorite(100));
        assert_eq!(reloaded.recently_viewed_ids(), vec![200]);
        assert_eq!(reloaded.curations().len(), 1);
        assert_eq!(reloaded.curations()[0].artwork_ids, vec![100]);
    }

    #[test]
    fn test_broken_storage_is_fail_soft() {
        let mut store = CollectionStore::new(Box::new(BrokenBackend));

        // Loads fell back to empty, mutations still work in memory
        store.add_favorite(100);
        store.toggle_favorite(200);
        store.add_to_history(300);

        assert!(store.is_favorite(100));
        assert!(store.is_favorite(200));
        assert_eq!(store.recently_viewed_ids(), vec![300]);
    }

    #[test]
    fn test_corrupt_snapshot_falls_back_to_empty() {
        let backend = MemoryBackend::new();
        backend.save(COLLECTION_KEY, "not json at all").unwrap();

        let store = CollectionStore::new(Box::new(backend));
        assert!(store.favorites().is_empty());
        assert!(store.curations().is_empty());
    }
}
