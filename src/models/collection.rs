//! Collection Models
//!
//! User-owned collection state persisted as one JSON snapshot. Field names
//! serialize in camelCase to stay compatible with snapshots written by
//! earlier clients, and every snapshot field defaults to an empty list so
//! blobs from older schema versions still load.

use serde::{Deserialize, Serialize};

// == Public Constants ==
/// Maximum number of view history entries retained
pub const HISTORY_CAP: usize = 50;

/// A favorited artwork. At most one entry exists per artwork id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteItem {
    pub artwork_id: i64,
    /// Unix milliseconds
    pub added_at: i64,
}

/// A recently viewed artwork. At most one entry exists per artwork id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewHistoryItem {
    pub artwork_id: i64,
    /// Unix milliseconds
    pub viewed_at: i64,
}

/// A user-defined, named, ordered set of artwork ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Curation {
    pub id: String,
    pub name: String,
    /// Ordered, duplicate-free
    pub artwork_ids: Vec<i64>,
    /// Unix milliseconds
    pub created_at: i64,
}

/// The unit of persistence: the entire collection state, written and read
/// atomically as one serialized blob.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCollectionSnapshot {
    #[serde(default)]
    pub favorites: Vec<FavoriteItem>,
    #[serde(default)]
    pub view_history: Vec<ViewHistoryItem>,
    #[serde(default)]
    pub curations: Vec<Curation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let snapshot = UserCollectionSnapshot {
            favorites: vec![FavoriteItem {
                artwork_id: 100,
                added_at: 1700000000000,
            }],
            view_history: vec![ViewHistoryItem {
                artwork_id: 200,
                viewed_at: 1700000000001,
            }],
            curations: vec![Curation {
                id: "abc".to_string(),
                name: "Blue period".to_string(),
                artwork_ids: vec![100, 200],
                created_at: 1700000000002,
            }],
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"artworkId\":100"));
        assert!(json.contains("\"addedAt\""));
        assert!(json.contains("\"viewHistory\""));
        assert!(json.contains("\"artworkIds\":[100,200]"));
        assert!(json.contains("\"createdAt\""));
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let snapshot = UserCollectionSnapshot {
            favorites: vec![FavoriteItem {
                artwork_id: 1,
                added_at: 42,
            }],
            ..Default::default()
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: UserCollectionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn test_snapshot_missing_fields_default_to_empty() {
        // Blob written by an older schema with no curations field
        let json = r#"{"favorites": [{"artworkId": 7, "addedAt": 1}]}"#;
        let snapshot: UserCollectionSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(snapshot.favorites.len(), 1);
        assert!(snapshot.view_history.is_empty());
        assert!(snapshot.curations.is_empty());
    }
}
