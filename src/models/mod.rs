//! Data Models
//!
//! Internal artwork schema, the raw wire schema it is normalized from,
//! and the user collection types persisted to durable storage.

mod artwork;
mod collection;

pub use artwork::{
    AgentResponse, ArtistInfo, ArtworkDetail, ArtworkSummary, DetailResponse, ListResponse,
    Pagination, RawAgent, RawArtwork, RawThumbnail, SearchResponse, Thumbnail,
};
pub use collection::{
    Curation, FavoriteItem, UserCollectionSnapshot, ViewHistoryItem, HISTORY_CAP,
};
