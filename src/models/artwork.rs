//! Artwork Models
//!
//! The remote catalog returns a heterogeneous, nullable wire schema. Every
//! raw record is normalized at this boundary into a strict internal model:
//! absent or null strings become `""`, absent lists become `[]`, and the
//! thumbnail stays `None` unless the wire object provides one.

use serde::{Deserialize, Serialize};

// == Internal Models ==

/// Thumbnail metadata for an artwork image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub alt_text: String,
}

/// Normalized artwork record used in result lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtworkSummary {
    pub id: i64,
    pub title: String,
    pub artist_display: String,
    pub date_display: String,
    pub medium_display: String,
    pub image_id: Option<String>,
    pub is_public_domain: bool,
    pub genres: Vec<String>,
    pub thumbnail: Option<Thumbnail>,
}

/// Normalized artwork record with the extended detail fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtworkDetail {
    pub summary: ArtworkSummary,
    pub description: Option<String>,
    pub provenance_text: Option<String>,
    pub dimensions: Option<String>,
    pub credit_line: Option<String>,
    pub gallery_title: Option<String>,
    pub department: Option<String>,
    pub classification: Option<String>,
    pub place_of_origin: Option<String>,
    pub style_title: Option<String>,
    pub colorfulness: Option<f64>,
    pub has_educational_resources: bool,
    pub artist_id: Option<i64>,
    pub artist_title: Option<String>,
}

/// Normalized agent (artist) record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistInfo {
    pub id: i64,
    pub title: String,
    pub birth_date: Option<i64>,
    pub death_date: Option<i64>,
    pub description: Option<String>,
}

// == Raw Wire Schema ==

/// Thumbnail object as returned by the remote API.
#[derive(Debug, Clone, Deserialize)]
pub struct RawThumbnail {
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub alt_text: Option<String>,
}

/// Artwork record as returned by the remote API.
///
/// Every field other than `id` may be null or absent depending on which
/// fields were requested and how complete the record is.
#[derive(Debug, Clone, Deserialize)]
pub struct RawArtwork {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artist_display: Option<String>,
    #[serde(default)]
    pub date_display: Option<String>,
    #[serde(default)]
    pub medium_display: Option<String>,
    #[serde(default)]
    pub image_id: Option<String>,
    #[serde(default)]
    pub is_public_domain: bool,
    #[serde(default)]
    pub genre_titles: Option<Vec<String>>,
    #[serde(default)]
    pub thumbnail: Option<RawThumbnail>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub provenance_text: Option<String>,
    #[serde(default)]
    pub dimensions: Option<String>,
    #[serde(default)]
    pub credit_line: Option<String>,
    #[serde(default)]
    pub gallery_title: Option<String>,
    #[serde(default)]
    pub department_title: Option<String>,
    #[serde(default)]
    pub classification_title: Option<String>,
    #[serde(default)]
    pub place_of_origin: Option<String>,
    #[serde(default)]
    pub style_title: Option<String>,
    #[serde(default)]
    pub colorfulness: Option<f64>,
    #[serde(default)]
    pub has_educational_resources: Option<bool>,
    #[serde(default)]
    pub artist_id: Option<i64>,
    #[serde(default)]
    pub artist_title: Option<String>,
}

/// Agent record as returned by the remote API.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAgent {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub birth_date: Option<i64>,
    #[serde(default)]
    pub death_date: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
}

// == Response Envelopes ==

/// Envelope for `GET /artworks/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Vec<RawArtwork>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Pagination block of a search response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub total: u64,
}

/// Envelope for `GET /artworks?ids=...`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub data: Vec<RawArtwork>,
}

/// Envelope for `GET /artworks/<id>`.
#[derive(Debug, Clone, Deserialize)]
pub struct DetailResponse {
    pub data: RawArtwork,
}

/// Envelope for `GET /agents/<id>`.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentResponse {
    pub data: RawAgent,
}

// == Normalization ==

impl From<RawThumbnail> for Thumbnail {
    fn from(raw: RawThumbnail) -> Self {
        Self {
            width: raw.width,
            height: raw.height,
            alt_text: raw.alt_text.unwrap_or_default(),
        }
    }
}

impl From<RawArtwork> for ArtworkSummary {
    fn from(raw: RawArtwork) -> Self {
        Self {
            id: raw.id,
            title: raw.title.unwrap_or_default(),
            artist_display: raw.artist_display.unwrap_or_default(),
            date_display: raw.date_display.unwrap_or_default(),
            medium_display: raw.medium_display.unwrap_or_default(),
            image_id: raw.image_id,
            is_public_domain: raw.is_public_domain,
            genres: raw.genre_titles.unwrap_or_default(),
            thumbnail: raw.thumbnail.map(Thumbnail::from),
        }
    }
}

impl From<RawArtwork> for ArtworkDetail {
    fn from(raw: RawArtwork) -> Self {
        Self {
            description: raw.description.clone(),
            provenance_text: raw.provenance_text.clone(),
            dimensions: raw.dimensions.clone(),
            credit_line: raw.credit_line.clone(),
            gallery_title: raw.gallery_title.clone(),
            department: raw.department_title.clone(),
            classification: raw.classification_title.clone(),
            place_of_origin: raw.place_of_origin.clone(),
            style_title: raw.style_title.clone(),
            colorfulness: raw.colorfulness,
            has_educational_resources: raw.has_educational_resources.unwrap_or(false),
            artist_id: raw.artist_id,
            artist_title: raw.artist_title.clone(),
            summary: ArtworkSummary::from(raw),
        }
    }
}

impl From<RawAgent> for ArtistInfo {
    fn from(raw: RawAgent) -> Self {
        Self {
            id: raw.id,
            title: raw.title.unwrap_or_default(),
            birth_date: raw.birth_date,
            death_date: raw.death_date,
            description: raw.description,
        }
    }
}
