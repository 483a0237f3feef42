//! pd-gallery - Client data layer for a public-domain art catalog
//!
//! Provides cached access to the remote catalog API, schema normalization,
//! and durable local storage for user collections.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod tasks;

pub use cache::ResponseCache;
pub use catalog::{CatalogService, CatalogState, SearchParams, SortBy};
pub use config::Config;
pub use error::{GalleryError, Result};
pub use store::{CollectionStore, FileBackend, RecentlyViewedStore, StorageBackend};
pub use tasks::spawn_sweep_task;
