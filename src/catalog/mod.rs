//! Catalog Module
//!
//! Query construction and the cached query service for the remote catalog.

pub mod query;
mod service;

pub use query::{SearchParams, SortBy, DETAIL_FIELDS, SUMMARY_FIELDS};
pub use service::{CatalogService, CatalogState};
