//! Configuration Module
//!
//! Handles loading and managing client configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote catalog API
    pub api_base: String,
    /// Base URL of the IIIF image server
    pub iiif_base: String,
    /// Maximum number of entries the response cache can hold
    pub max_cache_entries: usize,
    /// TTL in seconds for cached responses
    pub cache_ttl: u64,
    /// Background expiry sweep interval in seconds
    pub sweep_interval: u64,
    /// Directory used for durable collection storage
    pub data_dir: PathBuf,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PD_GALLERY_API_BASE` - Catalog API base URL (default: https://api.artic.edu/api/v1)
    /// - `PD_GALLERY_IIIF_BASE` - IIIF image server base URL (default: https://www.artic.edu/iiif/2)
    /// - `PD_GALLERY_CACHE_ENTRIES` - Maximum cached responses (default: 500)
    /// - `PD_GALLERY_CACHE_TTL` - Response TTL in seconds (default: 300)
    /// - `PD_GALLERY_SWEEP_INTERVAL` - Expiry sweep frequency in seconds (default: 60)
    /// - `PD_GALLERY_DATA_DIR` - Storage directory (default: .pd-gallery)
    pub fn from_env() -> Self {
        Self {
            api_base: env::var("PD_GALLERY_API_BASE")
                .unwrap_or_else(|_| "https://api.artic.edu/api/v1".to_string()),
            iiif_base: env::var("PD_GALLERY_IIIF_BASE")
                .unwrap_or_else(|_| "https://www.artic.edu/iiif/2".to_string()),
            max_cache_entries: env::var("PD_GALLERY_CACHE_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(500),
            cache_ttl: env::var("PD_GALLERY_CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            sweep_interval: env::var("PD_GALLERY_SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            data_dir: env::var("PD_GALLERY_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".pd-gallery")),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: "https://api.artic.edu/api/v1".to_string(),
            iiif_base: "https://www.artic.edu/iiif/2".to_string(),
            max_cache_entries: 500,
            cache_ttl: 300,
            sweep_interval: 60,
            data_dir: PathBuf::from(".pd-gallery"),
        }
    }
}
