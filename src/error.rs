//! Error types for the gallery client
//!
//! Provides unified error handling using thiserror.
//!
//! Only transport and HTTP-status failures are surfaced to callers; malformed
//! wire fields are absorbed by default substitution at the model boundary and
//! storage failures are swallowed by the best-effort persistence policy.

use thiserror::Error;

// == Gallery Error Enum ==
/// Unified error type for the gallery client.
#[derive(Error, Debug)]
pub enum GalleryError {
    /// Network or transport failure from the HTTP client
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Remote API answered with a non-success status code
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// Response body could not be decoded
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the gallery client.
pub type Result<T> = std::result::Result<T, GalleryError>;
