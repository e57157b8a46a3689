//! Error types used by the crate.

use thiserror::Error;

/// Quakemap error type.
#[derive(Debug, Error)]
pub enum QuakeMapError {
    /// I/O error (network or file).
    #[error("failed to load data")]
    Io,
    /// Error decoding data.
    #[error("failed to decode data: {0}")]
    Decoding(String),
    /// Item not found.
    #[error("item not found")]
    NotFound,
    /// Generic error - details are inside.
    #[error("{0}")]
    Generic(String),
}

impl From<reqwest::Error> for QuakeMapError {
    fn from(_value: reqwest::Error) -> Self {
        Self::Io
    }
}

impl From<geojson::Error> for QuakeMapError {
    fn from(value: geojson::Error) -> Self {
        Self::Decoding(value.to_string())
    }
}

impl From<serde_json::Error> for QuakeMapError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decoding(value.to_string())
    }
}
