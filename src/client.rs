//! Loading of remote GeoJSON datasets.

use bytes::Bytes;
use geojson::GeoJson;

use crate::error::QuakeMapError;

/// HTTP client for the dataset endpoints.
///
/// A thin wrapper that fetches a URL once per page load. There is no retry, no timeout
/// and no caching: a failed fetch propagates to the caller and the visualization simply
/// does not appear.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http_client: reqwest::Client,
}

impl HttpClient {
    /// Creates a new client.
    pub fn new() -> Result<Self, QuakeMapError> {
        let http_client = reqwest::Client::builder()
            .user_agent("quakemap/0.1")
            .build()?;

        Ok(Self { http_client })
    }

    /// Loads the raw response body from the given URL.
    pub async fn load_bytes(&self, url: &str) -> Result<Bytes, QuakeMapError> {
        log::info!("Loading {url}");
        let response = self.http_client.get(url).send().await?;
        if !response.status().is_success() {
            log::info!(
                "Failed to load {url}: {}, {:?}",
                response.status(),
                response.text().await
            );
            return Err(QuakeMapError::Io);
        }

        Ok(response.bytes().await?)
    }

    /// Loads and parses a GeoJSON document from the given URL.
    pub async fn load_geojson(&self, url: &str) -> Result<GeoJson, QuakeMapError> {
        let bytes = self.load_bytes(url).await?;
        let text = std::str::from_utf8(&bytes)
            .map_err(|error| QuakeMapError::Decoding(error.to_string()))?;

        Ok(text.parse()?)
    }
}
