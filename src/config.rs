//! Startup configuration for the visualization.
//!
//! The dataset endpoints and the tile service access token are passed around as an
//! explicit value instead of being read from ambient process state, so the layer
//! building logic can be exercised without any environment setup.

use serde::Deserialize;

const DEFAULT_EARTHQUAKE_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson";
const DEFAULT_PLATES_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";

/// Configuration of the data sources and the tile service credential.
#[derive(Debug, Clone, Deserialize)]
pub struct MapConfig {
    /// Access token appended to every tile request.
    pub tile_token: String,
    /// Endpoint of the seismic events GeoJSON feed.
    pub earthquake_url: String,
    /// Endpoint of the plate boundaries GeoJSON dataset.
    pub plates_url: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tile_token: String::new(),
            earthquake_url: DEFAULT_EARTHQUAKE_URL.into(),
            plates_url: DEFAULT_PLATES_URL.into(),
        }
    }
}

impl MapConfig {
    /// Reads the configuration from `QUAKEMAP_TILE_TOKEN`, `QUAKEMAP_DATA_URL` and
    /// `QUAKEMAP_PLATES_URL` environment variables, falling back to the default
    /// public endpoints for the values that are not set.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            tile_token: std::env::var("QUAKEMAP_TILE_TOKEN").unwrap_or(defaults.tile_token),
            earthquake_url: std::env::var("QUAKEMAP_DATA_URL").unwrap_or(defaults.earthquake_url),
            plates_url: std::env::var("QUAKEMAP_PLATES_URL").unwrap_or(defaults.plates_url),
        }
    }
}
