//! Raster tile basemap layers.
//!
//! A raster tile layer describes a source of prerendered tiles addressed by a
//! [`TileIndex`]. The layer does not download or place tiles itself; it resolves tile
//! URLs for whoever draws the frame and contributes a [`TileSurface`] primitive so the
//! front end knows which tile source backs the view.

use crate::layer::attribution::Attribution;
use crate::layer::Layer;
use crate::render::{RenderBundle, TileSurface};
use crate::view::MapView;

const TILE_SERVICE_ATTRIBUTION: &str = "Map data © OpenStreetMap contributors, CC-BY-SA, Imagery © Mapbox";
const TILE_SERVICE_URL: &str = "https://www.mapbox.com/";
const TILE_SERVICE_MAX_ZOOM: u32 = 18;

/// Index of a tile in a standard web tile scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileIndex {
    /// X index of the tile.
    pub x: i32,
    /// Y index of the tile.
    pub y: i32,
    /// Zoom level of the tile.
    pub z: u32,
}

impl TileIndex {
    /// Creates a new index.
    pub fn new(x: i32, y: i32, z: u32) -> Self {
        Self { x, y, z }
    }
}

/// Source of tile URLs for a tile layer.
pub trait UrlSource: (Fn(&TileIndex) -> String) + Send + Sync {}
impl<T: Fn(&TileIndex) -> String + Send + Sync> UrlSource for T {}

/// A tile basemap layer.
pub struct RasterTileLayer {
    name: String,
    style_id: String,
    url_source: Box<dyn UrlSource>,
    max_zoom: u32,
    attribution: Option<Attribution>,
}

impl RasterTileLayer {
    /// Creates a layer that requests tiles from the given URL source.
    pub fn new_rest(
        name: impl Into<String>,
        style_id: impl Into<String>,
        url_source: impl UrlSource + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            style_id: style_id.into(),
            url_source: Box::new(url_source),
            max_zoom: TILE_SERVICE_MAX_ZOOM,
            attribution: None,
        }
    }

    /// Sets the maximum zoom level the tile source provides.
    pub fn with_max_zoom(mut self, max_zoom: u32) -> Self {
        self.max_zoom = max_zoom;
        self
    }

    /// Sets the attribution of the layer.
    pub fn with_attribution(mut self, attribution: Attribution) -> Self {
        self.attribution = Some(attribution);
        self
    }

    /// Style identifier of the tile source.
    pub fn style_id(&self) -> &str {
        &self.style_id
    }

    /// Maximum zoom level the tile source provides.
    pub fn max_zoom(&self) -> u32 {
        self.max_zoom
    }

    /// Resolves the URL of the tile with the given index.
    pub fn tile_url(&self, index: &TileIndex) -> String {
        (self.url_source)(index)
    }
}

impl Layer for RasterTileLayer {
    fn render(&self, _view: &MapView, bundle: &mut RenderBundle) {
        bundle.add_tile_surface(TileSurface {
            style_id: self.style_id.clone(),
            max_zoom: self.max_zoom,
        });
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn attribution(&self) -> Option<Attribution> {
        self.attribution.clone()
    }
}

/// Basemap styles offered by the layer switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasemapStyle {
    /// Satellite imagery.
    Satellite,
    /// Outdoors style, offered under the "GreyScale" entry.
    Outdoors,
    /// Light style, offered under the "Outdoors" entry.
    Light,
}

impl BasemapStyle {
    /// All styles, in the order they are offered by the switcher.
    pub const ALL: [BasemapStyle; 3] = [
        BasemapStyle::Satellite,
        BasemapStyle::Outdoors,
        BasemapStyle::Light,
    ];

    /// Style identifier sent to the tile service.
    pub fn style_id(&self) -> &'static str {
        match self {
            BasemapStyle::Satellite => "mapbox.satellite",
            BasemapStyle::Outdoors => "mapbox.outdoors",
            BasemapStyle::Light => "mapbox.light",
        }
    }

    /// Label of the style in the layer switcher.
    ///
    /// The "GreyScale" entry is backed by the outdoors tileset and the "Outdoors"
    /// entry by the light one. Renaming the entries would break saved user habits,
    /// so the pairing stays as is.
    pub fn label(&self) -> &'static str {
        match self {
            BasemapStyle::Satellite => "Satellite",
            BasemapStyle::Outdoors => "GreyScale",
            BasemapStyle::Light => "Outdoors",
        }
    }
}

/// Builds a tile basemap layer for the given style.
///
/// The access token is taken from the explicit configuration value, never from ambient
/// process state.
pub fn basemap_layer(style: BasemapStyle, access_token: &str) -> RasterTileLayer {
    let style_id = style.style_id();
    let token = access_token.to_owned();
    RasterTileLayer::new_rest(style.label(), style_id, move |index: &TileIndex| {
        format!(
            "https://api.tiles.mapbox.com/v4/{style_id}/{z}/{x}/{y}.png?access_token={token}",
            z = index.z,
            x = index.x,
            y = index.y,
        )
    })
    .with_max_zoom(TILE_SERVICE_MAX_ZOOM)
    .with_attribution(Attribution::new(
        TILE_SERVICE_ATTRIBUTION,
        Some(TILE_SERVICE_URL.to_string()),
    ))
}
