//! Layers specify a data source and the way the data should be rendered to the map.

pub mod attribution;
pub mod feature_layer;
pub mod raster_tile_layer;
pub mod symbol;

pub use feature_layer::FeatureLayer;
pub use raster_tile_layer::{basemap_layer, BasemapStyle, RasterTileLayer, TileIndex};

use crate::layer::attribution::Attribution;
use crate::render::RenderBundle;
use crate::view::MapView;

/// Layers specify a data source and the way the data should be rendered to the map.
///
/// There are two types of layers:
/// * [`RasterTileLayer`] - describes a source of prerendered tiles to be drawn as the
///   map background.
/// * [`FeatureLayer`] - draws a custom set of geographic objects with the given
///   [`Symbol`](symbol::Symbol).
pub trait Layer: Send + Sync {
    /// Renders the layer into the given bundle.
    fn render(&self, view: &MapView, bundle: &mut RenderBundle);

    /// Display name of the layer, shown by the layer switcher.
    fn name(&self) -> &str;

    /// Returns the attribution of the layer, if available.
    fn attribution(&self) -> Option<Attribution> {
        None
    }
}
