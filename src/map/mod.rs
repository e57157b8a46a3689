//! The map itself: a view, a collection of layers and the attached controls.

mod builder;
mod layer_collection;

pub use builder::MapBuilder;
pub use layer_collection::LayerCollection;

use crate::config::MapConfig;
use crate::control::{LayerSwitcher, LegendControl};
use crate::error::QuakeMapError;
use crate::layer::attribution::Attribution;
use crate::layer::{basemap_layer, BasemapStyle, Layer};
use crate::render::RenderBundle;
use crate::view::MapView;

/// Map specifies a set of layers, the attached controls and the view that should be
/// rendered.
///
/// The map is created once at startup and lives for the lifetime of the page; there is
/// no explicit teardown. After composition the only mutations are the ones the user
/// performs through the layer switcher.
pub struct Map {
    view: MapView,
    layers: LayerCollection,
    switcher: LayerSwitcher,
    legend: Option<LegendControl>,
}

impl Map {
    /// Creates a new map.
    pub fn new(
        view: MapView,
        layers: LayerCollection,
        switcher: LayerSwitcher,
        legend: Option<LegendControl>,
    ) -> Self {
        Self {
            view,
            layers,
            switcher,
            legend,
        }
    }

    /// Current view of the map.
    pub fn view(&self) -> &MapView {
        &self.view
    }

    /// Changes the view of the map to the given one.
    pub fn set_view(&mut self, view: MapView) {
        self.view = view;
    }

    /// Returns the list of map's layers.
    pub fn layers(&self) -> &LayerCollection {
        &self.layers
    }

    /// Returns the layer switcher control.
    pub fn switcher(&self) -> &LayerSwitcher {
        &self.switcher
    }

    /// Returns the legend control, if one is attached.
    pub fn legend(&self) -> Option<&LegendControl> {
        self.legend.as_ref()
    }

    /// Makes the basemap with the given label the only visible one.
    pub fn select_basemap(&mut self, label: &str) -> Result<(), QuakeMapError> {
        self.switcher.select_basemap(label, &mut self.layers)
    }

    /// Flips the visibility of the overlay with the given label and returns the new
    /// visibility state.
    pub fn toggle_overlay(&mut self, label: &str) -> Result<bool, QuakeMapError> {
        self.switcher.toggle_overlay(label, &mut self.layers)
    }

    /// Renders all visible layers, in collection order, into a fresh bundle.
    pub fn render_frame(&self) -> RenderBundle {
        let mut bundle = RenderBundle::default();
        for layer in self.layers.iter_visible() {
            layer.render(&self.view, &mut bundle);
        }
        bundle
    }

    /// Attributions of the currently visible layers.
    pub fn attributions(&self) -> Vec<Attribution> {
        self.layers
            .iter_visible()
            .filter_map(|layer| layer.attribution())
            .collect()
    }
}

/// Assembles the earthquake map from the two prebuilt overlays.
///
/// The map is centered at (0, 0) with zoom level 3. All three basemap styles are
/// registered in the layer switcher with the satellite one active; both overlays start
/// visible and the magnitude legend is attached to the bottom right corner.
pub fn compose_map(
    earthquakes: impl Layer + 'static,
    fault_lines: impl Layer + 'static,
    config: &MapConfig,
) -> Map {
    let mut builder = MapBuilder::default().with_latlon(0.0, 0.0).with_zoom(3);

    for style in BasemapStyle::ALL {
        builder = builder.with_basemap(basemap_layer(style, &config.tile_token));
    }

    builder
        .with_overlay(fault_lines)
        .with_overlay(earthquakes)
        .with_legend(LegendControl::magnitude())
        .build()
}
