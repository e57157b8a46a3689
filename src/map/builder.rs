use geo_types::Point;

use super::{LayerCollection, Map};
use crate::control::{LayerSwitcher, LegendControl};
use crate::layer::Layer;
use crate::view::MapView;

const DEFAULT_ZOOM: u32 = 3;

/// Convenience type to initialize a [`Map`].
///
/// Basemaps and overlays are registered separately: basemaps become an exclusive choice
/// in the layer switcher with the first one active, overlays toggle independently and
/// start visible.
#[derive(Default)]
pub struct MapBuilder {
    center: Option<Point<f64>>,
    zoom: Option<u32>,
    layers: LayerCollection,
    switcher: LayerSwitcher,
    legend: Option<LegendControl>,
}

impl MapBuilder {
    /// Sets the center point of the map.
    ///
    /// Defaults to (0, 0).
    pub fn with_latlon(mut self, lat: f64, lon: f64) -> Self {
        self.center = Some(Point::new(lon, lat));
        self
    }

    /// Sets the zoom level of the map.
    ///
    /// Defaults to 3.
    pub fn with_zoom(mut self, zoom: u32) -> Self {
        self.zoom = Some(zoom);
        self
    }

    /// Adds a basemap layer and registers it in the layer switcher.
    ///
    /// The first registered basemap is the active one; all later ones start hidden.
    pub fn with_basemap(mut self, layer: impl Layer + 'static) -> Self {
        let index = self.layers.len();
        self.switcher.add_basemap(layer.name().to_owned(), index);
        self.layers.push(layer);
        if index > 0 {
            self.layers.hide(index);
        }
        self
    }

    /// Adds an overlay layer on top of the previously added layers and registers it in
    /// the layer switcher. Overlays start visible.
    pub fn with_overlay(mut self, layer: impl Layer + 'static) -> Self {
        let index = self.layers.len();
        self.switcher.add_overlay(layer.name().to_owned(), index);
        self.layers.push(layer);
        self
    }

    /// Attaches a legend control to the map.
    pub fn with_legend(mut self, legend: LegendControl) -> Self {
        self.legend = Some(legend);
        self
    }

    /// Consumes the builder and creates a map instance.
    ///
    /// If some of the parameters are not specified before calling `build`, they will be
    /// set to the default values.
    pub fn build(self) -> Map {
        let MapBuilder {
            center,
            zoom,
            layers,
            switcher,
            legend,
        } = self;

        let view = MapView::new(
            center.unwrap_or_else(|| Point::new(0.0, 0.0)),
            zoom.unwrap_or(DEFAULT_ZOOM),
        );

        Map::new(view, layers, switcher, legend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::{Earthquake, FaultLine};
    use crate::layer::symbol::{FaultLineSymbol, QuakeMarkerSymbol};
    use crate::layer::FeatureLayer;

    fn basemap(name: &str) -> FeatureLayer<FaultLine, FaultLineSymbol> {
        FeatureLayer::new(name, Vec::new(), FaultLineSymbol::default())
    }

    fn overlay(name: &str) -> FeatureLayer<Earthquake, QuakeMarkerSymbol> {
        FeatureLayer::new(name, Vec::new(), QuakeMarkerSymbol)
    }

    #[test]
    fn constructs_map_with_default_parameters() {
        let map = MapBuilder::default().build();

        assert_eq!(map.view().center(), Point::new(0.0, 0.0));
        assert_eq!(map.view().zoom(), 3);
        assert!(map.layers().is_empty());
        assert!(map.legend().is_none());
    }

    #[test]
    fn with_latlon_sets_center() {
        let map = MapBuilder::default().with_latlon(55.0, 37.0).build();
        assert_eq!(map.view().center(), Point::new(37.0, 55.0));
    }

    #[test]
    fn with_zoom_sets_zoom() {
        let map = MapBuilder::default().with_zoom(8).build();
        assert_eq!(map.view().zoom(), 8);
    }

    #[test]
    fn first_basemap_is_active_rest_are_hidden() {
        let map = MapBuilder::default()
            .with_basemap(basemap("One"))
            .with_basemap(basemap("Two"))
            .with_basemap(basemap("Three"))
            .build();

        assert!(map.layers().is_visible(0));
        assert!(!map.layers().is_visible(1));
        assert!(!map.layers().is_visible(2));
        assert_eq!(map.switcher().active_basemap(), Some("One"));
    }

    #[test]
    fn overlays_start_visible_above_basemaps() {
        let map = MapBuilder::default()
            .with_basemap(basemap("Base"))
            .with_overlay(overlay("Quakes"))
            .build();

        assert_eq!(map.layers().len(), 2);
        assert!(map.layers().is_visible(1));
        let overlays: Vec<_> = map.switcher().overlay_labels().collect();
        assert_eq!(overlays, ["Quakes"]);
    }

    #[test]
    fn with_legend_attaches_legend() {
        let map = MapBuilder::default()
            .with_legend(LegendControl::magnitude())
            .build();
        assert!(map.legend().is_some());
    }
}
