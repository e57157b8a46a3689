//! Quakemap renders a map of recent earthquake events overlaid with tectonic fault lines.
//!
//! The crate fetches two GeoJSON datasets (seismic events and plate boundaries), converts
//! every earthquake into a circular marker whose radius and color are driven by the event
//! magnitude, and composes the result with a selectable tile basemap, a magnitude legend
//! and a layer switcher.
//!
//! # Quick start
//!
//! ```no_run
//! use quakemap::config::MapConfig;
//! use quakemap::client::HttpClient;
//! use quakemap::feature::{earthquakes_from_geojson, fault_lines_from_geojson};
//! use quakemap::layer::symbol::{FaultLineSymbol, QuakeMarkerSymbol};
//! use quakemap::layer::FeatureLayer;
//! use quakemap::map::compose_map;
//!
//! # tokio_test::block_on(async {
//! let config = MapConfig::from_env();
//! let client = HttpClient::new()?;
//!
//! let quakes = earthquakes_from_geojson(client.load_geojson(&config.earthquake_url).await?)?;
//! let plates = fault_lines_from_geojson(client.load_geojson(&config.plates_url).await?)?;
//!
//! let map = compose_map(
//!     FeatureLayer::new("Earthquakes", quakes, QuakeMarkerSymbol),
//!     FeatureLayer::new("Fault Line", plates, FaultLineSymbol::default()),
//!     &config,
//! );
//!
//! let frame = map.render_frame();
//! # Ok::<(), quakemap::error::QuakeMapError>(())
//! # });
//! ```
//!
//! # Main components
//!
//! Everything revolves around the
//!
//! * [`Map`](map::Map) struct, which holds the current [`MapView`], a collection of
//! * [`layers`](layer) that contain the data and know how it should be displayed, and the
//! * [`controls`](control) that model the interactive widgets: the magnitude
//!   [`LegendControl`](control::LegendControl) and the
//!   [`LayerSwitcher`](control::LayerSwitcher) that picks the exclusive basemap and
//!   toggles the overlays.
//!
//! Layers do not draw pixels themselves. Rendering a frame collects primitives (markers,
//! strokes, tile surfaces) into a [`RenderBundle`](render::RenderBundle), which any
//! concrete rendering front end can consume. This keeps the magnitude-to-visual mapping
//! fully testable without a GPU or a network connection.

mod color;
pub mod client;
pub mod config;
pub mod control;
pub mod error;
pub mod feature;
pub mod layer;
pub mod magnitude;
pub mod map;
pub mod popup;
pub mod render;
mod view;

pub use color::Color;
pub use view::MapView;
