//! Render primitives produced by layers.
//!
//! Layers do not draw pixels. Rendering a frame collects the primitives of every visible
//! layer into a [`RenderBundle`]; a concrete rendering front end consumes the bundle and
//! is free to rasterize, lay out DOM nodes or write SVG. The bundle is also what the
//! tests inspect to verify the data-to-visual mapping.

use geo_types::{Geometry, Point};

use crate::color::Color;

/// Fill and outline parameters of a circular marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointPaint {
    /// Fill color of the marker.
    pub fill: Color,
    /// Outline color of the marker.
    pub outline: Color,
    /// Outline width in pixels.
    pub outline_width: f64,
    /// Fill opacity in the `0.0..=1.0` range.
    pub opacity: f64,
}

/// Stroke parameters of a line geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokePaint {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f64,
}

/// A circular marker anchored to a geographic point.
#[derive(Debug, Clone)]
pub struct Marker {
    /// Anchor point of the marker (x is longitude, y is latitude).
    pub position: Point<f64>,
    /// Radius of the marker in pixels. May be negative for degenerate input; the
    /// front end decides whether to clamp or discard such markers.
    pub radius: f64,
    /// Paint of the marker.
    pub paint: PointPaint,
    /// Popup body shown when the marker is activated.
    pub popup: Option<String>,
}

/// A stroked geometry.
#[derive(Debug, Clone)]
pub struct Stroke {
    /// Geometry to stroke.
    pub geometry: Geometry<f64>,
    /// Paint of the stroke.
    pub paint: StrokePaint,
}

/// A tile basemap surface to be drawn below the vector primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSurface {
    /// Style identifier of the tile source.
    pub style_id: String,
    /// Maximum zoom level the tile source provides.
    pub max_zoom: u32,
}

/// Primitives collected from the visible layers for a single frame.
#[derive(Debug, Default)]
pub struct RenderBundle {
    markers: Vec<Marker>,
    strokes: Vec<Stroke>,
    tile_surfaces: Vec<TileSurface>,
}

impl RenderBundle {
    /// Adds a marker to the bundle.
    pub fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    /// Adds a stroked geometry to the bundle.
    pub fn add_stroke(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// Adds a tile surface to the bundle.
    pub fn add_tile_surface(&mut self, surface: TileSurface) {
        self.tile_surfaces.push(surface);
    }

    /// Markers collected into the bundle, in layer order.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Stroked geometries collected into the bundle, in layer order.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Tile surfaces collected into the bundle, in layer order.
    pub fn tile_surfaces(&self) -> &[TileSurface] {
        &self.tile_surfaces
    }

    /// Returns true if nothing was collected.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty() && self.strokes.is_empty() && self.tile_surfaces.is_empty()
    }
}
