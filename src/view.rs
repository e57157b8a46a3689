use geo_types::Point;

/// Map view specifies the part of the world that should be displayed: a geographic
/// center point and a zoom level of the tile scheme the basemap uses.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    center: Point<f64>,
    zoom: u32,
}

impl MapView {
    /// Creates a new view.
    pub fn new(center: Point<f64>, zoom: u32) -> Self {
        Self { center, zoom }
    }

    /// Creates a view centered at the given latitude and longitude.
    pub fn with_latlon(lat: f64, lon: f64, zoom: u32) -> Self {
        Self::new(Point::new(lon, lat), zoom)
    }

    /// Center point of the view (x is longitude, y is latitude).
    pub fn center(&self) -> Point<f64> {
        self.center
    }

    /// Zoom level of the view.
    pub fn zoom(&self) -> u32 {
        self.zoom
    }
}
