//! Feature models for the two datasets.
//!
//! An [`Earthquake`] is a point feature with the properties the popup and the marker
//! styling need. A [`FaultLine`] is an arbitrary geometry with no required properties;
//! fault lines are styled uniformly.

use geo_types::{Geometry, Point};
use geojson::{FeatureCollection, GeoJson};
use serde::Deserialize;

use crate::error::QuakeMapError;

/// Properties of a seismic event as provided by the events feed.
///
/// All fields are optional: the feed is allowed to omit or null any of them, and a
/// degenerate marker or popup is preferred over a failed page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EarthquakeProperties {
    /// Magnitude of the event.
    pub mag: Option<f64>,
    /// Human-readable event title.
    pub title: Option<String>,
    /// Identification code of the event.
    pub code: Option<String>,
    /// Time of the event in epoch milliseconds.
    pub time: Option<i64>,
    /// URL of the event detail page.
    pub url: Option<String>,
}

impl EarthquakeProperties {
    /// Magnitude of the event, `NaN` when the feed did not provide one.
    pub fn magnitude(&self) -> f64 {
        self.mag.unwrap_or(f64::NAN)
    }
}

/// A single seismic event: a geographic point plus its properties.
#[derive(Debug, Clone)]
pub struct Earthquake {
    point: Point<f64>,
    properties: EarthquakeProperties,
}

impl Earthquake {
    /// Creates a new event feature.
    pub fn new(point: Point<f64>, properties: EarthquakeProperties) -> Self {
        Self { point, properties }
    }

    /// Location of the event (x is longitude, y is latitude).
    pub fn point(&self) -> Point<f64> {
        self.point
    }

    /// Properties of the event.
    pub fn properties(&self) -> &EarthquakeProperties {
        &self.properties
    }
}

/// A plate boundary segment. Carries geometry only.
#[derive(Debug, Clone)]
pub struct FaultLine {
    geometry: Geometry<f64>,
}

impl FaultLine {
    /// Creates a new fault line feature.
    pub fn new(geometry: Geometry<f64>) -> Self {
        Self { geometry }
    }

    /// Geometry of the boundary segment.
    pub fn geometry(&self) -> &Geometry<f64> {
        &self.geometry
    }
}

/// Converts the events feed into earthquake features.
///
/// Features without a point geometry are skipped. Properties that cannot be decoded are
/// replaced with empty ones, which later render as a degenerate marker and popup.
pub fn earthquakes_from_geojson(geojson: GeoJson) -> Result<Vec<Earthquake>, QuakeMapError> {
    let collection = feature_collection(geojson)?;

    let mut earthquakes = Vec::with_capacity(collection.features.len());
    let mut skipped = 0usize;
    for feature in collection {
        let Some(point) = feature.geometry.as_ref().and_then(point_of) else {
            skipped += 1;
            continue;
        };

        let properties = match feature.properties {
            Some(object) => serde_json::from_value(serde_json::Value::Object(object))
                .unwrap_or_default(),
            None => EarthquakeProperties::default(),
        };

        earthquakes.push(Earthquake::new(point, properties));
    }

    if skipped > 0 {
        log::warn!("Skipped {skipped} event features without a point geometry");
    }

    Ok(earthquakes)
}

/// Converts the plate boundaries dataset into fault line features.
///
/// Any geometry type is accepted; features without a convertible geometry are skipped.
pub fn fault_lines_from_geojson(geojson: GeoJson) -> Result<Vec<FaultLine>, QuakeMapError> {
    let collection = feature_collection(geojson)?;

    let mut fault_lines = Vec::with_capacity(collection.features.len());
    let mut skipped = 0usize;
    for feature in collection {
        match feature.geometry.map(Geometry::<f64>::try_from) {
            Some(Ok(geometry)) => fault_lines.push(FaultLine::new(geometry)),
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        log::warn!("Skipped {skipped} boundary features without a usable geometry");
    }

    Ok(fault_lines)
}

fn feature_collection(geojson: GeoJson) -> Result<FeatureCollection, QuakeMapError> {
    match geojson {
        GeoJson::FeatureCollection(collection) => Ok(collection),
        _ => Err(QuakeMapError::Decoding(
            "expected a feature collection".into(),
        )),
    }
}

fn point_of(geometry: &geojson::Geometry) -> Option<Point<f64>> {
    match &geometry.value {
        geojson::Value::Point(position) => {
            let x = *position.first()?;
            let y = *position.get(1)?;
            Some(Point::new(x, y))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn parse(json: &str) -> GeoJson {
        json.parse().expect("invalid test fixture")
    }

    #[test]
    fn parses_event_features() {
        let geojson = parse(
            r#"{
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "geometry": { "type": "Point", "coordinates": [142.3, 38.1, 29.0] },
                    "properties": {
                        "mag": 4.2,
                        "title": "M 4.2 - 10km N of Town",
                        "code": "us1234",
                        "time": 1700000000000,
                        "url": "https://example.com/e1"
                    }
                }]
            }"#,
        );

        let earthquakes = earthquakes_from_geojson(geojson).unwrap();
        assert_eq!(earthquakes.len(), 1);

        let quake = &earthquakes[0];
        assert_eq!(quake.point(), Point::new(142.3, 38.1));
        assert_eq!(quake.properties().mag, Some(4.2));
        assert_eq!(quake.properties().code.as_deref(), Some("us1234"));
    }

    #[test]
    fn missing_properties_become_degenerate_not_errors() {
        let geojson = parse(
            r#"{
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "geometry": { "type": "Point", "coordinates": [0.0, 0.0] },
                    "properties": null
                }]
            }"#,
        );

        let earthquakes = earthquakes_from_geojson(geojson).unwrap();
        assert_eq!(earthquakes.len(), 1);
        assert!(earthquakes[0].properties().magnitude().is_nan());
        assert!(earthquakes[0].properties().title.is_none());
    }

    #[test]
    fn non_point_event_features_are_skipped() {
        let geojson = parse(
            r#"{
                "type": "FeatureCollection",
                "features": [
                    {
                        "type": "Feature",
                        "geometry": {
                            "type": "LineString",
                            "coordinates": [[0.0, 0.0], [1.0, 1.0]]
                        },
                        "properties": {}
                    },
                    {
                        "type": "Feature",
                        "geometry": { "type": "Point", "coordinates": [10.0, 20.0] },
                        "properties": { "mag": 1.0 }
                    }
                ]
            }"#,
        );

        let earthquakes = earthquakes_from_geojson(geojson).unwrap();
        assert_eq!(earthquakes.len(), 1);
        assert_eq!(earthquakes[0].point(), Point::new(10.0, 20.0));
    }

    #[test]
    fn fault_lines_accept_any_geometry() {
        let geojson = parse(
            r#"{
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "geometry": {
                        "type": "LineString",
                        "coordinates": [[0.0, 0.0], [10.0, 10.0], [20.0, 15.0]]
                    },
                    "properties": { "Name": "some boundary" }
                }]
            }"#,
        );

        let fault_lines = fault_lines_from_geojson(geojson).unwrap();
        assert_eq!(fault_lines.len(), 1);
        assert_matches!(fault_lines[0].geometry(), Geometry::LineString(_));
    }

    #[test]
    fn non_collection_payload_is_a_decoding_error() {
        let geojson = parse(r#"{ "type": "Point", "coordinates": [0.0, 0.0] }"#);
        assert_matches!(
            earthquakes_from_geojson(geojson),
            Err(QuakeMapError::Decoding(_))
        );
    }

    #[test]
    fn empty_collection_is_valid() {
        let geojson = parse(r#"{ "type": "FeatureCollection", "features": [] }"#);
        assert!(earthquakes_from_geojson(geojson).unwrap().is_empty());
    }
}
