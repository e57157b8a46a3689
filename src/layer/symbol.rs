//! Symbols are used to render features in a [`FeatureLayer`](super::FeatureLayer).
//!
//! The [`Symbol`] trait is designed to be easy to implement, so an application may
//! provide rendering logic for the features it uses. The two implementations here cover
//! the earthquake markers and the fault line strokes.

use crate::color::Color;
use crate::feature::{Earthquake, FaultLine};
use crate::magnitude::{magnitude_color, marker_radius};
use crate::popup::popup_body;
use crate::render::{Marker, PointPaint, RenderBundle, Stroke, StrokePaint};

/// Symbol is used to draw a feature `F` to the map.
pub trait Symbol<F> {
    /// Converts the given `feature` into the set of primitives that should be rendered.
    ///
    /// If a feature should not be rendered, nothing needs to be added to the bundle.
    /// There is no limit on the number of primitives a single feature can produce.
    fn render(&self, feature: &F, bundle: &mut RenderBundle);
}

const MARKER_OUTLINE: Color = Color::BLACK;
const MARKER_OUTLINE_WIDTH: f64 = 1.0;
const MARKER_FILL_OPACITY: f64 = 0.7;

/// Renders a seismic event as a circular marker.
///
/// The radius is `5 × magnitude` and the fill color comes from the magnitude scale, so
/// stronger events draw larger and hotter. Every marker carries a popup with the event
/// details.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuakeMarkerSymbol;

impl Symbol<Earthquake> for QuakeMarkerSymbol {
    fn render(&self, feature: &Earthquake, bundle: &mut RenderBundle) {
        let magnitude = feature.properties().magnitude();
        bundle.add_marker(Marker {
            position: feature.point(),
            radius: marker_radius(magnitude),
            paint: PointPaint {
                fill: magnitude_color(magnitude),
                outline: MARKER_OUTLINE,
                outline_width: MARKER_OUTLINE_WIDTH,
                opacity: MARKER_FILL_OPACITY,
            },
            popup: Some(popup_body(feature.properties())),
        });
    }
}

const FAULT_LINE_COLOR: Color = Color::from_hex("#ffa500");
const FAULT_LINE_WIDTH: f64 = 3.0;

/// Renders a fault line with a uniform stroke.
#[derive(Debug, Clone, Copy)]
pub struct FaultLineSymbol {
    color: Color,
}

impl FaultLineSymbol {
    /// Creates a symbol with the given stroke color.
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Default for FaultLineSymbol {
    fn default() -> Self {
        Self::new(FAULT_LINE_COLOR)
    }
}

impl Symbol<FaultLine> for FaultLineSymbol {
    fn render(&self, feature: &FaultLine, bundle: &mut RenderBundle) {
        bundle.add_stroke(Stroke {
            geometry: feature.geometry().clone(),
            paint: StrokePaint {
                color: self.color,
                width: FAULT_LINE_WIDTH,
            },
        });
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use geo_types::{line_string, Geometry, Point};

    use super::*;
    use crate::feature::EarthquakeProperties;

    fn quake(mag: f64) -> Earthquake {
        Earthquake::new(
            Point::new(142.3, 38.1),
            EarthquakeProperties {
                mag: Some(mag),
                title: Some("M 4.2 - 10km N of Town".into()),
                code: Some("us1234".into()),
                time: Some(1_700_000_000_000),
                url: Some("https://example.com/e1".into()),
            },
        )
    }

    #[test]
    fn marker_follows_the_magnitude_rules() {
        let mut bundle = RenderBundle::default();
        QuakeMarkerSymbol.render(&quake(4.2), &mut bundle);

        assert_eq!(bundle.markers().len(), 1);
        let marker = &bundle.markers()[0];
        assert_relative_eq!(marker.radius, 21.0);
        assert_eq!(marker.paint.fill, Color::from_hex("#EF863E"));
        assert_eq!(marker.paint.outline, Color::BLACK);
        assert_relative_eq!(marker.paint.outline_width, 1.0);
        assert_relative_eq!(marker.paint.opacity, 0.7);
    }

    #[test]
    fn marker_popup_carries_event_details() {
        let mut bundle = RenderBundle::default();
        QuakeMarkerSymbol.render(&quake(4.2), &mut bundle);

        let popup = bundle.markers()[0].popup.as_deref().expect("popup missing");
        assert!(popup.contains("M 4.2 - 10km N of Town"));
        assert!(popup.contains("https://example.com/e1"));
    }

    #[test]
    fn negative_magnitude_marker_is_degenerate_but_rendered() {
        let mut bundle = RenderBundle::default();
        QuakeMarkerSymbol.render(&quake(-1.0), &mut bundle);

        let marker = &bundle.markers()[0];
        assert_relative_eq!(marker.radius, -5.0);
        assert_eq!(marker.paint.fill, Color::from_hex("#ffffff"));
    }

    #[test]
    fn fault_line_stroke_is_uniform_orange() {
        let geometry = Geometry::LineString(line_string![
            (x: 0.0, y: 0.0),
            (x: 10.0, y: 10.0),
        ]);
        let mut bundle = RenderBundle::default();
        FaultLineSymbol::default().render(&FaultLine::new(geometry), &mut bundle);

        assert_eq!(bundle.strokes().len(), 1);
        assert_eq!(bundle.strokes()[0].paint.color, Color::from_hex("#ffa500"));
    }
}
