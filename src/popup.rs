//! Popup content for earthquake markers.

use chrono::DateTime;

use crate::feature::EarthquakeProperties;

/// Formats the popup body for a single seismic event.
///
/// The body contains the event title, its code, a human-readable timestamp, the raw
/// magnitude value and a link to the detail page. No validation is performed: missing
/// fields render as empty text and a `NaN` magnitude renders as `NaN`. This is a display
/// path only, a degraded popup is preferred over a missing one.
pub fn popup_body(properties: &EarthquakeProperties) -> String {
    format!(
        "<h4>{title}</h4>\n\
         <b>Code: </b>{code}<br>\n\
         <b>Time: </b>{time}<br>\n\
         <b>Magnitude: </b>{magnitude}<br>\n\
         <a href=\"{url}\" target=\"_blank\">More details</a>",
        title = properties.title.as_deref().unwrap_or(""),
        code = properties.code.as_deref().unwrap_or(""),
        time = properties.time.map(format_timestamp).unwrap_or_default(),
        magnitude = properties.magnitude(),
        url = properties.url.as_deref().unwrap_or(""),
    )
}

/// Converts epoch milliseconds into a human-readable timestamp.
///
/// Out-of-range values render as empty text, same as a missing field.
fn format_timestamp(epoch_ms: i64) -> String {
    DateTime::from_timestamp_millis(epoch_ms)
        .map(|time| time.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_default()
}
