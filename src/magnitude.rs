//! Magnitude-keyed styling rules.
//!
//! The magnitude number line is partitioned into left-closed buckets, each mapped to a
//! fixed color. The same scale drives both the marker fill colors and the legend
//! swatches, so the two can never disagree.

use crate::color::Color;

const MAG_5_PLUS: Color = Color::from_hex("#EF3E3E");
const MAG_4_TO_5: Color = Color::from_hex("#EF863E");
const MAG_3_TO_4: Color = Color::from_hex("#EFD93E");
const MAG_2_TO_3: Color = Color::from_hex("#E2EF3E");
const MAG_1_TO_2: Color = Color::from_hex("#BAEF3E");
const MAG_0_TO_1: Color = Color::from_hex("#8FEF3E");
const MAG_BELOW_0: Color = Color::from_hex("#ffffff");

/// Marker radius in pixels per unit of magnitude.
const RADIUS_PER_MAGNITUDE: f64 = 5.0;

/// Labels of the legend buckets with the lower magnitude bound of each bucket.
pub const LEGEND_BUCKETS: [(&str, f64); 6] = [
    ("0-1", 0.0),
    ("1-2", 1.0),
    ("2-3", 2.0),
    ("3-4", 3.0),
    ("4-5", 4.0),
    ("5+", 5.0),
];

/// Returns the marker color for the given magnitude.
///
/// Thresholds are evaluated from the highest down, so the highest matching lower bound
/// wins. Values below zero, and any value that compares false against all thresholds
/// (`NaN` included), fall through to white.
pub fn magnitude_color(magnitude: f64) -> Color {
    if magnitude >= 5.0 {
        MAG_5_PLUS
    } else if magnitude >= 4.0 {
        MAG_4_TO_5
    } else if magnitude >= 3.0 {
        MAG_3_TO_4
    } else if magnitude >= 2.0 {
        MAG_2_TO_3
    } else if magnitude >= 1.0 {
        MAG_1_TO_2
    } else if magnitude >= 0.0 {
        MAG_0_TO_1
    } else {
        MAG_BELOW_0
    }
}

/// Returns the marker radius for the given magnitude.
///
/// The radius is exactly `5 × magnitude`. A negative magnitude produces a negative,
/// degenerate radius; this mirrors the source data verbatim and is left to the
/// rendering front end to clamp or discard.
pub fn marker_radius(magnitude: f64) -> f64 {
    RADIUS_PER_MAGNITUDE * magnitude
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn thresholds_pick_first_match_from_the_top() {
        assert_eq!(magnitude_color(7.3), Color::from_hex("#EF3E3E"));
        assert_eq!(magnitude_color(5.0), Color::from_hex("#EF3E3E"));
        assert_eq!(magnitude_color(4.999), Color::from_hex("#EF863E"));
        assert_eq!(magnitude_color(4.0), Color::from_hex("#EF863E"));
        assert_eq!(magnitude_color(3.5), Color::from_hex("#EFD93E"));
        assert_eq!(magnitude_color(2.0), Color::from_hex("#E2EF3E"));
        assert_eq!(magnitude_color(1.1), Color::from_hex("#BAEF3E"));
        assert_eq!(magnitude_color(0.0), Color::from_hex("#8FEF3E"));
    }

    #[test]
    fn negative_magnitude_is_white() {
        assert_eq!(magnitude_color(-1.0), Color::from_hex("#ffffff"));
        assert_eq!(magnitude_color(-0.001), Color::from_hex("#ffffff"));
    }

    #[test]
    fn nan_falls_through_to_white() {
        assert_eq!(magnitude_color(f64::NAN), Color::from_hex("#ffffff"));
    }

    #[test]
    fn radius_is_five_times_magnitude() {
        assert_relative_eq!(marker_radius(4.2), 21.0);
        assert_relative_eq!(marker_radius(0.0), 0.0);
        // Degenerate but reproduced verbatim.
        assert_relative_eq!(marker_radius(-1.0), -5.0);
    }

    #[test]
    fn legend_buckets_are_in_fixed_order() {
        let labels: Vec<_> = LEGEND_BUCKETS.iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, ["0-1", "1-2", "2-3", "3-4", "4-5", "5+"]);
    }

    #[test]
    fn legend_bounds_match_their_buckets() {
        for (_, lower) in LEGEND_BUCKETS {
            assert_eq!(magnitude_color(lower), magnitude_color(lower + 0.5));
        }
    }
}
