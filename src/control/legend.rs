//! Magnitude legend control.

use crate::color::Color;
use crate::control::ControlPosition;
use crate::magnitude::{magnitude_color, LEGEND_BUCKETS};

/// One row of the legend: a color swatch with its bucket label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    /// Label of the bucket.
    pub label: &'static str,
    /// Swatch color, evaluated from the magnitude scale at the bucket's lower bound.
    pub color: Color,
}

/// A corner-anchored panel listing the magnitude buckets with their colors.
///
/// The legend is built once at map composition time and is static afterwards: it
/// reflects the fixed scale, not the data.
#[derive(Debug, Clone)]
pub struct LegendControl {
    title: String,
    position: ControlPosition,
    entries: Vec<LegendEntry>,
}

impl LegendControl {
    /// Builds the magnitude legend anchored to the bottom right corner.
    pub fn magnitude() -> Self {
        Self {
            title: "Magnitude".into(),
            position: ControlPosition::BottomRight,
            entries: LEGEND_BUCKETS
                .iter()
                .map(|&(label, lower_bound)| LegendEntry {
                    label,
                    color: magnitude_color(lower_bound),
                })
                .collect(),
        }
    }

    /// Title of the panel.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Corner the panel is anchored to.
    pub fn position(&self) -> ControlPosition {
        self.position
    }

    /// Rows of the panel, in display order.
    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_exactly_six_entries_in_fixed_order() {
        let legend = LegendControl::magnitude();
        let labels: Vec<_> = legend.entries().iter().map(|entry| entry.label).collect();
        assert_eq!(labels, ["0-1", "1-2", "2-3", "3-4", "4-5", "5+"]);
    }

    #[test]
    fn swatches_match_the_magnitude_scale() {
        let legend = LegendControl::magnitude();
        for (i, entry) in legend.entries().iter().enumerate() {
            assert_eq!(entry.color, magnitude_color(i as f64));
        }
    }

    #[test]
    fn is_anchored_bottom_right() {
        let legend = LegendControl::magnitude();
        assert_eq!(legend.position(), ControlPosition::BottomRight);
        assert_eq!(legend.title(), "Magnitude");
    }
}
