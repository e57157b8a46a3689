//! Layer switcher control.
//!
//! The switcher owns two groups of entries pointing into the map's layer collection:
//! basemaps, of which exactly one is visible at a time, and overlays, which toggle
//! independently of each other and of the basemap choice.

use crate::error::QuakeMapError;
use crate::map::LayerCollection;

#[derive(Debug, Clone)]
struct SwitcherEntry {
    label: String,
    layer_index: usize,
}

/// Models the layer switching widget: an exclusive basemap choice plus independent
/// overlay toggles.
#[derive(Debug, Clone, Default)]
pub struct LayerSwitcher {
    basemaps: Vec<SwitcherEntry>,
    overlays: Vec<SwitcherEntry>,
    active_basemap: usize,
}

impl LayerSwitcher {
    /// Registers a basemap entry pointing at the layer with the given collection index.
    /// The first registered basemap becomes the active one.
    pub fn add_basemap(&mut self, label: impl Into<String>, layer_index: usize) {
        self.basemaps.push(SwitcherEntry {
            label: label.into(),
            layer_index,
        });
    }

    /// Registers an overlay entry pointing at the layer with the given collection index.
    pub fn add_overlay(&mut self, label: impl Into<String>, layer_index: usize) {
        self.overlays.push(SwitcherEntry {
            label: label.into(),
            layer_index,
        });
    }

    /// Labels of the registered basemaps, in registration order.
    pub fn basemap_labels(&self) -> impl Iterator<Item = &str> {
        self.basemaps.iter().map(|entry| entry.label.as_str())
    }

    /// Labels of the registered overlays, in registration order.
    pub fn overlay_labels(&self) -> impl Iterator<Item = &str> {
        self.overlays.iter().map(|entry| entry.label.as_str())
    }

    /// Label of the currently active basemap, if any basemap is registered.
    pub fn active_basemap(&self) -> Option<&str> {
        self.basemaps
            .get(self.active_basemap)
            .map(|entry| entry.label.as_str())
    }

    /// Makes the basemap with the given label the only visible one.
    ///
    /// Returns [`QuakeMapError::NotFound`] if no basemap with such label is registered;
    /// the visibility state is left unchanged in that case.
    pub fn select_basemap(
        &mut self,
        label: &str,
        layers: &mut LayerCollection,
    ) -> Result<(), QuakeMapError> {
        let selected = self
            .basemaps
            .iter()
            .position(|entry| entry.label == label)
            .ok_or(QuakeMapError::NotFound)?;

        for (i, entry) in self.basemaps.iter().enumerate() {
            if i == selected {
                layers.show(entry.layer_index);
            } else {
                layers.hide(entry.layer_index);
            }
        }
        self.active_basemap = selected;

        Ok(())
    }

    /// Flips the visibility of the overlay with the given label and returns the new
    /// visibility state.
    pub fn toggle_overlay(
        &mut self,
        label: &str,
        layers: &mut LayerCollection,
    ) -> Result<bool, QuakeMapError> {
        let entry = self
            .overlays
            .iter()
            .find(|entry| entry.label == label)
            .ok_or(QuakeMapError::NotFound)?;

        let visible = !layers.is_visible(entry.layer_index);
        if visible {
            layers.show(entry.layer_index);
        } else {
            layers.hide(entry.layer_index);
        }

        Ok(visible)
    }
}
