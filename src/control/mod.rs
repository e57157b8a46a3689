//! Controls model the interactive widgets attached to the map.
//!
//! A control does not handle raw input events itself; it exposes the state and the
//! operations a front end wires its widgets to. The [`LegendControl`] is static after
//! construction, the [`LayerSwitcher`] mutates layer visibility on behalf of the user.

pub mod layer_switcher;
pub mod legend;

pub use layer_switcher::LayerSwitcher;
pub use legend::{LegendControl, LegendEntry};

/// Corner of the map a control is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPosition {
    /// Top left corner.
    TopLeft,
    /// Top right corner.
    TopRight,
    /// Bottom left corner.
    BottomLeft,
    /// Bottom right corner.
    BottomRight,
}
