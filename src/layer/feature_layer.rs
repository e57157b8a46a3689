//! Feature layers render custom sets of geographic objects.

use crate::layer::attribution::Attribution;
use crate::layer::symbol::Symbol;
use crate::layer::Layer;
use crate::render::RenderBundle;
use crate::view::MapView;

/// A layer that renders a set of features with the given symbol.
///
/// The layer owns its features and never mutates them; rendering converts each feature
/// into primitives through the symbol. An empty feature set is a valid layer that
/// renders nothing.
pub struct FeatureLayer<F, S> {
    name: String,
    features: Vec<F>,
    symbol: S,
    attribution: Option<Attribution>,
}

impl<F, S> FeatureLayer<F, S> {
    /// Creates a new layer with the given display name, features and symbol.
    pub fn new(name: impl Into<String>, features: Vec<F>, symbol: S) -> Self {
        Self {
            name: name.into(),
            features,
            symbol,
            attribution: None,
        }
    }

    /// Sets the attribution of the layer.
    pub fn with_attribution(mut self, attribution: Attribution) -> Self {
        self.attribution = Some(attribution);
        self
    }

    /// Features of the layer.
    pub fn features(&self) -> &[F] {
        &self.features
    }
}

impl<F, S> Layer for FeatureLayer<F, S>
where
    F: Send + Sync,
    S: Symbol<F> + Send + Sync,
{
    fn render(&self, _view: &MapView, bundle: &mut RenderBundle) {
        for feature in &self.features {
            self.symbol.render(feature, bundle);
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn attribution(&self) -> Option<Attribution> {
        self.attribution.clone()
    }
}
