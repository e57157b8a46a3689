use crate::layer::Layer;

/// Collection of layers with their visibility flags.
///
/// When a frame is rendered, all visible layers are drawn in the order they are stored
/// in the collection. A layer can be temporarily hidden with [`LayerCollection::hide`];
/// hidden layers are skipped by the renderer but retain their place in the collection,
/// so indices into the collection stay stable.
#[derive(Default)]
pub struct LayerCollection(Vec<LayerEntry>);

struct LayerEntry {
    layer: Box<dyn Layer>,
    is_hidden: bool,
}

impl LayerCollection {
    /// Adds the layer to the end of the collection.
    pub fn push(&mut self, layer: impl Layer + 'static) {
        self.0.push(LayerEntry {
            layer: Box::new(layer),
            is_hidden: false,
        });
    }

    /// Returns the count of layers in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the collection contains zero layers.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a layer at `index`, or `None` if index is out of bounds.
    pub fn get(&self, index: usize) -> Option<&dyn Layer> {
        self.0.get(index).map(|entry| &*entry.layer)
    }

    /// Sets the layer at `index` as invisible.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn hide(&mut self, index: usize) {
        self.0[index].is_hidden = true;
    }

    /// Sets the layer at `index` as visible.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn show(&mut self, index: usize) {
        self.0[index].is_hidden = false;
    }

    /// Returns true if the layer at `index` is not hidden.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn is_visible(&self, index: usize) -> bool {
        !self.0[index].is_hidden
    }

    /// Iterates over all layers in the collection.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Layer> + '_ {
        self.0.iter().map(|entry| &*entry.layer)
    }

    /// Iterates over all visible layers in the collection.
    pub fn iter_visible(&self) -> impl Iterator<Item = &dyn Layer> + '_ {
        self.0
            .iter()
            .filter(|entry| !entry.is_hidden)
            .map(|entry| &*entry.layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::FaultLine;
    use crate::layer::symbol::FaultLineSymbol;
    use crate::layer::FeatureLayer;

    fn stub_layer(name: &str) -> FeatureLayer<FaultLine, FaultLineSymbol> {
        FeatureLayer::new(name, Vec::new(), FaultLineSymbol::default())
    }

    #[test]
    fn layers_are_visible_by_default() {
        let mut collection = LayerCollection::default();
        collection.push(stub_layer("A"));

        assert_eq!(collection.len(), 1);
        assert!(collection.is_visible(0));
    }

    #[test]
    fn hiding_keeps_the_layer_in_place() {
        let mut collection = LayerCollection::default();
        collection.push(stub_layer("A"));
        collection.push(stub_layer("B"));

        collection.hide(0);
        assert_eq!(collection.len(), 2);
        assert!(!collection.is_visible(0));

        let visible: Vec<_> = collection.iter_visible().map(|layer| layer.name()).collect();
        assert_eq!(visible, ["B"]);

        collection.show(0);
        assert_eq!(collection.iter_visible().count(), 2);
    }

    #[test]
    fn get_is_bounds_checked() {
        let collection = LayerCollection::default();
        assert!(collection.get(0).is_none());
        assert!(collection.is_empty());
    }
}
