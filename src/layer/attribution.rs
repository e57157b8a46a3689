//! Attributions credit the source of the data a layer displays.

/// An attribution: a citation text with an optional URL pointing at the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribution {
    text: String,
    url: Option<String>,
}

impl Attribution {
    /// Creates a new attribution with the given text and optional URL.
    pub fn new(text: impl Into<String>, url: Option<String>) -> Self {
        Self {
            text: text.into(),
            url,
        }
    }

    /// Citation text of the attribution.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// URL with more information about the source, if any.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}
