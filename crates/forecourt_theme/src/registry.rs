//! Document style registry and theme injection
//!
//! Models the live document's style tree as an ordered arena of
//! id-keyed style elements with replace-on-write semantics. The themed
//! ruleset is a singleton under [`THEME_STYLE_ID`]: applying removes any
//! prior element with that id before the new one lands, and teardown is
//! idempotent.

use std::sync::{Arc, RwLock};

use crate::css::{render_css, THEME_STYLE_ID};
use crate::tokens::DerivedPalette;

/// One style element: an id and its CSS text
#[derive(Clone, Debug, PartialEq)]
pub struct StyleElement {
    pub id: String,
    pub css: String,
}

/// Ordered id-keyed style elements for one document.
///
/// At most one element per id; `apply` replaces in place so element order
/// stays stable across palette changes.
#[derive(Debug, Default)]
pub struct StyleRegistry {
    elements: Vec<StyleElement>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or replace the element with the given id.
    pub fn apply(&mut self, id: &str, css: String) {
        if let Some(existing) = self.elements.iter_mut().find(|e| e.id == id) {
            existing.css = css;
        } else {
            self.elements.push(StyleElement {
                id: id.to_string(),
                css,
            });
        }
    }

    /// Remove the element with the given id. Returns whether anything was
    /// removed; removing an absent id is a no-op, never an error.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.elements.len();
        self.elements.retain(|e| e.id != id);
        self.elements.len() != before
    }

    /// CSS text of the element with the given id, if present
    pub fn get(&self, id: &str) -> Option<&str> {
        self.elements
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.css.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.iter().any(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StyleElement> {
        self.elements.iter()
    }
}

/// Shared handle to one document's style registry
pub type SharedRegistry = Arc<RwLock<StyleRegistry>>;

/// Fresh shared registry for one document
pub fn shared_registry() -> SharedRegistry {
    Arc::new(RwLock::new(StyleRegistry::new()))
}

/// Live theme injection into a document.
///
/// Applying installs the palette's ruleset under [`THEME_STYLE_ID`],
/// replacing any prior one synchronously. Dropping the handle removes the
/// ruleset again; a second removal of the same id is a no-op.
pub struct ThemeInjection {
    registry: SharedRegistry,
}

impl ThemeInjection {
    /// Render the palette and install it under the well-known id.
    pub fn apply(registry: &SharedRegistry, palette: &DerivedPalette, scope_attr: &str) -> Self {
        let css = render_css(palette, scope_attr);
        registry.write().unwrap().apply(THEME_STYLE_ID, css);
        tracing::debug!(id = THEME_STYLE_ID, scope_attr, "installed theme overrides");
        Self {
            registry: Arc::clone(registry),
        }
    }

    /// Replace the installed ruleset with one for a new palette.
    pub fn reapply(&self, palette: &DerivedPalette, scope_attr: &str) {
        let css = render_css(palette, scope_attr);
        self.registry.write().unwrap().apply(THEME_STYLE_ID, css);
        tracing::debug!(id = THEME_STYLE_ID, scope_attr, "replaced theme overrides");
    }

    /// Explicit teardown; equivalent to dropping the handle.
    pub fn release(self) {}
}

impl Drop for ThemeInjection {
    fn drop(&mut self) {
        if self.registry.write().unwrap().remove(THEME_STYLE_ID) {
            tracing::debug!(id = THEME_STYLE_ID, "removed theme overrides");
        }
    }
}
