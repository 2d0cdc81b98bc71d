//! GlyphCatalog trait for abstracting where glyph sources come from.
//!
//! The compiler never owns the glyph catalog: it asks a catalog for the raw
//! SVG-subset source of an identifier and parses it fresh per document.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Error type for catalog lookups.
#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    #[error("Missing SVG for glyph: {0}")]
    UnknownGlyph(String),

    #[error("Failed to load glyph '{id}': {message}")]
    LoadFailed { id: String, message: String },
}

/// Shared glyph source text (reference-counted).
pub type SharedGlyphSource = Arc<str>;

/// A lookup from glyph identifiers (e.g. an emoji) to SVG-subset source strings.
///
/// # Implementations
///
/// - `InMemoryGlyphCatalog`: pre-populated map (always available)
/// - `FilesystemGlyphCatalog` (in `glyphtex-resource`): one `<id>.svg` file per glyph
pub trait GlyphCatalog: Send + Sync + Debug {
    /// Load the SVG-subset source for `id`.
    ///
    /// Returns `CatalogError::UnknownGlyph` when the catalog has no entry.
    fn source(&self, id: &str) -> Result<SharedGlyphSource, CatalogError>;

    /// Check if the catalog has an entry for `id`.
    fn contains(&self, id: &str) -> bool;

    /// Returns a human-readable name for this catalog (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// Wraps a glyph fragment in a standalone SVG document for previewing.
pub fn standalone_svg(fragment: &str) -> String {
    format!(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 36 36">{fragment}</svg>"#)
}

/// An in-memory glyph catalog.
#[derive(Debug, Default)]
pub struct InMemoryGlyphCatalog {
    glyphs: RwLock<HashMap<String, SharedGlyphSource>>,
}

impl InMemoryGlyphCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from `(id, source)` pairs.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<SharedGlyphSource>,
    {
        let glyphs = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            glyphs: RwLock::new(glyphs),
        }
    }

    /// Add (or replace) a glyph source.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::LoadFailed` if the internal lock is poisoned.
    pub fn add(
        &self,
        id: impl Into<String>,
        source: impl Into<SharedGlyphSource>,
    ) -> Result<(), CatalogError> {
        let id = id.into();
        let mut glyphs = self.glyphs.write().map_err(|_| CatalogError::LoadFailed {
            id: id.clone(),
            message: "glyph catalog lock poisoned".to_string(),
        })?;
        glyphs.insert(id, source.into());
        Ok(())
    }

    /// Returns `None` if the lock is poisoned or the glyph doesn't exist.
    pub fn remove(&self, id: &str) -> Option<SharedGlyphSource> {
        self.glyphs.write().ok()?.remove(id)
    }

    pub fn len(&self) -> usize {
        self.glyphs.read().map(|g| g.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.read().map(|g| g.is_empty()).unwrap_or(true)
    }
}

impl GlyphCatalog for InMemoryGlyphCatalog {
    fn source(&self, id: &str) -> Result<SharedGlyphSource, CatalogError> {
        let glyphs = self.glyphs.read().map_err(|_| CatalogError::LoadFailed {
            id: id.to_string(),
            message: "glyph catalog lock poisoned".to_string(),
        })?;
        glyphs
            .get(id)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownGlyph(id.to_string()))
    }

    fn contains(&self, id: &str) -> bool {
        self.glyphs
            .read()
            .map(|g| g.contains_key(id))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "InMemoryGlyphCatalog"
    }
}
