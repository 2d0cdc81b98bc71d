//! Filesystem-based glyph catalog.
//!
//! Each glyph lives in `<base>/<id>.svg`. Identifiers are file stems, never
//! paths: anything that could escape the base directory is rejected.

use glyphtex_traits::{CatalogError, GlyphCatalog, SharedGlyphSource};
use std::path::{Component, Path, PathBuf};

/// A glyph catalog backed by a directory of `.svg` fragments.
#[derive(Debug)]
pub struct FilesystemGlyphCatalog {
    base_path: PathBuf,
}

impl FilesystemGlyphCatalog {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base(&self) -> &Path {
        &self.base_path
    }

    /// Resolves `id` to its file, or `None` if the id is not a plain file stem.
    fn resolve(&self, id: &str) -> Option<PathBuf> {
        if id.is_empty() || id.contains(['/', '\\']) {
            return None;
        }
        let file_name = format!("{id}.svg");
        let mut components = Path::new(&file_name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Some(self.base_path.join(file_name)),
            _ => None,
        }
    }
}

impl GlyphCatalog for FilesystemGlyphCatalog {
    fn source(&self, id: &str) -> Result<SharedGlyphSource, CatalogError> {
        let Some(path) = self.resolve(id) else {
            log::warn!("Rejected glyph id '{}' (path traversal blocked)", id);
            return Err(CatalogError::UnknownGlyph(id.to_string()));
        };

        match std::fs::read_to_string(&path) {
            Ok(text) => {
                log::debug!("Loaded glyph '{}' from {}", id, path.display());
                Ok(text.into())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(CatalogError::UnknownGlyph(id.to_string()))
            }
            Err(e) => Err(CatalogError::LoadFailed {
                id: id.to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn contains(&self, id: &str) -> bool {
        self.resolve(id).map(|p| p.is_file()).unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "FilesystemGlyphCatalog"
    }
}
