//! Glyph catalogs for the glyphtex compiler.
//!
//! ## Available Catalogs
//!
//! - [`FilesystemGlyphCatalog`]: one `<id>.svg` file per glyph in a directory
//!
//! ## Re-exports
//!
//! - [`InMemoryGlyphCatalog`]: pre-populated in-memory map

mod filesystem;

pub use filesystem::FilesystemGlyphCatalog;

pub use glyphtex_traits::InMemoryGlyphCatalog;
