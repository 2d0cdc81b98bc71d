pub mod catalog;

pub use catalog::{standalone_svg, CatalogError, GlyphCatalog, InMemoryGlyphCatalog, SharedGlyphSource};
