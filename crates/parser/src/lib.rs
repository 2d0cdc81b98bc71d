//! Parser for the SVG subset used by glyph catalogs.
//!
//! Recognizes `<g>`, `<path>`, `<circle>` and `<ellipse>`; every other tag is
//! skipped with a warning. The result is always a non-empty, flat list of
//! groups: one implicit leading group plus one per `<g>` open and close event.

pub mod attributes;
pub mod builder;
pub mod error;
pub mod parser;

pub use attributes::OwnedAttributes;
pub use builder::{FlatGroupBuilder, GlyphBuilder, Tag};
pub use error::{Location, ParseError};

use glyphtex_types::{Color, Group};

/// Parses one SVG-subset fragment into the flattened group list.
pub fn parse(svg: &str) -> Result<Vec<Group>, ParseError> {
    let mut builder = FlatGroupBuilder::new();
    parser::parse_glyph_content(svg, &mut builder)?;
    let groups = builder.finish();
    log::debug!("Parsed glyph into {} groups", groups.len());
    Ok(groups)
}

/// Every fill encountered in a parsed glyph, group fills included, in
/// document order. Absent fills are reported as `None`.
pub fn glyph_fills(groups: &[Group]) -> Vec<Option<Color>> {
    groups.iter().flat_map(Group::fills).collect()
}
