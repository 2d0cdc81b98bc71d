//! glyphtex: compiles SVG-subset glyphs into scoped TikZ drawing directives.
//!
//! A document is compiled in two phases. First every color it will reference
//! is collected into a [`ColorCollector`] (gradient endpoints, backgrounds, and
//! the fills of every parsed glyph). The collector is then frozen into a
//! [`ColorRegistry`], and only the registry can emit placements and the
//! palette. [`DocumentPlan`] drives both phases for a whole document.
//!
//! ```no_run
//! use glyphtex::{ColorCollector, Transform};
//!
//! # fn main() -> Result<(), glyphtex::PipelineError> {
//! let groups = glyphtex::parse(r##"<g><circle cx="1" cy="2" r="3" fill="#f00"/></g>"##)?;
//!
//! let mut collector = ColorCollector::new();
//! glyphtex::collect_colors(&mut collector, &groups);
//! let registry = glyphtex::build_registry(collector);
//!
//! let palette = glyphtex::build_palette(&registry)?;
//! let placed = glyphtex::place(&Transform::new(10.0, 20.0, 2.0, -15.0), &groups, &registry)?;
//! println!("{palette}\n{placed}");
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod error;

pub use document::{DocumentPlan, DocumentSpec, Placement};
pub use error::PipelineError;

pub use glyphtex_palette::{ColorCollector, ColorRegistry, RegistryError};
pub use glyphtex_parser::{glyph_fills, ParseError};
pub use glyphtex_render_core::RenderError;
pub use glyphtex_render_tikz::{shade_directive, standalone_document};
pub use glyphtex_resource::FilesystemGlyphCatalog;
pub use glyphtex_traits::{standalone_svg, CatalogError, GlyphCatalog, InMemoryGlyphCatalog};
pub use glyphtex_types::{Circle, Color, ColorFormatError, Element, Ellipse, Group, Path, Transform};

/// Parses one SVG-subset glyph into its flattened group sequence.
pub fn parse(svg: &str) -> Result<Vec<Group>, PipelineError> {
    Ok(glyphtex_parser::parse(svg)?)
}

/// Adds every fill of a parsed glyph, group fills included, to the collector.
pub fn collect_colors(collector: &mut ColorCollector, groups: &[Group]) {
    collector.collect(glyph_fills(groups));
}

/// Ends the collect phase.
pub fn build_registry(collector: ColorCollector) -> ColorRegistry {
    collector.build()
}

/// Emits one glyph placement under the fixed vertical flip.
pub fn place(
    transform: &Transform,
    groups: &[Group],
    registry: &ColorRegistry,
) -> Result<String, PipelineError> {
    Ok(glyphtex_render_tikz::place(transform, groups, registry)?)
}

/// Emits a single element.
pub fn emit(element: &Element, registry: &ColorRegistry) -> Result<String, PipelineError> {
    Ok(glyphtex_render_tikz::emit(element, registry)?)
}

/// Emits the color definitions; must precede every placement in the output.
pub fn build_palette(registry: &ColorRegistry) -> Result<String, PipelineError> {
    Ok(glyphtex_render_tikz::build_palette(registry)?)
}

/// Compiles one glyph on its own into a standalone preview document.
pub fn preview(svg: &str) -> Result<String, PipelineError> {
    let groups = parse(svg)?;
    let mut collector = ColorCollector::new();
    collect_colors(&mut collector, &groups);
    let registry = build_registry(collector);
    log::debug!("Preview: {} groups, {} colors", groups.len(), registry.len());
    Ok(standalone_document(
        &build_palette(&registry)?,
        &place(&Transform::default(), &groups, &registry)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unregistered_color_fails_fast() {
        let groups = parse(r##"<path d="M0 0" fill="#abcdef"/>"##).unwrap();
        let registry = build_registry(ColorCollector::new());
        let err = place(&Transform::default(), &groups, &registry).unwrap_err();
        assert!(err.is_unregistered_color());
    }

    #[test]
    fn test_preview_defines_before_use() {
        let doc = preview(r##"<g fill="#FFAC33"><circle cx="18" cy="18" r="4"/></g>"##).unwrap();
        let define = doc.find(r"\definecolor{c0}{HTML}{ffac33}").unwrap();
        let scope = doc.find(r"\begin{scope}[fill=c0]").unwrap();
        assert!(define < scope);
    }
}
