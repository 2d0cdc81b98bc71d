//! TikZ backend for glyph placements.
//!
//! Output format, one directive per line:
//!
//! ```text
//! \definecolor{c0}{HTML}{ff0000}
//! \begin{scope}[x=1pt, y=1pt, xshift=10, scale=2, yscale=-1, yshift=20, rotate=-15]
//! \begin{scope}[fill=c0]
//! \fill[] (1, 2) circle (3);
//! \fill[fill=c1] svg {M0 0h1v1z};
//! \end{scope}
//! \end{scope}
//! ```
//!
//! Path data needs the `svg.path` TikZ library at compile time.

mod document;
mod writer;

pub use document::{shade_directive, standalone_document};
pub use writer::{color_name, TikzWriter};

use glyphtex_palette::ColorRegistry;
use glyphtex_render_core::{define_palette, emit_element, place_glyph, RenderError};
use glyphtex_types::{Element, Group, Transform};

/// Emits one element as TikZ.
pub fn emit(element: &Element, registry: &ColorRegistry) -> Result<String, RenderError> {
    let mut writer = TikzWriter::new();
    emit_element(element, registry, &mut writer)?;
    writer.finish()
}

/// Emits one glyph placement: an outer transform scope around every group.
pub fn place(
    transform: &Transform,
    groups: &[Group],
    registry: &ColorRegistry,
) -> Result<String, RenderError> {
    let mut writer = TikzWriter::new();
    place_glyph(transform, groups, registry, &mut writer)?;
    writer.finish()
}

/// Emits the `\definecolor` lines for every registered color, in index order.
pub fn build_palette(registry: &ColorRegistry) -> Result<String, RenderError> {
    let mut writer = TikzWriter::new();
    define_palette(registry, &mut writer)?;
    writer.finish()
}
