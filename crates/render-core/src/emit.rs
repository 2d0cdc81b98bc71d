use crate::error::RenderError;
use crate::traits::DrawingBackend;
use crate::types::{ColorIndex, Scope};
use glyphtex_palette::ColorRegistry;
use glyphtex_types::{Color, Element, Group, Transform};

/// Maps an optional fill to its registry index. An absent fill stays absent;
/// a present but unregistered fill is an error, never a silent default.
pub fn resolve_fill(
    fill: Option<Color>,
    registry: &ColorRegistry,
) -> Result<Option<ColorIndex>, RenderError> {
    fill.map(|c| registry.index(c)).transpose().map_err(Into::into)
}

/// Lowers one element into backend directives. Groups open a scope carrying
/// their own fill, emit each child in order, then close the scope.
pub fn emit_element<B: DrawingBackend + ?Sized>(
    element: &Element,
    registry: &ColorRegistry,
    backend: &mut B,
) -> Result<(), RenderError> {
    match element {
        Element::Circle(c) => {
            backend.fill_circle(c.cx, c.cy, c.r, resolve_fill(c.fill, registry)?)
        }
        Element::Ellipse(e) => {
            backend.fill_ellipse(e.cx, e.cy, e.rx, e.ry, resolve_fill(e.fill, registry)?)
        }
        Element::Path(p) => backend.fill_path(&p.d, resolve_fill(p.fill, registry)?),
        Element::Group(g) => emit_group(g, registry, backend),
    }
}

fn emit_group<B: DrawingBackend + ?Sized>(
    group: &Group,
    registry: &ColorRegistry,
    backend: &mut B,
) -> Result<(), RenderError> {
    backend.begin_scope(Scope::Group {
        fill: resolve_fill(group.fill, registry)?,
    })?;
    for child in &group.children {
        emit_element(child, registry, backend)?;
    }
    backend.end_scope()
}

/// Wraps a parsed glyph in one placement scope, each group nested inside as
/// its own scope.
pub fn place_glyph<B: DrawingBackend + ?Sized>(
    transform: &Transform,
    groups: &[Group],
    registry: &ColorRegistry,
    backend: &mut B,
) -> Result<(), RenderError> {
    log::trace!("Placing {} groups at {:?}", groups.len(), transform);
    backend.begin_scope(Scope::Placement(*transform))?;
    for group in groups {
        emit_group(group, registry, backend)?;
    }
    backend.end_scope()
}

/// Binds every registered color, in index order.
pub fn define_palette<B: DrawingBackend + ?Sized>(
    registry: &ColorRegistry,
    backend: &mut B,
) -> Result<(), RenderError> {
    for (index, color) in registry.iter() {
        backend.define_color(index, color)?;
    }
    Ok(())
}
