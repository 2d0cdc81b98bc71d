use glyphtex_types::Transform;

/// A registry index standing in for a color in emitted directives.
pub type ColorIndex = usize;

/// The kind of scope a backend is asked to open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scope {
    /// One glyph group. `fill` becomes the scope's default fill; children
    /// without their own fill inherit it through the target renderer.
    Group { fill: Option<ColorIndex> },
    /// One glyph placement: translate by `(x, y)`, uniform `scale`, a fixed
    /// vertical flip, then `rotate` degrees. The flip is always applied.
    Placement(Transform),
}
