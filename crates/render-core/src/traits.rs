use crate::error::RenderError;
use crate::types::{ColorIndex, Scope};
use glyphtex_types::Color;

/// A trait for drawing backends, abstracting the directive-writing primitives.
///
/// Backends never see colors directly during drawing, only registry indices;
/// the palette is bound once via [`DrawingBackend::define_color`].
pub trait DrawingBackend {
    fn define_color(&mut self, index: ColorIndex, color: Color) -> Result<(), RenderError>;

    fn begin_scope(&mut self, scope: Scope) -> Result<(), RenderError>;

    fn end_scope(&mut self) -> Result<(), RenderError>;

    fn fill_circle(
        &mut self,
        cx: f64,
        cy: f64,
        r: f64,
        fill: Option<ColorIndex>,
    ) -> Result<(), RenderError>;

    fn fill_ellipse(
        &mut self,
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        fill: Option<ColorIndex>,
    ) -> Result<(), RenderError>;

    /// Fills the region described by raw SVG path data, passed through untouched.
    fn fill_path(&mut self, d: &str, fill: Option<ColorIndex>) -> Result<(), RenderError>;
}
