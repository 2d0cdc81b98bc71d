use glyphtex_render_core::{ColorIndex, DrawingBackend, RenderError, Scope};
use glyphtex_types::{Color, Transform};
use itertools::Itertools;
use std::fmt::Write;

/// The TikZ name bound to a registry index.
pub fn color_name(index: ColorIndex) -> String {
    format!("c{index}")
}

fn fill_option(fill: Option<ColorIndex>) -> String {
    fill.map(|i| format!("fill={}", color_name(i)))
        .unwrap_or_default()
}

/// Scope options for a placement. The order matters to TikZ: `yshift` comes
/// after the flip, so the vertical offset is applied in flipped space.
fn placement_options(t: &Transform) -> String {
    [
        "x=1pt".to_string(),
        "y=1pt".to_string(),
        format!("xshift={}", t.x),
        format!("scale={}", t.scale),
        "yscale=-1".to_string(),
        format!("yshift={}", t.y),
        format!("rotate={}", t.rotate),
    ]
    .iter()
    .join(", ")
}

/// A [`DrawingBackend`] writing one TikZ directive per line.
#[derive(Debug, Default)]
pub struct TikzWriter {
    out: String,
    depth: usize,
}

impl TikzWriter {
    pub fn new() -> Self {
        Self::default()
    }

    fn newline(&mut self) {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
    }

    /// Returns the emitted text, or `UnbalancedScope` if a scope was left open.
    pub fn finish(self) -> Result<String, RenderError> {
        if self.depth != 0 {
            return Err(RenderError::UnbalancedScope);
        }
        Ok(self.out)
    }
}

impl DrawingBackend for TikzWriter {
    fn define_color(&mut self, index: ColorIndex, color: Color) -> Result<(), RenderError> {
        self.newline();
        write!(self.out, r"\definecolor{{{}}}{{HTML}}{{{}}}", color_name(index), color.hex())?;
        Ok(())
    }

    fn begin_scope(&mut self, scope: Scope) -> Result<(), RenderError> {
        let options = match scope {
            Scope::Group { fill } => fill_option(fill),
            Scope::Placement(t) => placement_options(&t),
        };
        self.newline();
        write!(self.out, r"\begin{{scope}}[{options}]")?;
        self.depth += 1;
        Ok(())
    }

    fn end_scope(&mut self) -> Result<(), RenderError> {
        self.depth = self.depth.checked_sub(1).ok_or(RenderError::UnbalancedScope)?;
        self.newline();
        self.out.push_str(r"\end{scope}");
        Ok(())
    }

    fn fill_circle(
        &mut self,
        cx: f64,
        cy: f64,
        r: f64,
        fill: Option<ColorIndex>,
    ) -> Result<(), RenderError> {
        self.newline();
        write!(self.out, r"\fill[{}] ({cx}, {cy}) circle ({r});", fill_option(fill))?;
        Ok(())
    }

    fn fill_ellipse(
        &mut self,
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        fill: Option<ColorIndex>,
    ) -> Result<(), RenderError> {
        self.newline();
        write!(
            self.out,
            r"\fill[{}] ({cx}, {cy}) ellipse ({rx} and {ry});",
            fill_option(fill)
        )?;
        Ok(())
    }

    fn fill_path(&mut self, d: &str, fill: Option<ColorIndex>) -> Result<(), RenderError> {
        self.newline();
        write!(self.out, r"\fill[{}] svg {{{d}}};", fill_option(fill))?;
        Ok(())
    }
}
