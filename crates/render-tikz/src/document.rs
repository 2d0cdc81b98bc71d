//! Whole-picture helpers around placements: gradient backgrounds and a
//! standalone preview document.

use crate::writer::color_name;
use glyphtex_render_core::ColorIndex;

/// An axis shading over the current page, from `bottom` to `top` at 45 degrees.
///
/// Needs `remember picture, overlay` on the surrounding `tikzpicture`.
pub fn shade_directive(bottom: ColorIndex, top: ColorIndex) -> String {
    format!(
        r"\shade[shading=axis, bottom color={}, top color={}, shading angle=45] (current page.south west) rectangle (current page.north east);",
        color_name(bottom),
        color_name(top)
    )
}

/// A compilable `standalone` document holding `palette` in the preamble and
/// `body` inside one `tikzpicture`.
pub fn standalone_document(palette: &str, body: &str) -> String {
    let mut out = String::from(
        "\\documentclass{standalone}\n\\usepackage{tikz}\n\\usepackage[HTML]{xcolor}\n\\usetikzlibrary{svg.path}\n",
    );
    if !palette.is_empty() {
        out.push_str(palette);
        out.push('\n');
    }
    out.push_str("\\begin{document}\n\\begin{tikzpicture}\n");
    if !body.is_empty() {
        out.push_str(body);
        out.push('\n');
    }
    out.push_str("\\end{tikzpicture}\n\\end{document}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shade_directive() {
        let shade = shade_directive(3, 0);
        assert!(shade.starts_with(r"\shade[shading=axis, bottom color=c3, top color=c0, shading angle=45]"));
        assert!(shade.ends_with(';'));
    }

    #[test]
    fn test_standalone_document() {
        let doc = standalone_document(r"\definecolor{c0}{HTML}{ff0000}", r"\fill[fill=c0] (0, 0) circle (1);");
        let lines: Vec<_> = doc.lines().collect();
        assert_eq!(lines[0], r"\documentclass{standalone}");
        assert_eq!(lines[4], r"\definecolor{c0}{HTML}{ff0000}");
        assert_eq!(lines[5], r"\begin{document}");
        assert_eq!(lines[7], r"\fill[fill=c0] (0, 0) circle (1);");
        assert_eq!(*lines.last().unwrap(), r"\end{document}");
    }

    #[test]
    fn test_standalone_document_empty_parts() {
        let doc = standalone_document("", "");
        assert!(!doc.contains("\n\n"));
        assert!(doc.contains("\\begin{tikzpicture}\n\\end{tikzpicture}"));
    }
}
