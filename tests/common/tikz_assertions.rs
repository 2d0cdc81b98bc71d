//! Structural checks on emitted TikZ text.

use std::collections::HashSet;

/// Asserts every `\begin{scope}` is closed, in order, and never over-closed.
pub fn assert_scopes_balanced(tikz: &str) {
    let mut depth = 0usize;
    for (n, line) in tikz.lines().enumerate() {
        if line.starts_with(r"\begin{scope}") {
            depth += 1;
        } else if line == r"\end{scope}" {
            assert!(depth > 0, "line {}: \\end{{scope}} without open scope", n + 1);
            depth -= 1;
        }
    }
    assert_eq!(depth, 0, "unclosed scopes in:\n{tikz}");
}

/// Names bound by `\definecolor{cN}` lines.
pub fn defined_colors(tikz: &str) -> HashSet<String> {
    tikz.lines()
        .filter_map(|line| line.strip_prefix(r"\definecolor{"))
        .filter_map(|rest| rest.split('}').next())
        .map(str::to_string)
        .collect()
}

/// Color names referenced through `fill=cN` or `color=cN`.
pub fn referenced_colors(tikz: &str) -> HashSet<String> {
    let mut names = HashSet::new();
    for piece in tikz.split(['[', ',', ']']) {
        let piece = piece.trim();
        let value = piece
            .strip_prefix("fill=")
            .or_else(|| piece.strip_prefix("bottom color="))
            .or_else(|| piece.strip_prefix("top color="));
        if let Some(name) = value {
            names.insert(name.to_string());
        }
    }
    names
}

/// Counts lines beginning with `prefix`.
pub fn count_lines(tikz: &str, prefix: &str) -> usize {
    tikz.lines().filter(|l| l.starts_with(prefix)).count()
}
