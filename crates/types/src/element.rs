//! The glyph intermediate representation.
//!
//! A parsed glyph is a flat, ordered `Vec<Group>`, not a rooted tree (see
//! `glyphtex-parser`). `fill` is never inherited by this IR: each element's
//! own attribute is authoritative, and any visual inheritance happens in the
//! target renderer's scoping rules.

use crate::color::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// Raw SVG path data, copied verbatim into the output.
    pub d: String,
    pub fill: Option<Color>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: Option<Color>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    pub cx: f64,
    pub cy: f64,
    pub rx: f64,
    pub ry: f64,
    pub fill: Option<Color>,
}

/// An ordered run of elements sharing an optional default fill.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Group {
    pub fill: Option<Color>,
    pub children: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Path(Path),
    Circle(Circle),
    Ellipse(Ellipse),
    Group(Group),
}

impl Group {
    pub fn new(fill: Option<Color>) -> Self {
        Self {
            fill,
            children: Vec::new(),
        }
    }

    /// Every fill in this group, the group's own first, then each child's in
    /// document order (recursing into nested groups). Absent fills are kept as
    /// `None` so callers see exactly what was encountered.
    pub fn fills(&self) -> Vec<Option<Color>> {
        let mut out = Vec::with_capacity(self.children.len() + 1);
        self.collect_fills(&mut out);
        out
    }

    fn collect_fills(&self, out: &mut Vec<Option<Color>>) {
        out.push(self.fill);
        for child in &self.children {
            child.collect_fills(out);
        }
    }
}

impl Element {
    pub fn fill(&self) -> Option<Color> {
        match self {
            Element::Path(p) => p.fill,
            Element::Circle(c) => c.fill,
            Element::Ellipse(e) => e.fill,
            Element::Group(g) => g.fill,
        }
    }

    pub fn fills(&self) -> Vec<Option<Color>> {
        let mut out = Vec::new();
        self.collect_fills(&mut out);
        out
    }

    fn collect_fills(&self, out: &mut Vec<Option<Color>>) {
        match self {
            Element::Group(g) => g.collect_fills(out),
            leaf => out.push(leaf.fill()),
        }
    }
}

impl From<Path> for Element {
    fn from(p: Path) -> Self {
        Element::Path(p)
    }
}

impl From<Circle> for Element {
    fn from(c: Circle) -> Self {
        Element::Circle(c)
    }
}

impl From<Ellipse> for Element {
    fn from(e: Ellipse) -> Self {
        Element::Ellipse(e)
    }
}

impl From<Group> for Element {
    fn from(g: Group) -> Self {
        Element::Group(g)
    }
}
