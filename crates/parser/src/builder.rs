//! Builders receiving tag events from the driver.
//!
//! [`FlatGroupBuilder`] accumulates groups as a flat sibling list: every `<g>`
//! open *and* close event starts a new top-level group instead of nesting.
//! Glyphs with nested `<g>` therefore render their inner levels as siblings.
//! The catalog's glyphs are single-level, and emitted output depends on this
//! exact shape, so it is kept as is.

use crate::attributes::OwnedAttributes;
use crate::error::{Location, ParseError};
use glyphtex_types::{Circle, Element, Ellipse, Group, Path};

/// The closed set of tags the compiler understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    Group,
    Path,
    Circle,
    Ellipse,
    Unrecognized(String),
}

impl Tag {
    pub fn from_name(name: &str) -> Self {
        match name {
            "g" => Tag::Group,
            "path" => Tag::Path,
            "circle" => Tag::Circle,
            "ellipse" => Tag::Ellipse,
            other => Tag::Unrecognized(other.to_string()),
        }
    }
}

/// Receives the significant events of an SVG-subset fragment in document order.
pub trait GlyphBuilder {
    fn start_element(
        &mut self,
        tag: Tag,
        attrs: OwnedAttributes,
        location: Location,
    ) -> Result<(), ParseError>;

    fn end_element(&mut self, tag: Tag, location: Location) -> Result<(), ParseError>;
}

/// Builds the flattened `Vec<Group>` glyph IR.
#[derive(Debug)]
pub struct FlatGroupBuilder {
    groups: Vec<Group>,
}

impl Default for FlatGroupBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FlatGroupBuilder {
    /// Starts with the implicit, fill-less leading group.
    pub fn new() -> Self {
        Self {
            groups: vec![Group::new(None)],
        }
    }

    pub fn finish(self) -> Vec<Group> {
        self.groups
    }

    fn push(&mut self, element: Element) {
        // `groups` is seeded non-empty and only ever grows.
        if let Some(last) = self.groups.last_mut() {
            last.children.push(element);
        }
    }
}

impl GlyphBuilder for FlatGroupBuilder {
    fn start_element(
        &mut self,
        tag: Tag,
        attrs: OwnedAttributes,
        location: Location,
    ) -> Result<(), ParseError> {
        match tag {
            Tag::Group => self.groups.push(Group::new(attrs.fill(location)?)),
            Tag::Path => self.push(Element::Path(Path {
                d: attrs.required("path", "d", location)?.to_string(),
                fill: attrs.fill(location)?,
            })),
            Tag::Circle => self.push(Element::Circle(Circle {
                cx: attrs.number("circle", "cx", location)?,
                cy: attrs.number("circle", "cy", location)?,
                r: attrs.number("circle", "r", location)?,
                fill: attrs.fill(location)?,
            })),
            Tag::Ellipse => self.push(Element::Ellipse(Ellipse {
                cx: attrs.number("ellipse", "cx", location)?,
                cy: attrs.number("ellipse", "cy", location)?,
                rx: attrs.number("ellipse", "rx", location)?,
                ry: attrs.number("ellipse", "ry", location)?,
                fill: attrs.fill(location)?,
            })),
            Tag::Unrecognized(name) => {
                log::warn!("Skipping unknown tag <{}> at {}", name, location);
            }
        }
        Ok(())
    }

    fn end_element(&mut self, tag: Tag, location: Location) -> Result<(), ParseError> {
        match tag {
            Tag::Group => self.groups.push(Group::new(None)),
            Tag::Path | Tag::Circle | Tag::Ellipse => {}
            Tag::Unrecognized(name) => {
                log::warn!("Skipping unknown closing tag </{}> at {}", name, location);
            }
        }
        Ok(())
    }
}
