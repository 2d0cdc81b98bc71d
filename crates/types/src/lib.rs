//! Foundation types for the glyphtex compiler.
//!
//! - [`Color`]: canonical `#rrggbb` colors
//! - [`Element`] / [`Group`]: the flattened glyph IR produced by the parser
//! - [`Transform`]: per-placement translate/scale/rotate parameters

pub mod color;
pub mod element;
pub mod geometry;

pub use color::{Color, ColorFormatError};
pub use element::{Circle, Element, Ellipse, Group, Path};
pub use geometry::Transform;
