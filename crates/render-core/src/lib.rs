//! Core lowering of glyph IR into drawing directives.
//!
//! This crate provides:
//! - `DrawingBackend` trait abstracting the target renderer's directives
//! - `emit_element`: one element (recursively for groups) into directives
//! - `place_glyph`: a parsed glyph wrapped in a placement scope
//! - `define_palette`: the up-front color definitions
//!
//! Emission only reads a built `ColorRegistry`; it never discovers colors.

mod emit;
mod error;
mod traits;
mod types;

pub use emit::{define_palette, emit_element, place_glyph, resolve_fill};
pub use error::RenderError;
pub use traits::DrawingBackend;
pub use types::{ColorIndex, Scope};
