use serde::{Deserialize, Serialize};

/// Placement of a glyph in the target drawing space.
///
/// `x`/`y` are offsets in the target's native unit (points), `scale` is a
/// uniform multiplier and `rotate` is in degrees. The vertical flip that maps
/// SVG's downward y-axis onto the target's upward one is not part of this
/// struct; every placement applies it.
///
/// Missing fields deserialize to the identity transform's values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotate: f64,
}

impl Transform {
    pub fn new(x: f64, y: f64, scale: f64, rotate: f64) -> Self {
        Self { x, y, scale, rotate }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            rotate: 0.0,
        }
    }
}
