use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A color value that could not be normalized to `#rrggbb`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorFormatError {
    #[error("Color '{0}' is not valid hex: expected 3 or 6 digits, got {1}")]
    Length(String, usize),

    #[error("Color '{0}' is not valid hex: non-hex digit")]
    Digit(String),
}

/// An opaque RGB color in its canonical `#rrggbb` form.
///
/// Two colors are equal iff their normalized forms are equal, so `#ABC`,
/// `abc` and `#aabbcc` all compare (and hash) the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string (`#RGB`, `#RRGGBB`, with or without the `#`).
    pub fn parse_hex(s: &str) -> Result<Color, ColorFormatError> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        // `from_str_radix` alone would accept a leading sign.
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorFormatError::Digit(s.to_string()));
        }

        let digits: String = match hex.len() {
            // #RGB format - expand each digit
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 => hex.to_string(),
            n => return Err(ColorFormatError::Length(s.to_string(), n)),
        };

        let component = |range: std::ops::Range<usize>| {
            digits
                .get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| ColorFormatError::Digit(s.to_string()))
        };

        Ok(Color {
            r: component(0..2)?,
            g: component(2..4)?,
            b: component(4..6)?,
        })
    }

    /// Normalizes an optional `fill` attribute value.
    ///
    /// Absent and empty values both mean "no fill".
    pub fn parse_fill(value: Option<&str>) -> Result<Option<Color>, ColorFormatError> {
        match value {
            None => Ok(None),
            Some(v) if v.trim().is_empty() => Ok(None),
            Some(v) => Color::parse_hex(v).map(Some),
        }
    }

    /// The six lowercase hex digits, without the leading `#`.
    pub fn hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex())
    }
}

impl FromStr for Color {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse_hex(&s).map_err(de::Error::custom)
    }
}
