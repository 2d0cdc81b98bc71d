use glyphtex_types::ColorFormatError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub col: usize,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.col)
    }
}

impl From<(usize, usize)> for Location {
    fn from((line, col): (usize, usize)) -> Self {
        Location { line, col }
    }
}

impl Location {
    /// Converts a byte offset into `source` to a 1-based line/column.
    pub fn from_pos(source: &str, pos: usize) -> Self {
        let before = source.get(..pos).unwrap_or(source);
        let line = before.matches('\n').count() + 1;
        let col = before
            .rfind('\n')
            .map(|nl| before[nl + 1..].chars().count())
            .unwrap_or_else(|| before.chars().count())
            + 1;
        Location { line, col }
    }
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Quick-XML error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    #[error("UTF-8 string error: {0}")]
    Utf8Str(#[from] std::str::Utf8Error),

    #[error("<{tag}> is missing required attribute '{attr}' at {location}")]
    MissingAttribute {
        tag: &'static str,
        attr: &'static str,
        location: Location,
    },

    #[error("Attribute '{attr}' is not a number: '{value}' at {location}")]
    InvalidNumber {
        attr: &'static str,
        value: String,
        location: Location,
    },

    #[error("Invalid fill at {location}: {source}")]
    ColorFormat {
        source: ColorFormatError,
        location: Location,
    },
}

impl From<quick_xml::events::attributes::AttrError> for ParseError {
    fn from(e: quick_xml::events::attributes::AttrError) -> Self {
        ParseError::QuickXml(quick_xml::Error::InvalidAttr(e))
    }
}

impl From<quick_xml::escape::EscapeError> for ParseError {
    fn from(e: quick_xml::escape::EscapeError) -> Self {
        ParseError::QuickXml(quick_xml::Error::Escape(e))
    }
}

impl ParseError {
    /// The color error behind a `ColorFormat` failure, if that is what this is.
    pub fn color_format(&self) -> Option<&ColorFormatError> {
        match self {
            ParseError::ColorFormat { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_from_pos() {
        let src = "<g>\n  <path/>\n</g>";
        assert_eq!(Location::from_pos(src, 0), Location { line: 1, col: 1 });
        assert_eq!(Location::from_pos(src, 6), Location { line: 2, col: 3 });
        assert_eq!(Location::from_pos(src, 999), Location { line: 3, col: 5 });
    }

    #[test]
    fn test_display_includes_location() {
        let err = ParseError::MissingAttribute {
            tag: "circle",
            attr: "r",
            location: (2, 5).into(),
        };
        assert_eq!(
            err.to_string(),
            "<circle> is missing required attribute 'r' at line 2, column 5"
        );
    }
}
