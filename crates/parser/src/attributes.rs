//! Owned attribute lists and typed accessors for the supported tags.

use crate::error::{Location, ParseError};
use glyphtex_types::Color;
use quick_xml::events::BytesStart;
use quick_xml::escape::unescape;

/// Attributes of one tag, local names mapped to unescaped values, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OwnedAttributes(Vec<(String, String)>);

impl OwnedAttributes {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn required(
        &self,
        tag: &'static str,
        name: &'static str,
        location: Location,
    ) -> Result<&str, ParseError> {
        self.get(name).ok_or(ParseError::MissingAttribute {
            tag,
            attr: name,
            location,
        })
    }

    pub fn number(
        &self,
        tag: &'static str,
        name: &'static str,
        location: Location,
    ) -> Result<f64, ParseError> {
        let raw = self.required(tag, name, location)?;
        match raw.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(n),
            _ => Err(ParseError::InvalidNumber {
                attr: name,
                value: raw.to_string(),
                location,
            }),
        }
    }

    /// The normalized `fill`; absent and empty both yield `None`.
    pub fn fill(&self, location: Location) -> Result<Option<Color>, ParseError> {
        Color::parse_fill(self.get("fill"))
            .map_err(|source| ParseError::ColorFormat { source, location })
    }
}

/// Copies the attributes of a start tag out of the reader's buffer.
pub fn get_owned_attributes(e: &BytesStart<'_>) -> Result<OwnedAttributes, ParseError> {
    let mut pairs = Vec::new();
    for attr in e.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.local_name().as_ref())?.to_string();
        let raw = std::str::from_utf8(&attr.value)?;
        pairs.push((key, unescape(raw)?.into_owned()));
    }
    Ok(OwnedAttributes(pairs))
}
