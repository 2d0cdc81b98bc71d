use crate::error::RegistryError;
use glyphtex_types::{Color, ColorFormatError};
use indexmap::IndexSet;

/// The mutable collect phase of a document's palette.
#[derive(Debug, Clone, Default)]
pub struct ColorCollector {
    colors: IndexSet<Color>,
}

impl ColorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges colors into the set, keeping first-occurrence order and silently
    /// dropping absent entries.
    pub fn collect<I, T>(&mut self, colors: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<Option<Color>>,
    {
        self.colors.extend(colors.into_iter().filter_map(Into::into));
    }

    /// Normalizes and merges raw color strings (gradient endpoints, backgrounds).
    ///
    /// On error, colors before the offending entry have already been merged.
    pub fn collect_hex<I, S>(&mut self, colors: I) -> Result<(), ColorFormatError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for raw in colors {
            if let Some(color) = Color::parse_fill(Some(raw.as_ref()))? {
                self.colors.insert(color);
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Freezes the collected colors, assigning each its zero-based index.
    pub fn build(self) -> ColorRegistry {
        log::debug!("Built color registry with {} colors", self.colors.len());
        ColorRegistry {
            colors: self.colors,
        }
    }
}

/// The immutable, index-assigned palette consulted during emission.
#[derive(Debug, Clone, Default)]
pub struct ColorRegistry {
    colors: IndexSet<Color>,
}

impl ColorRegistry {
    /// The index assigned to `color`.
    ///
    /// # Errors
    ///
    /// `RegistryError::Unregistered` if the color was never collected.
    pub fn index(&self, color: Color) -> Result<usize, RegistryError> {
        self.colors
            .get_index_of(&color)
            .ok_or(RegistryError::Unregistered(color))
    }

    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }

    /// Registered colors in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Color)> + '_ {
        self.colors.iter().copied().enumerate()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> Color {
        Color::parse_hex(s).unwrap()
    }

    #[test]
    fn test_first_occurrence_order_and_case_insensitive_dedup() {
        let mut collector = ColorCollector::new();
        collector.collect_hex(["#FF0000", "#00ff00", "#FF0000"]).unwrap();
        let registry = collector.build();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.index(hex("#ff0000")).unwrap(), 0);
        assert_eq!(registry.index(hex("#00ff00")).unwrap(), 1);
    }

    #[test]
    fn test_absent_colors_are_dropped() {
        let mut collector = ColorCollector::new();
        collector.collect([None, Some(hex("#abc")), None]);
        collector.collect([hex("#aabbcc"), hex("#000")]);
        collector.collect_hex([""]).unwrap();

        let registry = collector.build();
        assert_eq!(
            registry.iter().collect::<Vec<_>>(),
            vec![(0, hex("#aabbcc")), (1, hex("#000000"))]
        );
    }

    #[test]
    fn test_unregistered_lookup_fails() {
        let registry = ColorCollector::new().build();
        assert!(registry.is_empty());
        assert_eq!(
            registry.index(hex("#123456")),
            Err(RegistryError::Unregistered(hex("#123456")))
        );
        assert!(!registry.contains(hex("#123456")));
    }

    #[test]
    fn test_build_is_deterministic() {
        let feed = ["#95E1D3", "#F38181", "#EAFFD0", "#95e1d3", "#FFAC33"];
        let build = || {
            let mut c = ColorCollector::new();
            c.collect_hex(feed).unwrap();
            c.build()
        };
        let first: Vec<_> = build().iter().collect();
        let second: Vec<_> = build().iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
    }

    #[test]
    fn test_collect_hex_rejects_bad_input() {
        let mut collector = ColorCollector::new();
        let err = collector.collect_hex(["#fff", "#ffff"]).unwrap_err();
        assert_eq!(err, ColorFormatError::Length("#ffff".into(), 4));
        assert_eq!(collector.len(), 1);
    }
}
