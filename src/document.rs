//! Per-document planning: the collect phase, then emission.
//!
//! A [`DocumentPlan`] parses every distinct glyph once, gathers every color
//! the document will reference (explicit colors, gradient endpoints,
//! backgrounds, then glyph fills in first-use order) and freezes them into a
//! registry. Only after that can placements be emitted. Plans are built per
//! request and share nothing.

use crate::error::PipelineError;
use glyphtex_palette::{ColorCollector, ColorRegistry};
use glyphtex_render_tikz as tikz;
use glyphtex_traits::{CatalogError, GlyphCatalog};
use glyphtex_types::{Color, Group, Transform};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One glyph instance on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub glyph: String,
    #[serde(flatten)]
    pub transform: Transform,
}

/// The color-bearing parts of a document, as handed over by the layout side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentSpec {
    /// Colors referenced directly by the layout (e.g. a title color).
    pub colors: Vec<String>,
    /// `[bottom, top]` pairs for axis shadings.
    pub gradients: Vec<[String; 2]>,
    /// Text background colors.
    pub backgrounds: Vec<String>,
    pub placements: Vec<Placement>,
}

impl DocumentSpec {
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug)]
pub struct DocumentPlan {
    spec: DocumentSpec,
    glyphs: HashMap<String, Vec<Group>>,
    registry: ColorRegistry,
}

impl DocumentPlan {
    /// Runs the whole collect phase and builds the registry.
    pub fn prepare(spec: DocumentSpec, catalog: &dyn GlyphCatalog) -> Result<Self, PipelineError> {
        let mut collector = ColorCollector::new();
        collector.collect_hex(&spec.colors)?;
        // Gradient endpoints may not be empty, unlike backgrounds.
        for endpoint in spec.gradients.iter().flatten() {
            collector.collect([Color::parse_hex(endpoint)?]);
        }
        collector.collect_hex(&spec.backgrounds)?;

        let mut glyphs = HashMap::new();
        for placement in &spec.placements {
            if glyphs.contains_key(&placement.glyph) {
                continue;
            }
            let source = catalog.source(&placement.glyph)?;
            let groups = glyphtex_parser::parse(&source).map_err(|err| PipelineError::Glyph {
                id: placement.glyph.clone(),
                source: err,
            })?;
            log::debug!(
                "Glyph '{}' from {}: {} groups",
                placement.glyph,
                catalog.name(),
                groups.len()
            );
            collector.collect(glyphtex_parser::glyph_fills(&groups));
            glyphs.insert(placement.glyph.clone(), groups);
        }

        let registry = collector.build();
        log::debug!(
            "Planned document: {} placements, {} distinct glyphs, {} colors",
            spec.placements.len(),
            glyphs.len(),
            registry.len()
        );
        Ok(Self {
            spec,
            glyphs,
            registry,
        })
    }

    pub fn spec(&self) -> &DocumentSpec {
        &self.spec
    }

    pub fn registry(&self) -> &ColorRegistry {
        &self.registry
    }

    /// The parsed groups of a glyph used by this document.
    pub fn glyph(&self, id: &str) -> Option<&[Group]> {
        self.glyphs.get(id).map(Vec::as_slice)
    }

    /// The `\definecolor` block; must precede every other directive.
    pub fn palette(&self) -> Result<String, PipelineError> {
        Ok(tikz::build_palette(&self.registry)?)
    }

    /// Emits one placement. The glyph must be one this plan collected.
    pub fn place(&self, placement: &Placement) -> Result<String, PipelineError> {
        let groups = self
            .glyph(&placement.glyph)
            .ok_or_else(|| CatalogError::UnknownGlyph(placement.glyph.clone()))?;
        Ok(tikz::place(&placement.transform, groups, &self.registry)?)
    }

    /// Every placement of the spec, in order, one block per placement.
    pub fn render_placements(&self) -> Result<String, PipelineError> {
        let blocks = self
            .spec
            .placements
            .iter()
            .map(|p| self.place(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(blocks.join("\n"))
    }

    /// An axis shading between two colors; both must have been collected.
    pub fn shade(&self, gradient: &[String; 2]) -> Result<String, PipelineError> {
        let [bottom, top] = gradient;
        let bottom = self.registry.index(Color::parse_hex(bottom)?)?;
        let top = self.registry.index(Color::parse_hex(top)?)?;
        Ok(tikz::shade_directive(bottom, top))
    }

    /// A standalone preview document of every placement.
    pub fn standalone(&self) -> Result<String, PipelineError> {
        Ok(tikz::standalone_document(
            &self.palette()?,
            &self.render_placements()?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphtex_traits::InMemoryGlyphCatalog;

    fn catalog() -> InMemoryGlyphCatalog {
        InMemoryGlyphCatalog::from_entries([
            ("dot", r##"<circle fill="#F00" cx="1" cy="1" r="1"/>"##),
            ("leaf", r##"<g fill="#3E721D"><path d="M0 0h2v2z"/></g>"##),
            ("broken", r##"<circle fill="#F0" cx="1" cy="1" r="1"/>"##),
        ])
    }

    fn placement(glyph: &str) -> Placement {
        Placement {
            glyph: glyph.to_string(),
            transform: Transform::new(10.0, 15.0, 2.3, -15.0),
        }
    }

    #[test]
    fn test_collect_order() {
        let spec = DocumentSpec {
            colors: vec!["#FF6B6B".into()],
            gradients: vec![["#95E1D3".into(), "#F38181".into()]],
            backgrounds: vec!["#EAFFD0".into(), "#ff6b6b".into()],
            placements: vec![placement("leaf"), placement("dot"), placement("leaf")],
        };
        let plan = DocumentPlan::prepare(spec, &catalog()).unwrap();
        let hexes: Vec<_> = plan.registry().iter().map(|(_, c)| c.hex()).collect();
        assert_eq!(hexes, vec!["ff6b6b", "95e1d3", "f38181", "eaffd0", "3e721d", "ff0000"]);
    }

    #[test]
    fn test_unknown_glyph() {
        let spec = DocumentSpec {
            placements: vec![placement("🦄")],
            ..Default::default()
        };
        let err = DocumentPlan::prepare(spec, &catalog()).unwrap_err();
        assert!(err.is_unknown_glyph());
    }

    #[test]
    fn test_glyph_parse_error_names_glyph() {
        let spec = DocumentSpec {
            placements: vec![placement("broken")],
            ..Default::default()
        };
        let err = DocumentPlan::prepare(spec, &catalog()).unwrap_err();
        assert!(matches!(err, PipelineError::Glyph { ref id, .. } if id == "broken"));
    }

    #[test]
    fn test_bad_gradient_color() {
        let spec = DocumentSpec {
            gradients: vec![["#12".into(), "#fff".into()]],
            ..Default::default()
        };
        assert!(matches!(
            DocumentPlan::prepare(spec, &catalog()),
            Err(PipelineError::ColorFormat(_))
        ));
    }

    #[test]
    fn test_empty_gradient_endpoint_is_rejected() {
        let spec = DocumentSpec {
            gradients: vec![["".into(), "#fff".into()]],
            backgrounds: vec!["".into()],
            ..Default::default()
        };
        assert!(matches!(
            DocumentPlan::prepare(spec, &catalog()),
            Err(PipelineError::ColorFormat(_))
        ));
    }

    #[test]
    fn test_place_requires_collected_glyph() {
        let plan = DocumentPlan::prepare(DocumentSpec::default(), &catalog()).unwrap();
        let err = plan.place(&placement("dot")).unwrap_err();
        assert!(err.is_unknown_glyph());
    }

    #[test]
    fn test_shade_uses_registered_indices() {
        let spec = DocumentSpec {
            gradients: vec![["#8B4513".into(), "#FFD1E0".into()]],
            ..Default::default()
        };
        let plan = DocumentPlan::prepare(spec.clone(), &catalog()).unwrap();
        let shade = plan.shade(&spec.gradients[0]).unwrap();
        assert!(shade.contains("bottom color=c0, top color=c1"));

        let err = plan.shade(&["#000".into(), "#FFD1E0".into()]).unwrap_err();
        assert!(err.is_unregistered_color());
    }

    #[test]
    fn test_spec_from_json() {
        let spec = DocumentSpec::from_json(
            r##"{"gradients": [["#95E1D3", "#F38181"]], "placements": [{"glyph": "dot", "x": 10, "y": 20, "scale": 1.8, "rotate": -15}]}"##,
        )
        .unwrap();
        assert!(spec.colors.is_empty());
        assert_eq!(spec.placements[0].transform, Transform::new(10.0, 20.0, 1.8, -15.0));
    }
}
