// src/error.rs
use glyphtex_palette::RegistryError;
use glyphtex_parser::ParseError;
use glyphtex_render_core::RenderError;
use glyphtex_traits::CatalogError;
use glyphtex_types::ColorFormatError;
use thiserror::Error;

/// A comprehensive error type for compiling a document's glyphs.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Parsing failed: {0}")]
    Parse(#[from] ParseError),

    #[error("Glyph '{id}' failed to parse: {source}")]
    Glyph {
        id: String,
        #[source]
        source: ParseError,
    },

    #[error("Invalid color: {0}")]
    ColorFormat(#[from] ColorFormatError),

    #[error("Glyph catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Palette error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PipelineError {
    /// True when the failure is a color that was never collected, i.e. a bug
    /// in the collect phase rather than bad input.
    pub fn is_unregistered_color(&self) -> bool {
        matches!(
            self,
            PipelineError::Registry(RegistryError::Unregistered(_))
                | PipelineError::Render(RenderError::Registry(RegistryError::Unregistered(_)))
        )
    }

    pub fn is_unknown_glyph(&self) -> bool {
        matches!(self, PipelineError::Catalog(CatalogError::UnknownGlyph(_)))
    }
}
