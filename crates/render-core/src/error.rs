use glyphtex_palette::RegistryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Palette error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    #[error("Unbalanced scope: end_scope without a matching begin_scope")]
    UnbalancedScope,
}
