use glyphtex_types::Color;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The color was never collected before the registry was built. This is a
    /// bug in the caller's collect phase, not an input problem.
    #[error("Color {0} not in registry")]
    Unregistered(Color),
}
