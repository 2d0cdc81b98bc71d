//! Document-wide color registry.
//!
//! Colors are gathered into a [`ColorCollector`] during the collect phase and
//! frozen into a [`ColorRegistry`] by [`ColorCollector::build`]. Indices follow
//! first-occurrence order. Building consumes the collector, so collecting after
//! build and looking up before build cannot be expressed.

mod error;
mod registry;

pub use error::RegistryError;
pub use registry::{ColorCollector, ColorRegistry};
