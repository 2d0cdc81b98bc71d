#![allow(dead_code)]

pub mod fixtures;
pub mod tikz_assertions;

use glyphtex::{DocumentPlan, DocumentSpec, PipelineError};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Plans a document against the fixture catalog.
pub fn plan(spec: DocumentSpec) -> Result<DocumentPlan, PipelineError> {
    DocumentPlan::prepare(spec, &fixtures::catalog())
}

/// Palette, shadings and placements in output order, as the CLI writes them.
pub fn compile(spec: DocumentSpec) -> Result<String, PipelineError> {
    let plan = plan(spec)?;
    let mut parts = vec![plan.palette()?];
    for gradient in &plan.spec().gradients {
        parts.push(plan.shade(gradient)?);
    }
    parts.push(plan.render_placements()?);
    Ok(parts.into_iter().filter(|p| !p.is_empty()).collect::<Vec<_>>().join("\n"))
}
