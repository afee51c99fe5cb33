//! Typst compilation and PDF export.

use typst::diag::SourceDiagnostic;
use typst_pdf::PdfOptions;

use crate::world::ResumeWorld;
use crate::EngineError;

/// A compiled fixed-page artifact.
#[derive(Debug, Clone)]
pub struct PdfArtifact {
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

/// Compile Typst source in memory and export it as PDF.
pub fn compile_pdf(source: &str) -> Result<PdfArtifact, EngineError> {
    let world = ResumeWorld::new(source.to_string());

    let warned = typst::compile(&world);
    for warning in &warned.warnings {
        tracing::warn!(message = %warning.message, "typst warning");
    }

    let document = warned
        .output
        .map_err(|diags| EngineError::Compile(join_diagnostics(&diags)))?;

    let bytes = typst_pdf::pdf(&document, &PdfOptions::default())
        .map_err(|diags| EngineError::Export(join_diagnostics(&diags)))?;

    Ok(PdfArtifact {
        page_count: document.pages.len(),
        bytes,
    })
}

fn join_diagnostics(diagnostics: &[SourceDiagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| d.message.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
