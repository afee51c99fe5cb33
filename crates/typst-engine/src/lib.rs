//! Typst page renderer
//!
//! Renders a parsed [`Document`](resume_types::Document) into a
//! fixed-page PDF by emitting styled Typst markup and compiling it
//! entirely in memory. Layout decisions are fixed for ATS parsability:
//! single column, fixed page size and margins, glyph-fixed bullet
//! markers, predictable top-to-bottom reading order.

pub mod compiler;
mod fonts;
pub mod markup;
mod world;

use std::fs;
use std::path::Path;

use thiserror::Error;

pub use compiler::PdfArtifact;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("compilation failed: {0}")]
    Compile(String),

    #[error("PDF export failed: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Render a document tree into a paginated PDF artifact.
pub fn render(document: &resume_types::Document) -> Result<PdfArtifact, EngineError> {
    let source = markup::typst_source(document);
    compiler::compile_pdf(&source)
}

/// Render and write the PDF to `path`.
pub fn render_to_file(
    document: &resume_types::Document,
    path: &Path,
) -> Result<PdfArtifact, EngineError> {
    let artifact = render(document)?;
    fs::write(path, &artifact.bytes)?;
    Ok(artifact)
}
