//! Shared plumbing for the resume command-line tools.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Console logging, filtered by `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();
}

/// Read the Markdown source, with a readable diagnostic for a bad path.
pub fn read_source(input: &Path) -> Result<String> {
    fs::read_to_string(input).with_context(|| format!("cannot read {}", input.display()))
}

/// Resolve `<output_dir>/<input stem>.<ext>`, creating the directory.
/// The directory defaults to `outputs/` next to the input file.
pub fn output_path(input: &Path, output_dir: Option<&Path>, ext: &str) -> Result<PathBuf> {
    let dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => input
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("outputs"),
    };
    fs::create_dir_all(&dir).with_context(|| format!("cannot create {}", dir.display()))?;
    let stem = input
        .file_stem()
        .with_context(|| format!("no file name in {}", input.display()))?;
    Ok(dir.join(stem).with_extension(ext))
}
