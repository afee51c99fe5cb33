//! ATS compliance checker for rendered resume artifacts.
//!
//! Inspects `.docx` and `.pdf` files from the outside, the way an
//! applicant tracking system would, and reports a series of named
//! checks. The checker never consults the source document: it works
//! only from the bytes on disk, so it catches renderer regressions
//! as well as hand-edited files.

use std::path::Path;
use std::time::Duration;

use thiserror::Error;

use resume_types::ComplianceReport;

pub mod docx;
pub mod extract;
mod package;
pub mod pdf;

pub use package::{DocxPackage, ParagraphInfo};

/// Fonts most ATS parsers are known to handle.
pub const ATS_SAFE_FONTS: &[&str] = &[
    "Calibri",
    "Arial",
    "Times New Roman",
    "Helvetica",
    "Georgia",
    "Cambria",
];

/// Text colors that do not trip ATS heuristics: black body text,
/// standard hyperlink blue, and the theme-default marker.
pub const SAFE_COLORS: &[&str] = &["000000", "0000FF", "auto"];

/// Section headings an ATS scans for when segmenting a resume.
pub const SECTION_KEYWORDS: &[&str] = &["experience", "education", "skills"];

/// Upload limit enforced by the most restrictive common ATS portals.
pub const MAX_FILE_SIZE_KB: u64 = 2048;

/// Recruiters expect one page, tolerate two.
pub const MAX_PAGES: usize = 2;

/// How long to wait for `pdftotext` before giving up on extraction.
pub const EXTRACT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("file not found: {0}")]
    InputNotFound(String),
    #[error("unsupported file type '{0}' (expected .docx or .pdf)")]
    UnsupportedFormat(String),
    #[error("could not read artifact: {0}")]
    Malformed(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Run the full compliance suite against a rendered artifact,
/// dispatching on the file extension.
pub fn check_file(path: &Path) -> Result<ComplianceReport, CheckError> {
    if !path.exists() {
        return Err(CheckError::InputNotFound(path.display().to_string()));
    }
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "docx" => docx::check_docx(path),
        "pdf" => pdf::check_pdf(path),
        other => Err(CheckError::UnsupportedFormat(format!(".{other}"))),
    }
}

/// Render a finished report for the terminal, one line per check.
pub fn format_report(report: &ComplianceReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "=".repeat(60)));
    out.push_str(&format!("ATS compliance: {}\n", report.file));
    out.push_str(&format!("{}\n", "=".repeat(60)));
    for result in &report.results {
        out.push_str(&format!(
            "[{}] {}: {}\n",
            result.status.tag(),
            result.name,
            result.detail
        ));
    }
    let checked = report.checked();
    if report.ats_ready() {
        out.push_str(&format!(
            "\n{}/{} checks passed - ATS ready\n",
            report.passed(),
            checked
        ));
    } else {
        out.push_str(&format!(
            "\n{} warning(s) - review before submitting\n",
            report.warnings()
        ));
    }
    out
}
