//! PDF compliance checks.
//!
//! The PDF side has fewer structural signals than DOCX, so the checks
//! lean on extracted text: file size, selectable text, emoji, section
//! keywords, and page count. The page-count check is omitted from the
//! report entirely when the page table cannot be read, since a missing
//! number is worse than no number.

use std::path::Path;

use tracing::debug;

use resume_types::{contains_emoji, CheckResult, ComplianceReport};

use crate::extract::{extract_text, Extraction};
use crate::{CheckError, MAX_FILE_SIZE_KB, MAX_PAGES, SECTION_KEYWORDS};

pub fn check_pdf(path: &Path) -> Result<ComplianceReport, CheckError> {
    let mut report = ComplianceReport::new(path.display().to_string());

    let size_kb = path.metadata()?.len() / 1024;
    if size_kb > MAX_FILE_SIZE_KB {
        report.push(CheckResult::warn(
            "File size",
            format!("{size_kb} KB - many ATS portals cap uploads at {MAX_FILE_SIZE_KB} KB"),
        ));
    } else {
        report.push(CheckResult::pass("File size", format!("{size_kb} KB")));
    }

    let mut extracted = None;
    match extract_text(path) {
        Extraction::Unavailable => report.push(CheckResult::skip(
            "Text extraction",
            "pdftotext not installed (apt install poppler-utils)",
        )),
        Extraction::TimedOut => report.push(CheckResult::warn(
            "Text extraction",
            "pdftotext timed out - file may be malformed",
        )),
        Extraction::Empty => report.push(CheckResult::warn(
            "Text extraction",
            "No text extracted - PDF may be image-based",
        )),
        Extraction::Text(text) => {
            let lines = text.lines().filter(|l| !l.trim().is_empty()).count();
            report.push(CheckResult::pass(
                "Text extraction",
                format!("{lines} lines extracted - text is selectable"),
            ));
            extracted = Some(text);
        }
    }

    if let Some(text) = &extracted {
        report.push(emoji_check(text));
        report.push(section_check(text));
    }

    if let Some(pages) = page_count(path) {
        if pages > MAX_PAGES {
            report.push(CheckResult::warn(
                "Page count",
                format!("{pages} pages - recruiters expect at most {MAX_PAGES}"),
            ));
        } else {
            report.push(CheckResult::pass("Page count", format!("{pages} page(s)")));
        }
    }

    Ok(report)
}

fn emoji_check(text: &str) -> CheckResult {
    if contains_emoji(text) {
        CheckResult::warn(
            "Emoji",
            "Emoji characters found - some ATS strip or misparse these",
        )
    } else {
        CheckResult::pass("Emoji", "None")
    }
}

fn section_check(text: &str) -> CheckResult {
    let lowered = text.to_lowercase();
    let missing: Vec<&str> = SECTION_KEYWORDS
        .iter()
        .copied()
        .filter(|kw| !lowered.contains(kw))
        .collect();
    if missing.is_empty() {
        CheckResult::pass("Sections", "Standard section keywords present")
    } else {
        CheckResult::warn(
            "Sections",
            format!("Missing standard sections: {}", missing.join(", ")),
        )
    }
}

fn page_count(path: &Path) -> Option<usize> {
    match lopdf::Document::load(path) {
        Ok(doc) => Some(doc.get_pages().len()),
        Err(e) => {
            debug!(error = %e, "could not read PDF page table");
            None
        }
    }
}
