//! End-to-end: render a resume with both engines, then run the
//! compliance checker against the produced files.

use std::path::Path;

use pretty_assertions::assert_eq;
use resume_types::CheckStatus;

const SAMPLE: &str = "\
# Jane Doe

[jane@example.com](mailto:jane@example.com) | Seattle, WA | [linkedin.com/in/janedoe](https://linkedin.com/in/janedoe)

## Experience

### **Senior Engineer, Acme Corp**
*2019 - Present*

- **Led** a team of 5 engineers
- Cut p99 latency by 40%

## Education

### **B.S. Computer Science, State University**
*2015*

## Skills

- Rust, SQL, Kubernetes
";

fn render_docx(dir: &Path) -> std::path::PathBuf {
    let document = resume_parser::parse(SAMPLE);
    let path = dir.join("resume.docx");
    docx_engine::render_to_file(&document, &path).unwrap();
    path
}

fn render_pdf(dir: &Path) -> std::path::PathBuf {
    let document = resume_parser::parse(SAMPLE);
    let path = dir.join("resume.pdf");
    typst_engine::render_to_file(&document, &path).unwrap();
    path
}

#[test]
fn rendered_docx_is_ats_ready() {
    let dir = tempfile::tempdir().unwrap();
    let report = ats_engine::check_file(&render_docx(dir.path())).unwrap();

    for result in &report.results {
        assert_ne!(
            result.status,
            CheckStatus::Warn,
            "{}: {}",
            result.name,
            result.detail
        );
    }
    assert!(report.ats_ready());
}

#[test]
fn docx_report_covers_all_nine_checks_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let report = ats_engine::check_file(&render_docx(dir.path())).unwrap();

    let names: Vec<&str> = report.results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Heading styles",
            "Fonts",
            "Tables",
            "Images",
            "Colors",
            "Emoji",
            "Layout",
            "Hyperlinks",
            "Styles used",
        ]
    );
}

#[test]
fn docx_headings_and_hyperlinks_are_visible_to_the_checker() {
    let dir = tempfile::tempdir().unwrap();
    let report = ats_engine::check_file(&render_docx(dir.path())).unwrap();

    let by_name = |name: &str| {
        report
            .results
            .iter()
            .find(|r| r.name == name)
            .unwrap_or_else(|| panic!("missing check {name}"))
    };
    assert_eq!(by_name("Heading styles").status, CheckStatus::Pass);
    // Two contact links in the sample, both as real hyperlink rels.
    let links = by_name("Hyperlinks");
    assert_eq!(links.status, CheckStatus::Pass);
    assert!(links.detail.starts_with("2 "));
}

#[test]
fn rendered_pdf_passes_size_and_page_checks() {
    let dir = tempfile::tempdir().unwrap();
    let report = ats_engine::check_file(&render_pdf(dir.path())).unwrap();

    let by_name = |name: &str| report.results.iter().find(|r| r.name == name);

    let size = by_name("File size").expect("file size check always runs");
    assert_eq!(size.status, CheckStatus::Pass);

    let pages = by_name("Page count").expect("page table of a fresh render is readable");
    assert_eq!(pages.status, CheckStatus::Pass);

    // Extraction depends on whether poppler-utils is installed; it
    // must never WARN for a text-based render.
    let extraction = by_name("Text extraction").expect("extraction check always runs");
    assert_ne!(extraction.status, CheckStatus::Warn);
    if extraction.status == CheckStatus::Pass {
        assert_eq!(
            by_name("Sections").map(|r| r.status),
            Some(CheckStatus::Pass)
        );
        assert_eq!(by_name("Emoji").map(|r| r.status), Some(CheckStatus::Pass));
    }
}

#[test]
fn every_link_becomes_exactly_one_relationship() {
    let source = "\
Shipped [the product](https://example.com/p) and wrote \
[the docs](https://example.com/d)

- See [the talk](https://example.com/t)
";
    let document = resume_parser::parse(source);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("links.docx");
    docx_engine::render_to_file(&document, &path).unwrap();

    let package = ats_engine::DocxPackage::open(&path).unwrap();
    assert_eq!(package.hyperlinks, 3);
}

#[test]
fn missing_extraction_tool_skips_without_blocking_other_checks() {
    if ats_engine::extract::tool_available() {
        // Exercised only on hosts without poppler-utils; the
        // installed-tool path is covered above.
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let report = ats_engine::check_file(&render_pdf(dir.path())).unwrap();

    let by_name = |name: &str| report.results.iter().find(|r| r.name == name);
    assert_eq!(
        by_name("Text extraction").map(|r| r.status),
        Some(CheckStatus::Skip)
    );
    assert_eq!(
        by_name("File size").map(|r| r.status),
        Some(CheckStatus::Pass)
    );
    assert_eq!(
        by_name("Page count").map(|r| r.status),
        Some(CheckStatus::Pass)
    );
    assert!(report.ats_ready());
}

#[test]
fn checking_the_same_artifact_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = render_docx(dir.path());
    let first = ats_engine::check_file(&path).unwrap();
    let second = ats_engine::check_file(&path).unwrap();
    assert_eq!(first, second);
}
