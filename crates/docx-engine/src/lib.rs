//! DOCX renderer
//!
//! Renders a parsed [`Document`] into a structured office-document
//! package. Each block maps to a native paragraph/style combination
//! chosen for compatibility with parsers that key off built-in style
//! names, and hyperlinks are embedded as relationship-based external
//! links so targets survive extraction.

pub mod styles;

use std::fs;
use std::io::Cursor;
use std::path::Path;

use docx_rs::{
    AlignmentType, Docx, Hyperlink, HyperlinkType, IndentLevel, NumberingId, Paragraph, Run,
    RunFonts,
};
use resume_types::{Block, Document, HeadingLevel, ListItem, Segment};
use thiserror::Error;

use crate::styles::{
    define_styles, BLACK, BULLET_INDENT, BULLET_NUMBERING, ENTRY_SIZE, LINK_BLUE, NAME_SIZE,
    SECTION_SIZE, SMALL_SIZE,
};

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("hyperlink for '{0}' has an empty target; refusing to drop it")]
    EmptyLinkTarget(String),

    #[error("failed to assemble the document package: {0}")]
    Package(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Render a document tree into DOCX bytes.
pub fn render(document: &Document) -> Result<Vec<u8>, RenderError> {
    let mut docx = define_styles(Docx::new());

    for block in &document.blocks {
        docx = match block {
            Block::Heading { level, text } => docx.add_paragraph(heading_paragraph(*level, text)),
            Block::ContactLine { segments } => docx.add_paragraph(contact_paragraph(segments)?),
            Block::Paragraph { runs } => docx.add_paragraph(plain_paragraph(runs)?),
            Block::EmphasisLine { text } => docx.add_paragraph(emphasis_paragraph(text)),
            Block::List { items } => {
                for item in items {
                    docx = docx.add_paragraph(bullet_paragraph(item)?);
                }
                docx
            }
        };
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| RenderError::Package(e.to_string()))?;
    tracing::debug!(bytes = buf.get_ref().len(), "rendered docx package");
    Ok(buf.into_inner())
}

/// Render and write the package to `path`.
pub fn render_to_file(document: &Document, path: &Path) -> Result<(), RenderError> {
    let bytes = render(document)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Built-in heading style plus explicit run formatting: font, size and
/// color are fixed, not inherited, so a style-table rewrite cannot
/// change what an ATS extracts.
fn heading_paragraph(level: HeadingLevel, text: &str) -> Paragraph {
    let (style, size) = match level {
        HeadingLevel::H1 => ("Heading1", NAME_SIZE),
        HeadingLevel::H2 => ("Heading2", SECTION_SIZE),
        HeadingLevel::H3 => ("Heading3", ENTRY_SIZE),
    };
    let run = body_run(text).size(size).bold().color(BLACK);
    let paragraph = Paragraph::new().style(style).add_run(run);
    if level == HeadingLevel::H1 {
        paragraph.align(AlignmentType::Center)
    } else {
        paragraph
    }
}

/// Centered plain paragraph; pipe-delimited segments joined by literal
/// `" | "` runs, with each embedded hyperlink re-attached to its
/// segment.
fn contact_paragraph(segments: &[Segment]) -> Result<Paragraph, RenderError> {
    let mut paragraph = Paragraph::new().align(AlignmentType::Center);

    for (i, segment) in segments.iter().enumerate() {
        if !segment.prefix.is_empty() {
            paragraph = paragraph.add_run(body_run(&segment.prefix).size(SMALL_SIZE));
        }
        if let Some((text, url)) = &segment.link {
            paragraph = paragraph.add_hyperlink(external_link(text, url, Some(SMALL_SIZE))?);
        }
        if !segment.suffix.is_empty() {
            paragraph = paragraph.add_run(body_run(&segment.suffix).size(SMALL_SIZE));
        }
        if i + 1 < segments.len() {
            paragraph = paragraph.add_run(body_run(" | ").size(SMALL_SIZE));
        }
    }

    Ok(paragraph)
}

fn plain_paragraph(runs: &[resume_types::Run]) -> Result<Paragraph, RenderError> {
    add_runs(Paragraph::new(), runs)
}

fn emphasis_paragraph(text: &str) -> Paragraph {
    Paragraph::new().add_run(body_run(text).italic().size(SMALL_SIZE))
}

fn bullet_paragraph(item: &ListItem) -> Result<Paragraph, RenderError> {
    let paragraph = Paragraph::new()
        .style("ListBullet")
        .numbering(
            NumberingId::new(BULLET_NUMBERING),
            IndentLevel::new(0),
        )
        .indent(Some(BULLET_INDENT), None, None, None);
    add_runs(paragraph, &item.runs)
}

/// Splice styled runs into a paragraph, emitting relationship-based
/// hyperlink elements for linked runs. Link targets are preserved
/// exactly; an empty target is an error, never silently dropped.
fn add_runs(
    mut paragraph: Paragraph,
    runs: &[resume_types::Run],
) -> Result<Paragraph, RenderError> {
    for run in runs {
        if let Some(url) = &run.link {
            paragraph = paragraph.add_hyperlink(external_link(&run.text, url, None)?);
            continue;
        }

        let mut r = body_run(&run.text);
        if run.bold {
            r = r.bold();
        }
        if run.italic {
            r = r.italic();
        }
        paragraph = paragraph.add_run(r);
    }
    Ok(paragraph)
}

/// Two-step hyperlink contract: the `Hyperlink` element registers an
/// external relationship for the URL and the visible run references it,
/// styled in the conventional link blue with underline.
fn external_link(text: &str, url: &str, size: Option<usize>) -> Result<Hyperlink, RenderError> {
    if url.is_empty() {
        return Err(RenderError::EmptyLinkTarget(text.to_string()));
    }
    let mut run = body_run(text).color(LINK_BLUE).underline("single");
    if let Some(size) = size {
        run = run.size(size);
    }
    Ok(Hyperlink::new(url, HyperlinkType::External).add_run(run))
}

fn body_run(text: &str) -> Run {
    Run::new()
        .add_text(text)
        .fonts(RunFonts::new().ascii(styles::BODY_FONT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use resume_types::Run as ModelRun;

    fn sample_document() -> Document {
        resume_parser::parse(
            "# Jane Doe\n\n\
             jane@x.com | [linkedin.com/in/jane](https://linkedin.com/in/jane) | 555-1234\n\n\
             ## Experience\n\n\
             **Senior Engineer**\nAcme Corp, 2020-2024\n\n\
             - **Led** team of 5\n- Shipped [the product](https://example.com/p)\n",
        )
    }

    #[test]
    fn renders_a_zip_package() {
        let bytes = render(&sample_document()).unwrap();
        // DOCX packages are ZIP archives.
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn empty_link_target_is_an_error() {
        let doc = Document::new(vec![Block::Paragraph {
            runs: vec![ModelRun::linked("broken", "")],
        }]);
        match render(&doc) {
            Err(RenderError::EmptyLinkTarget(text)) => assert_eq!(text, "broken"),
            other => panic!("expected EmptyLinkTarget, got {other:?}"),
        }
    }

    #[test]
    fn renders_empty_document() {
        let bytes = render(&Document::default()).unwrap();
        assert!(!bytes.is_empty());
    }

    #[test]
    fn render_to_file_writes_package() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.docx");
        render_to_file(&sample_document(), &path).unwrap();
        assert!(path.metadata().unwrap().len() > 0);
    }
}
