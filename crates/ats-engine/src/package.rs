//! Raw OOXML package introspection.
//!
//! Reads the parts of a `.docx` archive the compliance checks need
//! (`word/document.xml`, `word/styles.xml`, the relationship table)
//! and flattens them into plain Rust structures. Only the handful of
//! WordprocessingML elements the checks care about are interpreted;
//! everything else is skipped.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use zip::ZipArchive;

use crate::CheckError;

/// One `w:p` element, reduced to what the checks inspect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParagraphInfo {
    /// Paragraph style id, `"Normal"` when unstyled.
    pub style: String,
    /// Concatenated `w:t` text content.
    pub text: String,
    /// Explicit run fonts (`w:rFonts/@w:ascii`).
    pub fonts: BTreeSet<String>,
    /// Explicit run colors (`w:color/@w:val`).
    pub colors: BTreeSet<String>,
}

/// Flattened view of a `.docx` archive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocxPackage {
    pub paragraphs: Vec<ParagraphInfo>,
    pub tables: usize,
    pub multi_column: bool,
    pub hyperlinks: usize,
    pub images: usize,
    /// Document default font from `word/styles.xml`, when declared.
    pub default_font: Option<String>,
}

impl DocxPackage {
    pub fn open(path: &Path) -> Result<Self, CheckError> {
        let file = File::open(path)?;
        let mut archive =
            ZipArchive::new(file).map_err(|e| CheckError::Malformed(e.to_string()))?;

        let document = read_part(&mut archive, "word/document.xml")?
            .ok_or_else(|| CheckError::Malformed("missing word/document.xml".into()))?;
        let mut package = parse_document(&document)?;

        if let Some(styles) = read_part(&mut archive, "word/styles.xml")? {
            package.default_font = parse_default_font(&styles)?;
        }
        if let Some(rels) = read_part(&mut archive, "word/_rels/document.xml.rels")? {
            let (hyperlinks, images) = parse_relationships(&rels)?;
            package.hyperlinks = hyperlinks;
            package.images = images;
        }
        Ok(package)
    }

    /// All explicit run fonts used anywhere in the body.
    pub fn fonts_used(&self) -> BTreeSet<&str> {
        self.paragraphs
            .iter()
            .flat_map(|p| p.fonts.iter().map(String::as_str))
            .collect()
    }

    /// All explicit run colors used anywhere in the body.
    pub fn colors_used(&self) -> BTreeSet<&str> {
        self.paragraphs
            .iter()
            .flat_map(|p| p.colors.iter().map(String::as_str))
            .collect()
    }
}

fn read_part<R: Read + std::io::Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Result<Option<String>, CheckError> {
    match archive.by_name(name) {
        Ok(mut part) => {
            let mut xml = String::new();
            part.read_to_string(&mut xml)?;
            Ok(Some(xml))
        }
        Err(zip::result::ZipError::FileNotFound) => Ok(None),
        Err(e) => Err(CheckError::Malformed(e.to_string())),
    }
}

fn get_attr(element: &BytesStart, key: &[u8]) -> Option<String> {
    element
        .attributes()
        .filter_map(Result::ok)
        .find(|a| a.key.as_ref() == key)
        .map(|a| String::from_utf8_lossy(&a.value).into_owned())
}

fn parse_document(xml: &str) -> Result<DocxPackage, CheckError> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();

    let mut package = DocxPackage::default();
    let mut current: Option<ParagraphInfo> = None;
    let mut in_text = false;

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| CheckError::Malformed(e.to_string()))?;
        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                let start_only = matches!(event, Event::Start(_));
                match e.name().as_ref() {
                    b"w:p" if start_only => {
                        current = Some(ParagraphInfo {
                            style: "Normal".to_string(),
                            ..ParagraphInfo::default()
                        });
                    }
                    b"w:pStyle" => {
                        if let (Some(p), Some(val)) = (current.as_mut(), get_attr(e, b"w:val")) {
                            p.style = val;
                        }
                    }
                    b"w:rFonts" => {
                        if let (Some(p), Some(val)) = (current.as_mut(), get_attr(e, b"w:ascii")) {
                            p.fonts.insert(val);
                        }
                    }
                    b"w:color" => {
                        if let (Some(p), Some(val)) = (current.as_mut(), get_attr(e, b"w:val")) {
                            p.colors.insert(val);
                        }
                    }
                    b"w:t" if start_only => in_text = true,
                    b"w:tbl" if start_only => package.tables += 1,
                    b"w:cols" => {
                        let num = get_attr(e, b"w:num")
                            .and_then(|v| v.parse::<u32>().ok())
                            .unwrap_or(1);
                        if num > 1 {
                            package.multi_column = true;
                        }
                    }
                    _ => {}
                }
            }
            Event::Text(ref t) => {
                if in_text {
                    if let (Some(p), Ok(text)) = (current.as_mut(), t.unescape()) {
                        p.text.push_str(&text);
                    }
                }
            }
            Event::End(ref e) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => {
                    if let Some(p) = current.take() {
                        package.paragraphs.push(p);
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }
    Ok(package)
}

/// Document default font: the `w:docDefaults` declaration, or the
/// `Normal` style's font when no default is declared. Fonts declared
/// by other styles (`Heading1` etc.) are never the document default,
/// whatever order the style table lists them in.
fn parse_default_font(xml: &str) -> Result<Option<String>, CheckError> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();

    let mut in_defaults = false;
    let mut in_normal = false;
    let mut default_font = None;
    let mut normal_font = None;

    loop {
        match reader
            .read_event_into(&mut buf)
            .map_err(|e| CheckError::Malformed(e.to_string()))?
        {
            Event::Start(ref e) if e.name().as_ref() == b"w:docDefaults" => in_defaults = true,
            Event::Start(ref e) if e.name().as_ref() == b"w:style" => {
                in_normal = get_attr(e, b"w:styleId").as_deref() == Some("Normal");
            }
            Event::Start(ref e) | Event::Empty(ref e) if e.name().as_ref() == b"w:rFonts" => {
                if let Some(font) = get_attr(e, b"w:ascii") {
                    if in_defaults && default_font.is_none() {
                        default_font = Some(font);
                    } else if in_normal && normal_font.is_none() {
                        normal_font = Some(font);
                    }
                }
            }
            Event::End(ref e) => match e.name().as_ref() {
                b"w:docDefaults" => in_defaults = false,
                b"w:style" => in_normal = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }
    Ok(default_font.or(normal_font))
}

fn parse_relationships(xml: &str) -> Result<(usize, usize), CheckError> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();
    let mut hyperlinks = 0;
    let mut images = 0;
    loop {
        match reader
            .read_event_into(&mut buf)
            .map_err(|e| CheckError::Malformed(e.to_string()))?
        {
            Event::Start(ref e) | Event::Empty(ref e)
                if e.name().as_ref() == b"Relationship" =>
            {
                if let Some(kind) = get_attr(e, b"Type") {
                    if kind.ends_with("/hyperlink") {
                        hyperlinks += 1;
                    } else if kind.ends_with("/image") {
                        images += 1;
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }
    Ok((hyperlinks, images))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DOCUMENT: &str = r#"<?xml version="1.0"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p>
      <w:pPr><w:pStyle w:val="Heading1"/></w:pPr>
      <w:r>
        <w:rPr><w:rFonts w:ascii="Calibri"/><w:color w:val="000000"/></w:rPr>
        <w:t>Jane Doe</w:t>
      </w:r>
    </w:p>
    <w:p>
      <w:r><w:t>jane@example.com</w:t></w:r>
      <w:r><w:t xml:space="preserve"> | Seattle</w:t></w:r>
    </w:p>
    <w:tbl><w:tr><w:tc><w:p><w:r><w:t>cell</w:t></w:r></w:p></w:tc></w:tr></w:tbl>
    <w:sectPr><w:cols w:num="2"/></w:sectPr>
  </w:body>
</w:document>"#;

    #[test]
    fn paragraph_style_text_and_run_properties_are_collected() {
        let package = parse_document(DOCUMENT).unwrap();
        assert_eq!(package.paragraphs.len(), 3);

        let heading = &package.paragraphs[0];
        assert_eq!(heading.style, "Heading1");
        assert_eq!(heading.text, "Jane Doe");
        assert!(heading.fonts.contains("Calibri"));
        assert!(heading.colors.contains("000000"));

        let contact = &package.paragraphs[1];
        assert_eq!(contact.style, "Normal");
        assert_eq!(contact.text, "jane@example.com | Seattle");
    }

    #[test]
    fn tables_and_column_sections_are_detected() {
        let package = parse_document(DOCUMENT).unwrap();
        assert_eq!(package.tables, 1);
        assert!(package.multi_column);
    }

    #[test]
    fn single_column_layout_is_not_flagged() {
        let xml = r#"<w:document xmlns:w="x"><w:body>
            <w:sectPr><w:cols w:num="1"/></w:sectPr>
        </w:body></w:document>"#;
        let package = parse_document(xml).unwrap();
        assert!(!package.multi_column);
    }

    #[test]
    fn relationship_types_are_counted() {
        let xml = r#"<?xml version="1.0"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink" Target="https://example.com" TargetMode="External"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink" Target="mailto:a@b.c" TargetMode="External"/>
  <Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/image" Target="media/image1.png"/>
  <Relationship Id="rId4" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#;
        assert_eq!(parse_relationships(xml).unwrap(), (2, 1));
    }

    #[test]
    fn default_font_comes_from_doc_defaults() {
        let xml = r#"<w:styles xmlns:w="x">
            <w:docDefaults><w:rPrDefault><w:rPr>
                <w:rFonts w:ascii="Calibri" w:hAnsi="Calibri"/>
            </w:rPr></w:rPrDefault></w:docDefaults>
        </w:styles>"#;
        assert_eq!(parse_default_font(xml).unwrap().as_deref(), Some("Calibri"));
    }

    #[test]
    fn heading_style_fonts_never_become_the_default() {
        // Heading style listed before the document defaults.
        let xml = r#"<w:styles xmlns:w="x">
            <w:style w:type="paragraph" w:styleId="Heading1">
                <w:rPr><w:rFonts w:ascii="Georgia"/></w:rPr>
            </w:style>
            <w:docDefaults><w:rPrDefault><w:rPr>
                <w:rFonts w:ascii="Calibri"/>
            </w:rPr></w:rPrDefault></w:docDefaults>
        </w:styles>"#;
        assert_eq!(parse_default_font(xml).unwrap().as_deref(), Some("Calibri"));
    }

    #[test]
    fn normal_style_is_the_fallback_default() {
        let xml = r#"<w:styles xmlns:w="x">
            <w:style w:type="paragraph" w:styleId="Heading1">
                <w:rPr><w:rFonts w:ascii="Georgia"/></w:rPr>
            </w:style>
            <w:style w:type="paragraph" w:styleId="Normal">
                <w:rPr><w:rFonts w:ascii="Arial"/></w:rPr>
            </w:style>
        </w:styles>"#;
        assert_eq!(parse_default_font(xml).unwrap().as_deref(), Some("Arial"));
    }
}
