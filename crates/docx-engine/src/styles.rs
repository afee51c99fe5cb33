//! Built-in style and numbering definitions.
//!
//! ATS parsers key off built-in style names ("Heading 1", "List
//! Bullet") rather than visual attributes, so the document declares the
//! Word built-ins explicitly and every run additionally carries fixed
//! formatting instead of inheriting it.

use docx_rs::{
    AbstractNumbering, Docx, Level, LevelJc, LevelText, NumberFormat, RunFonts, Start, Style,
    StyleType,
};

/// Default body font, part of the ATS-safe set.
pub const BODY_FONT: &str = "Calibri";

/// Half-point sizes (Word's `w:sz` unit).
pub const BODY_SIZE: usize = 22;
pub const NAME_SIZE: usize = 40;
pub const SECTION_SIZE: usize = 28;
pub const ENTRY_SIZE: usize = 24;
pub const SMALL_SIZE: usize = 20;

pub const BLACK: &str = "000000";
pub const LINK_BLUE: &str = "0000FF";

/// Numbering definition id shared by every bullet paragraph.
pub const BULLET_NUMBERING: usize = 1;

/// Left indent for bullet items, in twips (0.5 in).
pub const BULLET_INDENT: i32 = 720;

pub fn body_fonts() -> RunFonts {
    RunFonts::new().ascii(BODY_FONT)
}

/// Attach the built-in styles and the bullet numbering definition.
pub fn define_styles(docx: Docx) -> Docx {
    docx.default_fonts(body_fonts())
        .default_size(BODY_SIZE)
        .add_style(
            Style::new("Heading1", StyleType::Paragraph)
                .name("Heading 1")
                .bold()
                .size(NAME_SIZE)
                .color(BLACK),
        )
        .add_style(
            Style::new("Heading2", StyleType::Paragraph)
                .name("Heading 2")
                .bold()
                .size(SECTION_SIZE)
                .color(BLACK),
        )
        .add_style(
            Style::new("Heading3", StyleType::Paragraph)
                .name("Heading 3")
                .bold()
                .size(ENTRY_SIZE)
                .color(BLACK),
        )
        .add_style(
            Style::new("ListBullet", StyleType::Paragraph)
                .name("List Bullet")
                .size(BODY_SIZE),
        )
        .add_abstract_numbering(AbstractNumbering::new(BULLET_NUMBERING).add_level(Level::new(
            0,
            Start::new(1),
            NumberFormat::new("bullet"),
            LevelText::new("•"),
            LevelJc::new("left"),
        )))
        .add_numbering(docx_rs::Numbering::new(BULLET_NUMBERING, BULLET_NUMBERING))
}
