//! Semantic resume document tree
//!
//! The tree is produced once by the parser and consumed read-only by
//! both renderers. Block order is meaningful (top-to-bottom rendering)
//! and is never reordered after parse.

use serde::{Deserialize, Serialize};

/// An ordered sequence of typed blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Concatenated plain text of every block, in rendering order.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&block.plain_text());
        }
        out
    }
}

/// Heading depth. Level 1 occurs at most once and denotes the
/// candidate's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    pub fn as_u8(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

/// A typed node of the document tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    Heading {
        level: HeadingLevel,
        text: String,
    },
    Paragraph {
        runs: Vec<Run>,
    },
    /// A paragraph recognized as contact information: its plain text
    /// contains both a pipe delimiter and an `@`. Segments are the
    /// pipe-delimited parts, pre-split so both renderers consume the
    /// same link attachment.
    ContactLine {
        segments: Vec<Segment>,
    },
    /// A standalone italicized line (date/location captions).
    EmphasisLine {
        text: String,
    },
    List {
        items: Vec<ListItem>,
    },
}

impl Block {
    pub fn plain_text(&self) -> String {
        match self {
            Block::Heading { text, .. } | Block::EmphasisLine { text } => text.clone(),
            Block::Paragraph { runs } => runs_text(runs),
            Block::ContactLine { segments } => segments
                .iter()
                .map(Segment::plain_text)
                .collect::<Vec<_>>()
                .join(" | "),
            Block::List { items } => items
                .iter()
                .map(|item| runs_text(&item.runs))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// A styled contiguous text span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub link: Option<String>,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
            link: None,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            italic: false,
            link: None,
        }
    }

    pub fn linked(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
            link: Some(url.into()),
        }
    }
}

/// One pipe-delimited part of a contact line. When a hyperlink was
/// embedded in the part, `link` carries its visible text and target and
/// `prefix`/`suffix` hold the literal text around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub prefix: String,
    pub link: Option<(String, String)>,
    pub suffix: String,
}

impl Segment {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            prefix: text.into(),
            link: None,
            suffix: String::new(),
        }
    }

    pub fn with_link(
        prefix: impl Into<String>,
        link_text: impl Into<String>,
        url: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            link: Some((link_text.into(), url.into())),
            suffix: suffix.into(),
        }
    }

    pub fn plain_text(&self) -> String {
        match &self.link {
            Some((text, _)) => format!("{}{}{}", self.prefix, text, self.suffix),
            None => self.prefix.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub runs: Vec<Run>,
}

impl ListItem {
    pub fn new(runs: Vec<Run>) -> Self {
        Self { runs }
    }
}

fn runs_text(runs: &[Run]) -> String {
    runs.iter().map(|r| r.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn segment_plain_text_reassembles_link_parts() {
        let seg = Segment::with_link("LinkedIn: ", "linkedin.com/in/jane", "https://linkedin.com/in/jane", "");
        assert_eq!(seg.plain_text(), "LinkedIn: linkedin.com/in/jane");
    }

    #[test]
    fn contact_line_plain_text_joins_with_pipes() {
        let block = Block::ContactLine {
            segments: vec![
                Segment::text("jane@x.com"),
                Segment::text("555-1234"),
            ],
        };
        assert_eq!(block.plain_text(), "jane@x.com | 555-1234");
    }

    #[test]
    fn heading_levels_order() {
        assert!(HeadingLevel::H1 < HeadingLevel::H2);
        assert_eq!(HeadingLevel::H3.as_u8(), 3);
    }
}
