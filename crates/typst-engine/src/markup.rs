//! Document tree → Typst markup.
//!
//! The emitted source keeps one block per paragraph, separated by blank
//! lines, so the header-box pass can pattern-match the rendered markup
//! without re-inspecting the tree.

use lazy_static::lazy_static;
use regex::Regex;
use resume_types::{Block, Document, HeadingLevel, Run, Segment};

/// Fixed page and text setup. Single column, US-letter, 0.5 in
/// margins; section headings are uppercased with a bottom rule;
/// headings stick to their following block and lists never split
/// across a page boundary. Bullet glyphs are pinned (disc, then
/// square) because engine-default markers are a known ATS failure
/// mode.
const PREAMBLE: &str = r##"#let header-box(body) = block(
  width: 100%,
  stroke: 2pt + black,
  inset: (x: 12pt, y: 8pt),
  body,
)

#set page(paper: "us-letter", margin: 0.5in)
#set text(size: 10pt, fill: black)
#set par(leading: 0.45em)
#set list(marker: ([•], [▪]), indent: 8pt)

#show link: set text(fill: rgb("#0066cc"))
#show heading: set block(sticky: true)
#show list: set block(breakable: false)

#show heading.where(level: 1): set text(size: 14pt)
#show heading.where(level: 3): set text(size: 11pt)
#show heading.where(level: 2): it => block(above: 12pt, below: 4pt, width: 100%)[
  #set text(size: 12pt)
  #upper(it.body)
  #v(-4pt)
  #line(length: 100%, stroke: 1.5pt + black)
]
"##;

lazy_static! {
    /// First level-1 heading plus its one or two immediately following
    /// short paragraphs. A following paragraph may open with plain
    /// text, a `#link` call (contact line whose first segment is a
    /// hyperlink), or a `#block` call (emphasis line); headings and
    /// list items never join the box. Cosmetic framing only; reading
    /// order is untouched.
    static ref HEADER_RE: Regex =
        Regex::new(r"(?s)(= [^\n]+\n\n(?:(?:#link|#block|[^\n=#-])[^\n]*\n\n){1,2})")
            .expect("valid pattern");
}

/// Emit the complete Typst source for a document.
pub fn typst_source(document: &Document) -> String {
    let mut paragraphs: Vec<String> = Vec::with_capacity(document.blocks.len());
    for block in &document.blocks {
        let rendered = block_markup(block);
        if !rendered.is_empty() {
            paragraphs.push(rendered);
        }
    }
    let mut body = paragraphs.join("\n\n");
    body.push_str("\n\n");
    let body = wrap_header(&body);

    format!("{PREAMBLE}\n{body}")
}

/// One-shot header-box wrap over the rendered markup.
fn wrap_header(body: &str) -> String {
    HEADER_RE
        .replacen(body, 1, "#header-box[\n$1]\n\n")
        .into_owned()
}

fn block_markup(block: &Block) -> String {
    match block {
        Block::Heading { level, text } => {
            let marker = match level {
                HeadingLevel::H1 => "=",
                HeadingLevel::H2 => "==",
                HeadingLevel::H3 => "===",
            };
            format!("{marker} {}", escape(text))
        }
        Block::Paragraph { runs } => runs_markup(runs),
        Block::ContactLine { segments } => segments
            .iter()
            .map(segment_markup)
            .collect::<Vec<_>>()
            .join(" | "),
        Block::EmphasisLine { text } => {
            format!(
                "#block(above: 2pt, below: 3pt, text(size: 9pt, fill: rgb(\"#333333\"), emph[{}]))",
                escape(text)
            )
        }
        Block::List { items } => items
            .iter()
            .map(|item| format!("- {}", runs_markup(&item.runs)))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn segment_markup(segment: &Segment) -> String {
    match &segment.link {
        Some((text, url)) => format!(
            "{}{}{}",
            escape(&segment.prefix),
            link_markup(text, url),
            escape(&segment.suffix)
        ),
        None => escape(&segment.prefix),
    }
}

fn runs_markup(runs: &[Run]) -> String {
    let mut out = String::new();
    for run in runs {
        let core = match &run.link {
            Some(url) => link_markup(&run.text, url),
            None => escape(&run.text),
        };
        let core = if run.italic {
            format!("_{core}_")
        } else {
            core
        };
        let core = if run.bold { format!("*{core}*") } else { core };
        out.push_str(&core);
    }
    out
}

fn link_markup(text: &str, url: &str) -> String {
    format!("#link(\"{}\")[{}]", escape_str(url), escape(text))
}

/// Escape markup-significant characters so arbitrary resume text can
/// never change document structure (stray `=`/`-` line starts, `//`
/// comments, math shorthands).
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '#' | '$' | '*' | '_' | '[' | ']' | '`' | '<' | '>' | '@' | '~' | '/' | '='
            | '-' | '+' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Escape for a Typst string literal.
fn escape_str(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
