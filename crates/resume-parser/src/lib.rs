//! Markdown resume parser
//!
//! Turns loosely-structured Markdown into an ordered [`Document`] tree
//! of typed blocks. The parser has no knowledge of output formats and
//! never fails: unrecognized constructs degrade to plain paragraphs so
//! text is preserved even when structure is flattened.

pub mod classify;
mod inline;
pub mod preprocess;

use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use resume_types::{strip_emojis, Block, Document, Run};

use crate::classify::{classify_heading, classify_paragraph};
use crate::inline::InlineCollector;
use crate::preprocess::pair_title_lines;

/// Parse raw Markdown into a semantic document tree.
///
/// Best-effort classification: headings map to `Heading` blocks, a
/// paragraph containing both `|` and `@` becomes a `ContactLine`, an
/// emphasis-only paragraph becomes an `EmphasisLine`, bullet lists
/// recurse into items, and everything else becomes a `Paragraph`.
pub fn parse(raw: &str) -> Document {
    let prepared = pair_title_lines(raw);
    let mut events = Parser::new(&prepared);
    let mut blocks = Vec::new();

    while let Some(event) = events.next() {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                let collected = collect_until(&mut events, |e| {
                    matches!(e, Event::End(TagEnd::Heading(_)))
                });
                blocks.push(classify_heading(level, collected));
            }
            Event::Start(Tag::Paragraph) => {
                let collected = collect_until(&mut events, |e| {
                    matches!(e, Event::End(TagEnd::Paragraph))
                });
                blocks.push(classify_paragraph(collected));
            }
            Event::Start(Tag::List(_)) => {
                let items = collect_list(&mut events);
                if !items.is_empty() {
                    blocks.push(Block::List { items });
                }
            }
            Event::Start(Tag::CodeBlock(_)) => {
                // Code fences have no resume semantics; keep the text
                // as a plain paragraph.
                let text = collect_plain(&mut events, |e| {
                    matches!(e, Event::End(TagEnd::CodeBlock))
                });
                let text = text.trim_end().to_string();
                if !text.is_empty() {
                    blocks.push(Block::Paragraph {
                        runs: vec![Run::plain(text)],
                    });
                }
            }
            // Blockquote wrappers are flattened: their inner paragraphs
            // are classified as if they were top-level.
            Event::Start(Tag::BlockQuote(_)) | Event::End(TagEnd::BlockQuote(_)) => {}
            Event::Rule => {}
            other => {
                tracing::trace!(?other, "skipping unclassified top-level event");
            }
        }
    }

    Document::new(blocks)
}

/// Run the inline collector until `stop` matches.
fn collect_until<'a, I, F>(events: &mut I, stop: F) -> InlineCollector
where
    I: Iterator<Item = Event<'a>>,
    F: Fn(&Event<'a>) -> bool,
{
    let mut collector = InlineCollector::default();
    for event in events.by_ref() {
        if stop(&event) {
            break;
        }
        collector.handle(&event);
    }
    collector
}

/// Gather raw text (emoji-stripped) until `stop` matches.
fn collect_plain<'a, I, F>(events: &mut I, stop: F) -> String
where
    I: Iterator<Item = Event<'a>>,
    F: Fn(&Event<'a>) -> bool,
{
    let mut text = String::new();
    for event in events.by_ref() {
        if stop(&event) {
            break;
        }
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(&strip_emojis(&t)),
            Event::SoftBreak | Event::HardBreak => text.push('\n'),
            _ => {}
        }
    }
    text
}

/// Collect the items of a list, flattening nested structure into the
/// owning item's runs.
fn collect_list<'a, I>(events: &mut I) -> Vec<resume_types::ListItem>
where
    I: Iterator<Item = Event<'a>>,
{
    let mut items = Vec::new();
    while let Some(event) = events.next() {
        match event {
            Event::Start(Tag::Item) => {
                let runs = collect_item(events);
                if !runs.is_empty() {
                    items.push(resume_types::ListItem::new(runs));
                }
            }
            Event::End(TagEnd::List(_)) => break,
            _ => {}
        }
    }
    items
}

/// Collect one item's inline content up to its matching end tag.
/// Nested lists and paragraphs inside the item are flattened into the
/// item's run sequence, separated by single spaces.
fn collect_item<'a, I>(events: &mut I) -> Vec<Run>
where
    I: Iterator<Item = Event<'a>>,
{
    let mut collector = InlineCollector::default();
    let mut depth = 0usize;
    for event in events.by_ref() {
        match &event {
            Event::Start(Tag::Item) => depth += 1,
            Event::End(TagEnd::Item) => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
                collector.separate();
            }
            Event::End(TagEnd::Paragraph) | Event::End(TagEnd::List(_)) => {
                collector.separate();
            }
            _ => collector.handle(&event),
        }
    }
    collector.into_runs()
}
