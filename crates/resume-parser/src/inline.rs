//! Inline event accumulation for a single block.

use pulldown_cmark::{Event, Tag, TagEnd};
use resume_types::{strip_emojis, Run};

/// Accumulates inline events into styled runs, tracking bold/italic
/// nesting and the enclosing hyperlink. Emoji are stripped from every
/// text span as it is stored, so renderers never see them.
#[derive(Default)]
pub struct InlineCollector {
    runs: Vec<Run>,
    links: Vec<(String, String)>,
    bold: usize,
    italic: usize,
    link: Option<LinkContext>,
}

struct LinkContext {
    url: String,
    text: String,
}

impl InlineCollector {
    pub fn handle(&mut self, event: &Event<'_>) {
        match event {
            Event::Start(Tag::Strong) => self.bold += 1,
            Event::End(TagEnd::Strong) => self.bold = self.bold.saturating_sub(1),
            Event::Start(Tag::Emphasis) => self.italic += 1,
            Event::End(TagEnd::Emphasis) => self.italic = self.italic.saturating_sub(1),
            Event::Start(Tag::Link { dest_url, .. }) => {
                self.link = Some(LinkContext {
                    url: dest_url.to_string(),
                    text: String::new(),
                });
            }
            Event::End(TagEnd::Link) => {
                if let Some(ctx) = self.link.take() {
                    self.links.push((ctx.text, ctx.url));
                }
            }
            Event::Text(text) | Event::Code(text) => self.push_text(text),
            Event::SoftBreak | Event::HardBreak => self.push_text(" "),
            _ => {}
        }
    }

    /// Insert a single-space separator between flattened sub-blocks.
    pub fn separate(&mut self) {
        if let Some(last) = self.runs.last() {
            if !last.text.ends_with(' ') {
                self.push_text(" ");
            }
        }
    }

    fn push_text(&mut self, text: &str) {
        let clean = strip_emojis(text);
        if clean.is_empty() {
            return;
        }
        if let Some(ctx) = &mut self.link {
            ctx.text.push_str(&clean);
        }

        let bold = self.bold > 0;
        let italic = self.italic > 0;
        let link = self.link.as_ref().map(|ctx| ctx.url.clone());

        // Merge into the previous run when the styling is unchanged.
        if let Some(last) = self.runs.last_mut() {
            if last.bold == bold && last.italic == italic && last.link == link {
                last.text.push_str(&clean);
                return;
            }
        }
        self.runs.push(Run {
            text: clean,
            bold,
            italic,
            link,
        });
    }

    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Hyperlinks encountered, in source order: (visible text, target).
    pub fn links(&self) -> &[(String, String)] {
        &self.links
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn into_runs(self) -> Vec<Run> {
        self.runs
    }
}
