//! Block classification.
//!
//! All structural heuristics live here so they can be unit-tested and
//! swapped without touching either renderer (the renderers only ever
//! see tagged blocks).

use pulldown_cmark::HeadingLevel as MdLevel;
use resume_types::{Block, HeadingLevel, Run, Segment};

use crate::inline::InlineCollector;

/// Map a Markdown heading onto a `Heading` block. Levels beyond three
/// carry no resume semantics and degrade to plain paragraphs.
pub fn classify_heading(level: MdLevel, collected: InlineCollector) -> Block {
    let mapped = match level {
        MdLevel::H1 => Some(HeadingLevel::H1),
        MdLevel::H2 => Some(HeadingLevel::H2),
        MdLevel::H3 => Some(HeadingLevel::H3),
        _ => None,
    };
    match mapped {
        Some(level) => Block::Heading {
            level,
            text: collected.plain_text().trim().to_string(),
        },
        None => Block::Paragraph {
            runs: trimmed_runs(collected),
        },
    }
}

/// Classify a paragraph by structural rules, not styling:
/// `|` + `@` in the plain text means contact information, an
/// emphasis-only paragraph is a date/location caption, anything else
/// stays a plain paragraph.
pub fn classify_paragraph(collected: InlineCollector) -> Block {
    let plain = collected.plain_text();

    if plain.contains('|') && plain.contains('@') {
        return Block::ContactLine {
            segments: split_segments(&plain, collected.links()),
        };
    }

    let runs = collected.runs();
    if !runs.is_empty() && runs.iter().all(|r| r.italic && r.link.is_none()) {
        return Block::EmphasisLine {
            text: plain.trim().to_string(),
        };
    }

    Block::Paragraph {
        runs: collected.into_runs(),
    }
}

/// Split a contact line into pipe-delimited segments, re-attaching each
/// embedded hyperlink to the part that contains its visible text.
///
/// The match is by string containment, first hit wins: when an anchor's
/// text recurs verbatim inside the same part, the link attaches to the
/// first occurrence. That ambiguity is inherited behavior and is pinned
/// down in the tests rather than disambiguated here.
pub fn split_segments(plain: &str, links: &[(String, String)]) -> Vec<Segment> {
    plain
        .split('|')
        .map(|part| {
            let part = part.trim();
            let matched = links
                .iter()
                .find(|(text, _)| !text.trim().is_empty() && part.contains(text.trim()));
            match matched {
                Some((text, url)) => {
                    let anchor = text.trim();
                    // `find` cannot fail: containment was just checked.
                    let start = part.find(anchor).unwrap_or(0);
                    Segment::with_link(
                        &part[..start],
                        anchor,
                        url.clone(),
                        &part[start + anchor.len()..],
                    )
                }
                None => Segment::text(part),
            }
        })
        .collect()
}

fn trimmed_runs(collected: InlineCollector) -> Vec<Run> {
    let mut runs = collected.into_runs();
    if let Some(first) = runs.first_mut() {
        first.text = first.text.trim_start().to_string();
    }
    if let Some(last) = runs.last_mut() {
        last.text = last.text.trim_end().to_string();
    }
    runs.retain(|r| !r.text.is_empty());
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn segment_count_is_pipe_count_plus_one() {
        for n in 1..6 {
            let parts: Vec<String> = (0..n).map(|i| format!("part{i}@x")).collect();
            let plain = parts.join(" | ");
            let segments = split_segments(&plain, &[]);
            assert_eq!(segments.len(), n);
        }
    }

    #[test]
    fn link_reattached_with_prefix_and_suffix() {
        let links = vec![(
            "linkedin.com/in/jane".to_string(),
            "https://linkedin.com/in/jane".to_string(),
        )];
        let segments = split_segments("jane@x.com | see linkedin.com/in/jane today", &links);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], Segment::text("jane@x.com"));
        assert_eq!(
            segments[1],
            Segment::with_link(
                "see ",
                "linkedin.com/in/jane",
                "https://linkedin.com/in/jane",
                " today"
            )
        );
    }

    #[test]
    fn unmatched_link_leaves_segment_plain() {
        let links = vec![("elsewhere".to_string(), "https://e.com".to_string())];
        let segments = split_segments("jane@x.com | 555-1234", &links);
        assert!(segments.iter().all(|s| s.link.is_none()));
    }

    #[test]
    fn repeated_anchor_text_attaches_to_first_occurrence() {
        // Known-ambiguous: "git" appears twice in the part; the split
        // points at the first occurrence even though the author may
        // have linked the second.
        let links = vec![("git".to_string(), "https://git.example".to_string())];
        let segments = split_segments("me@x.com | git tools on git", &links);
        assert_eq!(
            segments[1],
            Segment::with_link("", "git", "https://git.example", " tools on git")
        );
    }

    #[test]
    fn segment_plain_text_round_trips() {
        let links = vec![("GitHub".to_string(), "https://github.com/j".to_string())];
        let segments = split_segments("j@x.com | GitHub", &links);
        assert_eq!(segments[1].plain_text(), "GitHub");
    }
}
