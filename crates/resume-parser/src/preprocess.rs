//! Textual pre-pass over the raw Markdown.
//!
//! Resumes are commonly written as a flat line pair instead of explicit
//! headings:
//!
//! ```text
//! **Senior Engineer**
//! Acme Corp, 2020-2024
//! ```
//!
//! The pairing depends on line adjacency that the Markdown event stream
//! does not preserve, so it is rewritten before tree construction: the
//! bold-wrapped line becomes a level-3 heading and the following plain
//! line becomes an emphasized caption.

/// Rewrite `**title**` / plain-caption line pairs into
/// `### **title**` / `*caption*`.
pub fn pair_title_lines(raw: &str) -> String {
    let lines: Vec<&str> = raw.lines().collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].trim();
        if is_bold_wrapped(line) {
            if let Some(next) = lines.get(i + 1).map(|l| l.trim()) {
                if !next.is_empty() && !next.starts_with('#') && !is_bullet(next) {
                    out.push(format!("### {line}"));
                    out.push(format!("*{next}*"));
                    i += 2;
                    continue;
                }
            }
        }
        out.push(lines[i].to_string());
        i += 1;
    }

    out.join("\n")
}

fn is_bold_wrapped(line: &str) -> bool {
    line.starts_with("**") && line.len() > 2 && line[2..].contains("**")
}

fn is_bullet(line: &str) -> bool {
    line.starts_with("- ")
        || line.starts_with("* ")
        || line.starts_with("+ ")
        || line.starts_with('■')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pairs_bold_title_with_following_caption() {
        let input = "**Staff Engineer**\nInitech, Austin TX\n";
        assert_eq!(
            pair_title_lines(input),
            "### **Staff Engineer**\n*Initech, Austin TX*"
        );
    }

    #[test]
    fn leaves_bold_line_before_bullet_alone() {
        let input = "**Highlights**\n- shipped the thing";
        assert_eq!(pair_title_lines(input), input);
    }

    #[test]
    fn leaves_bold_line_before_heading_alone() {
        let input = "**Highlights**\n## Experience";
        assert_eq!(pair_title_lines(input), input);
    }

    #[test]
    fn leaves_bold_line_at_end_of_input_alone() {
        assert_eq!(pair_title_lines("**Dangling**"), "**Dangling**");
    }

    #[test]
    fn leaves_bold_line_before_blank_alone() {
        let input = "**Standalone**\n\ntext after gap";
        assert_eq!(pair_title_lines(input), input);
    }

    #[test]
    fn unclosed_bold_marker_is_not_a_title() {
        let input = "**not closed\nnext line";
        assert_eq!(pair_title_lines(input), input);
    }
}
