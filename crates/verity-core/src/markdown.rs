//! Markdown-to-prose extraction.
//!
//! Submissions often arrive as markdown. Markup, code and headings would
//! skew sentence statistics, so they are removed with a real CommonMark
//! parser (pulldown-cmark) before scoring.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Extract scorable prose from markdown.
///
/// Removes code (fenced, indented, inline), headings, tables, HTML and YAML
/// front matter. Keeps paragraph, list item, blockquote, link and emphasis
/// text. Block boundaries become blank lines so paragraphs stay separate
/// and sentence splitting is unaffected by the removed markup.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_to_prose(text: &str) -> String {
    let body = strip_front_matter(text);
    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;

    let mut prose = String::with_capacity(body.len());
    let mut skip_depth: usize = 0;

    for event in Parser::new_ext(body, options) {
        match event {
            Event::Start(Tag::CodeBlock(_) | Tag::Heading { .. } | Tag::Table(_)) => {
                skip_depth += 1;
            }
            Event::End(TagEnd::CodeBlock | TagEnd::Heading(_) | TagEnd::Table) => {
                skip_depth = skip_depth.saturating_sub(1);
            }
            Event::Text(t) if skip_depth == 0 => prose.push_str(&t),
            Event::SoftBreak | Event::HardBreak if skip_depth == 0 => prose.push(' '),
            Event::End(TagEnd::Paragraph | TagEnd::Item) if skip_depth == 0 => {
                end_block(&mut prose);
            }
            _ => {}
        }
    }

    prose.trim_end().to_string()
}

/// Terminate the current block with a blank line, once.
fn end_block(prose: &mut String) {
    let trimmed_len = prose.trim_end().len();
    prose.truncate(trimmed_len);
    if !prose.is_empty() {
        prose.push_str("\n\n");
    }
}

/// Drop a leading `---` delimited YAML block.
fn strip_front_matter(text: &str) -> &str {
    let trimmed = text.trim_start();
    let Some(after_open) = trimmed.strip_prefix("---") else {
        return text;
    };
    let Some(close) = after_open.find("\n---") else {
        return text;
    };
    let rest = &after_open[close + 4..];
    rest.strip_prefix('\n').unwrap_or(rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_code_blocks() {
        let input = "Some text.\n\n```rust\nlet x = 1;\n```\n\nMore text.";
        let result = strip_to_prose(input);
        assert!(!result.contains("let x"));
        assert_eq!(result, "Some text.\n\nMore text.");
    }

    #[test]
    fn removes_front_matter() {
        let input = "---\nauthor: someone\n---\n\nIn conclusion, it worked.";
        assert_eq!(strip_to_prose(input), "In conclusion, it worked.");
    }

    #[test]
    fn removes_headings_and_tables() {
        let input = "# Essay\n\nFirst point.\n\n| A | B |\n|---|---|\n| 1 | 2 |\n\nSecond point.";
        assert_eq!(strip_to_prose(input), "First point.\n\nSecond point.");
    }

    #[test]
    fn keeps_link_and_emphasis_text() {
        let input = "Read [the notes](https://example.com) and **mind** the *gap*.";
        assert_eq!(strip_to_prose(input), "Read the notes and mind the gap.");
    }

    #[test]
    fn drops_inline_code() {
        let result = strip_to_prose("Call `run()` twice.");
        assert!(!result.contains("run()"));
        assert!(result.starts_with("Call"));
    }

    #[test]
    fn list_items_become_blocks() {
        let result = strip_to_prose("- first item.\n- second item.");
        assert_eq!(result, "first item.\n\nsecond item.");
    }

    #[test]
    fn unterminated_front_matter_left_alone() {
        let input = "---\nno closing fence";
        assert!(strip_to_prose(input).contains("no closing fence"));
    }

    #[test]
    fn empty_input_returns_empty() {
        assert!(strip_to_prose("").is_empty());
    }
}
