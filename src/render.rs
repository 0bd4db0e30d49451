//! Summary rendering
//!
//! Turns an assembled [`Summary`] into plain text or HTML. HTML output wraps
//! each paragraph block in `<p class="summary-paragraph">` and escapes all
//! sentence text.

use crate::summarizer::assembler::{Summary, SummaryBlock};
use crate::types::BlockStyle;

/// CSS class of every rendered paragraph block
pub const PARAGRAPH_CLASS: &str = "summary-paragraph";

/// Render blocks as plain text, separated by a blank line
pub fn render_plain(summary: &Summary) -> String {
    summary
        .blocks
        .iter()
        .map(SummaryBlock::text)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render blocks as HTML paragraphs with escaped sentence text
pub fn render_html(summary: &Summary) -> String {
    let mut out = String::new();
    for block in &summary.blocks {
        out.push_str("<p class=\"");
        out.push_str(PARAGRAPH_CLASS);
        out.push_str("\">");
        out.push_str(&render_block_html(block));
        out.push_str("</p>");
    }
    out
}

fn render_block_html(block: &SummaryBlock) -> String {
    match block.style {
        BlockStyle::Prose => block
            .sentences
            .iter()
            .map(|s| escape_html(s))
            .collect::<Vec<_>>()
            .join(" "),
        BlockStyle::Bullets => block
            .sentences
            .iter()
            .map(|s| format!("{}{}", BlockStyle::BULLET, escape_html(s)))
            .collect::<Vec<_>>()
            .join("<br>"),
    }
}

/// Escape `& < > " '` for safe embedding in HTML text and attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SummaryMode;

    fn summary(style: BlockStyle) -> Summary {
        Summary {
            blocks: vec![
                SummaryBlock {
                    paragraph_index: 0,
                    sentence_indices: vec![0, 2],
                    sentences: vec!["Cats & dogs.".into(), "It's <fine>.".into()],
                    style,
                },
                SummaryBlock {
                    paragraph_index: 1,
                    sentence_indices: vec![4],
                    sentences: vec!["Birds \"fly\".".into()],
                    style,
                },
            ],
            selected: vec![0, 2, 4],
            total_sentences: 5,
            mode: SummaryMode::Paragraph,
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#039;Jerry&#039;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn test_render_plain_prose() {
        let text = render_plain(&summary(BlockStyle::Prose));
        assert_eq!(text, "Cats & dogs. It's <fine>.\n\nBirds \"fly\".");
    }

    #[test]
    fn test_render_plain_bullets() {
        let text = render_plain(&summary(BlockStyle::Bullets));
        assert_eq!(
            text,
            "\u{2022} Cats & dogs.\n\u{2022} It's <fine>.\n\n\u{2022} Birds \"fly\"."
        );
    }

    #[test]
    fn test_render_html_prose() {
        let html = render_html(&summary(BlockStyle::Prose));
        assert_eq!(
            html,
            "<p class=\"summary-paragraph\">Cats &amp; dogs. It&#039;s &lt;fine&gt;.</p>\
             <p class=\"summary-paragraph\">Birds &quot;fly&quot;.</p>"
        );
    }

    #[test]
    fn test_render_html_bullets() {
        let html = render_html(&summary(BlockStyle::Bullets));
        assert!(html.starts_with("<p class=\"summary-paragraph\">\u{2022} Cats &amp; dogs.<br>\u{2022} It&#039;s"));
        assert_eq!(html.matches("<p ").count(), 2);
    }
}
