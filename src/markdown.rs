use once_cell::sync::Lazy;
use pulldown_cmark::{html, Options, Parser};
use regex::Regex;

const MAX_PREVIEW_LENGTH: usize = 150;

static MARKDOWN_HEADERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"#{1,6}\s+").unwrap());
static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::empty());
    let mut rendered = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut rendered, parser);
    rendered
}

/// Plain-text preview for history listings: markdown markers stripped,
/// whitespace collapsed, truncated on a character boundary.
pub fn preview(content: &str) -> String {
    let plain = MARKDOWN_HEADERS.replace_all(content, "");
    let plain = plain.replace("**", "").replace('*', "").replace('-', "");
    let plain = WHITESPACE_RUNS.replace_all(&plain, " ");
    let plain = plain.trim();

    match plain.char_indices().nth(MAX_PREVIEW_LENGTH) {
        Some((cut, _)) => format!("{}...", &plain[..cut]),
        None => plain.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{markdown_to_html, preview};

    #[test]
    fn headers_render_as_h2_elements() {
        // given
        let markdown = "## Key Takeaways\n\nSome text.";

        // when
        let rendered = markdown_to_html(markdown);

        // then
        assert!(rendered.contains("<h2>Key Takeaways</h2>"));
        assert!(rendered.contains("<p>Some text.</p>"));
    }

    #[test]
    fn bullet_lists_render_as_list_items() {
        // given
        let markdown = "- first\n- second";

        // when
        let rendered = markdown_to_html(markdown);

        // then
        assert!(rendered.contains("<li>first</li>"));
        assert!(rendered.contains("<li>second</li>"));
    }

    #[test]
    fn the_preview_strips_markdown_markers() {
        // given
        let content = "## Heading\n\n**bold** and *italic* text";

        // when
        let plain = preview(content);

        // then
        assert_eq!(plain, "Heading bold and italic text");
    }

    #[test]
    fn long_previews_are_truncated_with_an_ellipsis() {
        // given
        let content = "word ".repeat(100);

        // when
        let plain = preview(&content);

        // then
        assert_eq!(plain.chars().count(), 153);
        assert!(plain.ends_with("..."));
    }

    #[test]
    fn short_previews_are_returned_whole() {
        // given
        let content = "a short newsletter";

        // when
        let plain = preview(content);

        // then
        assert_eq!(plain, content);
    }
}
