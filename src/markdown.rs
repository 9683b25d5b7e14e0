//! Narrative Markdown
//!
//! Case-study text may use inline markdown (emphasis, links, lists).
//! Raw HTML in the source is escaped rather than passed through.

use pulldown_cmark::{html::push_html, Event, Options, Parser};

/// Render markdown to HTML
pub fn render(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::ENABLE_STRIKETHROUGH).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut html = String::new();
    push_html(&mut html, parser);
    html
}

/// Render a single paragraph without the wrapping `<p>`
pub fn render_inline(text: &str) -> String {
    let html = render(text);
    let trimmed = html.trim();
    trimmed
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .filter(|inner| !inner.contains("<p>"))
        .unwrap_or(trimmed)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emphasis() {
        assert_eq!(render_inline("a **bold** *move*"), "a <strong>bold</strong> <em>move</em>");
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_inline("hi <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_multiple_paragraphs_keep_wrappers() {
        let html = render_inline("one\n\ntwo");
        assert!(html.starts_with("<p>one</p>"));
        assert!(html.ends_with("<p>two</p>"));
        assert_eq!(html, html.trim());
    }

    #[test]
    fn test_list_is_trimmed() {
        assert_eq!(render_inline("- a\n- b"), "<ul>\n<li>a</li>\n<li>b</li>\n</ul>");
    }
}
