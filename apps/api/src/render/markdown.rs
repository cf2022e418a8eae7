//! Markdown → HTML for model output.
//!
//! The model's text crosses a trust boundary: anything it returns is treated
//! as untrusted. Raw HTML events from the parser are demoted to text so they
//! are entity-escaped instead of injected into the page.

use pulldown_cmark::{html, Event, Options, Parser};

/// Renders Markdown-flavored article text to sanitized HTML.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_STRIKETHROUGH).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
