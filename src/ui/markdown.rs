//! Markdown rendering for the legal documents
//!
//! Uses pulldown-cmark to turn the bundled markdown into styled HTML. Raw HTML
//! in the source is escaped rather than passed through.

use leptos::prelude::*;
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// Render a markdown document
#[component]
pub fn Markdown(
    /// The markdown content to render
    content: &'static str,
) -> impl IntoView {
    let html = render_markdown(content);

    view! {
        <div class="legal-prose" inner_html=html />
    }
}

fn heading_tag(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => "h1",
        HeadingLevel::H2 => "h2",
        HeadingLevel::H3 => "h3",
        HeadingLevel::H4 => "h4",
        HeadingLevel::H5 => "h5",
        HeadingLevel::H6 => "h6",
    }
}

/// Convert markdown to HTML
pub fn render_markdown(content: &str) -> String {
    let parser = Parser::new_ext(content, Options::ENABLE_STRIKETHROUGH);
    let mut html = String::with_capacity(content.len() * 3 / 2);

    for event in parser {
        match event {
            Event::Start(tag) => match tag {
                Tag::Paragraph => html.push_str("<p class=\"mb-3 leading-relaxed\">"),
                Tag::Heading { level, .. } => {
                    let class = match level {
                        HeadingLevel::H1 => "text-2xl font-bold mt-6 mb-3",
                        HeadingLevel::H2 => "text-lg font-semibold mt-5 mb-2",
                        _ => "text-base font-semibold mt-4 mb-2",
                    };
                    html.push_str(&format!("<{} class=\"{}\">", heading_tag(level), class));
                }
                Tag::List(Some(_)) => html.push_str("<ol class=\"list-decimal pl-5 mb-3 space-y-1\">"),
                Tag::List(None) => html.push_str("<ul class=\"list-disc pl-5 mb-3 space-y-1\">"),
                Tag::Item => html.push_str("<li>"),
                Tag::Emphasis => html.push_str("<em>"),
                Tag::Strong => html.push_str("<strong class=\"font-semibold\">"),
                Tag::Strikethrough => html.push_str("<del>"),
                Tag::Link { dest_url, .. } => {
                    html.push_str(&format!(
                        "<a href=\"{}\" class=\"text-accent underline\" target=\"_blank\" rel=\"noopener noreferrer\">",
                        escape_html(&dest_url)
                    ));
                }
                _ => {}
            },
            Event::End(tag) => match tag {
                TagEnd::Paragraph => html.push_str("</p>"),
                TagEnd::Heading(level) => html.push_str(&format!("</{}>", heading_tag(level))),
                TagEnd::List(true) => html.push_str("</ol>"),
                TagEnd::List(false) => html.push_str("</ul>"),
                TagEnd::Item => html.push_str("</li>"),
                TagEnd::Emphasis => html.push_str("</em>"),
                TagEnd::Strong => html.push_str("</strong>"),
                TagEnd::Strikethrough => html.push_str("</del>"),
                TagEnd::Link => html.push_str("</a>"),
                _ => {}
            },
            Event::Text(text) | Event::Html(text) | Event::InlineHtml(text) => {
                html.push_str(&escape_html(&text));
            }
            Event::Code(code) => {
                html.push_str(&format!(
                    "<code class=\"px-1 rounded bg-surface font-mono text-sm\">{}</code>",
                    escape_html(&code)
                ));
            }
            Event::SoftBreak => html.push(' '),
            Event::HardBreak => html.push_str("<br />"),
            Event::Rule => html.push_str("<hr class=\"my-4\" />"),
            _ => {}
        }
    }

    html
}

/// Escape HTML special characters
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LegalDoc;

    #[test]
    fn test_heading_and_paragraph() {
        let html = render_markdown("## Title\n\nSome text");
        assert!(html.contains("<h2"));
        assert!(html.contains("Title</h2>"));
        assert!(html.contains("<p"));
        assert!(html.contains("Some text</p>"));
    }

    #[test]
    fn test_lists_and_strong() {
        let html = render_markdown("- **Account data**: name\n- usage");
        assert!(html.contains("<ul"));
        assert!(html.contains("<li>"));
        assert!(html.contains("<strong class=\"font-semibold\">Account data</strong>"));
        assert!(html.contains("</ul>"));
    }

    #[test]
    fn test_inline_code_is_escaped() {
        let html = render_markdown("Mail `<privacy@thumbly.com>`");
        assert!(html.contains("<code"));
        assert!(html.contains("&lt;privacy@thumbly.com&gt;"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_markdown("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_legal_documents_render() {
        for doc in [LegalDoc::Terms, LegalDoc::Privacy] {
            let html = render_markdown(doc.body());
            assert!(html.starts_with("<h2"));
            assert!(html.contains("<ul"));
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("\"'"), "&quot;&#39;");
    }
}
