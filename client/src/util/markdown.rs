//! Markdown rendering for assistant replies.
//!
//! Model output is untrusted: raw HTML events are dropped and link or image
//! targets outside a small scheme allowlist are neutralised before the
//! document is serialised, so only inert Markdown-generated elements survive.

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

/// Schemes a rendered link or image may point at. Relative targets carry no
/// scheme and are always kept.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Render Markdown to an HTML fragment with inline and block HTML removed
/// and unsafe link/image targets replaced.
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => Some(Event::Start(Tag::Link {
            link_type,
            dest_url: guard_url(dest_url, "#"),
            title,
            id,
        })),
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => Some(Event::Start(Tag::Image {
            link_type,
            dest_url: guard_url(dest_url, ""),
            title,
            id,
        })),
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

fn guard_url<'a>(url: CowStr<'a>, replacement: &'static str) -> CowStr<'a> {
    if is_safe_url(&url) { url } else { CowStr::Borrowed(replacement) }
}

/// `true` for relative targets and for absolute ones with an allowed scheme.
///
/// Browsers ignore ASCII whitespace and control characters inside a scheme
/// (`java\tscript:`), so those are stripped before the scheme is read.
pub(crate) fn is_safe_url(url: &str) -> bool {
    let cleaned: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
        .collect();
    let Some(colon) = cleaned.find(':') else {
        return true;
    };
    // A ':' after a path, query, or fragment delimiter is not a scheme separator.
    if cleaned[..colon].contains(['/', '?', '#']) {
        return true;
    }
    let scheme = cleaned[..colon].to_ascii_lowercase();
    ALLOWED_SCHEMES.contains(&scheme.as_str())
}
