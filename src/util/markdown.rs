//! Markdown rendering for post bodies and previews.
//!
//! Conversion is delegated to `pulldown-cmark` with raw HTML passthrough
//! (the parser default) kept on: post authors are trusted to embed HTML,
//! matching the original renderer's configuration. Bare URLs in prose are
//! autolinked by a pass over the text events, since pulldown-cmark has no
//! linkify extension of its own; code blocks and existing links are left
//! alone. Fenced code blocks come out as `<pre><code class="language-X">`
//! with escaped contents; syntax coloring is applied in the page by
//! highlight.js, and unknown or absent language tags simply stay escaped
//! preformatted text. No caching; every call re-renders.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use linkify::{LinkFinder, LinkKind};
use pulldown_cmark::{CowStr, Event, LinkType, Options, Parser, Tag, TagEnd, html};

/// Render Markdown to HTML. Absent or empty input yields `""`.
pub fn render(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };
    if text.is_empty() {
        return String::new();
    }

    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);

    let parser = Parser::new_ext(text, options);
    let mut out = String::new();
    html::push_html(&mut out, autolink(parser));
    out
}

/// Wrap bare URLs in text events with link tags. `verbatim` counts open
/// code blocks and links, inside which text passes through untouched.
fn autolink<'a>(parser: Parser<'a>) -> impl Iterator<Item = Event<'a>> {
    let mut finder = LinkFinder::new();
    finder.kinds(&[LinkKind::Url]);
    let mut verbatim = 0usize;

    parser.flat_map(move |event| match event {
        Event::Start(Tag::CodeBlock(_) | Tag::Link { .. }) => {
            verbatim += 1;
            vec![event]
        }
        Event::End(TagEnd::CodeBlock | TagEnd::Link) => {
            verbatim -= 1;
            vec![event]
        }
        Event::Text(text) if verbatim == 0 => link_spans(&finder, &text),
        other => vec![other],
    })
}

fn link_spans<'a>(finder: &LinkFinder, text: &str) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    for span in finder.spans(text) {
        let piece = CowStr::from(span.as_str().to_owned());
        if span.kind().is_some() {
            events.push(Event::Start(Tag::Link {
                link_type: LinkType::Autolink,
                dest_url: piece.clone(),
                title: CowStr::Borrowed(""),
                id: CowStr::Borrowed(""),
            }));
            events.push(Event::Text(piece));
            events.push(Event::End(TagEnd::Link));
        } else {
            events.push(Event::Text(piece));
        }
    }
    events
}
