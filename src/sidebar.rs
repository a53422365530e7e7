//! Sidebar rendering.
//!
//! The sidebar is an ordered list of blocks (an image, or a chunk of markdown)
//! rendered top to bottom into the side region of the page. Markdown goes
//! through pulldown-cmark; external links are rewritten to open in a new tab
//! without handing the opener to the target page.

use pulldown_cmark::{CowStr, Event, Options, Parser as MDParser, Tag, TagEnd, TextMergeStream};
use pulldown_cmark_escape::{FmtWriter, escape_href, escape_html};
use serde::{Deserialize, Serialize};
use url::Url;

fn default_use_container_width() -> bool {
    true
}

/// One unit of sidebar content.
///
/// Deserializes from tagged tables, e.g. in `vibegen.toml`:
///
/// ```toml
/// [[sidebar]]
/// type = "image"
/// src = "https://example.com/logo.png"
///
/// [[sidebar]]
/// type = "markdown"
/// text = "**About**"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SidebarBlock {
    Image {
        src: String,
        #[serde(default)]
        caption: Option<String>,
        /// Stretch the image to the sidebar width.
        #[serde(default = "default_use_container_width")]
        use_container_width: bool,
    },
    Markdown {
        text: String,
    },
}

impl SidebarBlock {
    pub fn image<S: Into<String>>(src: S) -> Self {
        SidebarBlock::Image {
            src: src.into(),
            caption: None,
            use_container_width: true,
        }
    }

    pub fn markdown<S: Into<String>>(text: S) -> Self {
        SidebarBlock::Markdown { text: text.into() }
    }

    pub fn to_html(&self) -> String {
        match self {
            SidebarBlock::Image {
                src,
                caption,
                use_container_width,
            } => render_image(src, caption.as_deref(), *use_container_width),
            SidebarBlock::Markdown { text } => render_markdown(text),
        }
    }
}

/// Renders `blocks` in order, each wrapped in its own container.
pub fn render_sidebar(blocks: &[SidebarBlock]) -> String {
    let mut html = String::new();
    for block in blocks {
        html.push_str("<div class=\"sidebar-block\">\n");
        html.push_str(&block.to_html());
        html.push_str("</div>\n");
    }
    tracing::trace!(blocks = blocks.len(), bytes = html.len(), "rendered sidebar");
    html
}

fn render_image(src: &str, caption: Option<&str>, use_container_width: bool) -> String {
    let src = html_escape::encode_double_quoted_attribute(src);
    let alt = caption.unwrap_or_default();
    let style = if use_container_width {
        " style=\"width:100%;\""
    } else {
        ""
    };
    let mut html = format!(
        "<figure class=\"sidebar-image\">\n<img src=\"{}\" alt=\"{}\"{} />\n",
        src,
        html_escape::encode_double_quoted_attribute(alt),
        style
    );
    if let Some(caption) = caption {
        html.push_str(&format!(
            "<figcaption>{}</figcaption>\n",
            html_escape::encode_text(caption)
        ));
    }
    html.push_str("</figure>\n");
    html
}

fn render_markdown(text: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = TextMergeStream::new(MDParser::new_ext(text, options));
    let events = ExternalLinks::new(parser);

    let mut html_output = String::with_capacity(text.len() * 2);
    pulldown_cmark::html::push_html(&mut html_output, events);
    html_output
}

/// Rewrites external links outside of images.
///
/// Image alt text is collected by the html renderer from text events up to the
/// image's `End`; a link start turned into raw html there would leave its `End`
/// unmatched and cut the alt text short. Links inside images are passed through.
struct ExternalLinks<I> {
    iter: I,
    image_depth: usize,
}

impl<I> ExternalLinks<I> {
    fn new(iter: I) -> Self {
        ExternalLinks {
            iter,
            image_depth: 0,
        }
    }
}

impl<'a, I> Iterator for ExternalLinks<I>
where
    I: Iterator<Item = Event<'a>>,
{
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let event = self.iter.next()?;
        match event {
            Event::Start(Tag::Image { .. }) => self.image_depth += 1,
            Event::End(TagEnd::Image) => self.image_depth = self.image_depth.saturating_sub(1),
            _ => {}
        }
        if self.image_depth > 0 {
            Some(event)
        } else {
            Some(rewrite_external_link(event))
        }
    }
}

/// Replaces the opening tag of an external link with one carrying
/// `target="_blank" rel="noopener noreferrer"`. The matching `End` event is
/// left alone, so the default renderer still closes it with `</a>`.
fn rewrite_external_link(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Start(Tag::Link {
            ref dest_url,
            ref title,
            ..
        }) if is_external(dest_url) => match external_link_open(dest_url, title) {
            Ok(open) => Event::Html(CowStr::from(open)),
            Err(_) => event,
        },
        _ => event,
    }
}

fn external_link_open(dest_url: &str, title: &str) -> Result<String, std::fmt::Error> {
    let mut html = String::from("<a href=\"");
    escape_href(FmtWriter(&mut html), dest_url)?;
    if !title.is_empty() {
        html.push_str("\" title=\"");
        escape_html(FmtWriter(&mut html), title)?;
    }
    html.push_str("\" target=\"_blank\" rel=\"noopener noreferrer\">");
    Ok(html)
}

fn is_external(dest_url: &str) -> bool {
    Url::parse(dest_url)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}
