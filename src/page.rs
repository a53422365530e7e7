//! Page shell: page-level metadata plus the single render entry point.
//!
//! A [`Page`] is built from exactly one [`PageConfig`]. The configuration is
//! moved in by [`Page::configure`] and there is no setter, so a page load can
//! never be configured twice.

use std::fmt;

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

use crate::embed::{EmbedParams, IframeEmbed};
use crate::errors::TemplateError;
use crate::sidebar::{SidebarBlock, render_sidebar};
use crate::templates::{ShellView, Templates};

/// Width behavior of the main region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Main region uses the full viewport width.
    #[default]
    Wide,
    /// Main region is constrained to a fixed max width.
    Centered,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Wide => "wide",
            Layout::Centered => "centered",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Page-level metadata, consumed once per page load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    pub title: String,
    /// Either an emoji/short glyph or an image URL.
    pub icon: String,
    pub layout: Layout,
}

impl PageConfig {
    pub fn new<T: Into<String>, I: Into<String>>(title: T, icon: I, layout: Layout) -> Self {
        Self {
            title: title.into(),
            icon: icon.into(),
            layout,
        }
    }

    /// Value for the `<link rel="icon">` href.
    ///
    /// URL-looking icons are used as-is. Anything else is drawn as text inside
    /// an inline SVG, which is how browsers can show an emoji favicon.
    pub fn icon_href(&self) -> String {
        let icon = self.icon.trim();
        if icon.starts_with("http://") || icon.starts_with("https://") || icon.starts_with('/') {
            return icon.to_string();
        }
        let svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 100 100\">\
             <text y=\".9em\" font-size=\"90\">{}</text></svg>",
            html_escape::encode_text(icon)
        );
        format!(
            "data:image/svg+xml,{}",
            utf8_percent_encode(&svg, NON_ALPHANUMERIC)
        )
    }
}

/// Everything one page load renders: metadata, sidebar, and the embedded frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    config: PageConfig,
    sidebar: Vec<SidebarBlock>,
    embed: Option<EmbedParams>,
}

impl Page {
    pub fn configure(config: PageConfig) -> Self {
        Page {
            config,
            sidebar: Vec::new(),
            embed: None,
        }
    }

    /// Appends blocks to the sidebar, after any already added.
    pub fn sidebar<I: IntoIterator<Item = SidebarBlock>>(mut self, blocks: I) -> Self {
        self.sidebar.extend(blocks);
        self
    }

    /// Sets the frame shown in the main region.
    pub fn embed(mut self, params: EmbedParams) -> Self {
        self.embed = Some(params);
        self
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn sidebar_blocks(&self) -> &[SidebarBlock] {
        &self.sidebar
    }

    pub fn embed_params(&self) -> Option<&EmbedParams> {
        self.embed.as_ref()
    }

    /// Builds the values the shell template consumes.
    pub fn view(&self) -> ShellView {
        ShellView {
            title: self.config.title.clone(),
            icon_href: html_escape::encode_double_quoted_attribute(&self.config.icon_href())
                .into_owned(),
            layout: self.config.layout.as_str().to_string(),
            sidebar: render_sidebar(&self.sidebar),
            main: self
                .embed
                .as_ref()
                .map(|params| IframeEmbed::new(params).to_html())
                .unwrap_or_default(),
        }
    }

    /// Renders the complete HTML document.
    pub fn render(&self, templates: &Templates) -> Result<String, TemplateError> {
        tracing::debug!(
            title = %self.config.title,
            layout = %self.config.layout,
            sidebar_blocks = self.sidebar.len(),
            embed = self.embed.as_ref().map(|e| e.src()),
            "rendering page"
        );
        templates.render_shell(&self.view())
    }
}

/// One-shot rendering of a page from its three inputs.
pub fn render(
    templates: &Templates,
    page_config: PageConfig,
    sidebar_blocks: Vec<SidebarBlock>,
    embed_params: EmbedParams,
) -> Result<String, TemplateError> {
    Page::configure(page_config)
        .sidebar(sidebar_blocks)
        .embed(embed_params)
        .render(templates)
}
