//! vibegen - Vibe Gen page shell
//!
//! Serves a single page: a sidebar of branding and links next to an
//! embedded third-party web application.

pub mod build;
pub mod cli;
pub mod config;
pub mod constants;
pub mod content;
pub mod embed;
pub mod errors;
pub mod page;
pub mod server;
pub mod sidebar;
pub mod templates;

pub use build::{BuildStats, Builder};
pub use config::Config;
pub use embed::{EmbedParams, IframeEmbed, embed_iframe, embed_iframe_default};
pub use errors::{BuildError, ConfigError, EmbedError, ServerError, ShellError, TemplateError};
pub use page::{Layout, Page, PageConfig, render};
pub use sidebar::{SidebarBlock, render_sidebar};
pub use templates::Templates;
