//! Centralized error types for the page shell.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for the shell.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Server error: {0}")]
    Server(#[from] ServerError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Embed error: {0}")]
    Embed(#[from] EmbedError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Build error: {0}")]
    Build(#[from] BuildError),
}

/// Errors raised while validating iframe parameters.
#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("Iframe source is empty")]
    EmptySource,

    #[error("Iframe source is not an absolute URL: {src}")]
    InvalidUrl {
        src: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Iframe source uses unsupported scheme '{scheme}': {src}")]
    UnsupportedScheme { src: String, scheme: String },

    #[error("Iframe height must be greater than 0")]
    ZeroHeight,
}

/// Errors related to the HTTP server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind to {addr}")]
    BindFailed {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server failed to start")]
    StartFailed(#[source] std::io::Error),

    #[error("Failed to get local address")]
    LocalAddrFailed(#[source] std::io::Error),
}

/// Errors related to configuration loading and parsing.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration parsing failed")]
    ParseFailed(Box<figment::Error>),

    #[error("Configuration file not found: {}", path.display())]
    ConfigFileNotFound { path: PathBuf },

    #[error(
        "Invalid host address: {host}. Must be a valid IPv4 address (e.g., 127.0.0.1 or 0.0.0.0)"
    )]
    InvalidHost { host: String },

    #[error("Invalid port: {port}. Port must be between 1 and 65535")]
    InvalidPort { port: u16 },

    #[error("Invalid iframe_height: {value}. Must be greater than 0")]
    InvalidIframeHeight { value: u32 },

    #[error("Invalid iframe_url")]
    InvalidIframeUrl(#[source] EmbedError),

    #[error("Template folder is not a directory: {}", path.display())]
    TemplateFolderNotDirectory { path: PathBuf },
}

/// Errors related to template rendering.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Failed to initialize templates from: {}", path.display())]
    InitFailed {
        path: PathBuf,
        #[source]
        source: tera::Error,
    },

    #[error("Failed to render template: {template_name}")]
    RenderFailed {
        template_name: String,
        #[source]
        source: tera::Error,
    },

    #[error("Template error: {0}")]
    Tera(#[from] tera::Error),

    #[error("Invalid path encoding")]
    InvalidPathEncoding,
}

/// Errors related to static export.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Failed to create output directory: {}", path.display())]
    CreateDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output file: {}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Template error")]
    Template(#[from] TemplateError),
}

// Auto-box figment::Error when converting to ConfigError
impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::ParseFailed(Box::new(err))
    }
}
