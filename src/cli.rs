use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, IpArray};
use crate::errors::ConfigError;
use crate::page::Layout;

/// Serve a page that shows a branded sidebar next to an embedded web app
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Serve the page over HTTP (default if no mode specified)
    #[arg(short, long, conflicts_with_all = ["stdout", "export"])]
    pub server: bool,

    /// Render the page once and print it to stdout
    #[arg(short = 'o', long, conflicts_with_all = ["server", "export"])]
    pub stdout: bool,

    /// Render the page once and write index.html into this directory
    #[arg(short, long, value_name = "DIR", conflicts_with_all = ["server", "stdout"])]
    pub export: Option<PathBuf>,

    /// Configuration file (default: ./vibegen.toml if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Port to listen on in server mode. Overrides config (default: 8501).
    #[arg(short = 'p', long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Host/IP address to bind to in server mode. Overrides config
    /// (default: 127.0.0.1). Use 0.0.0.0 to listen on all interfaces.
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// URL of the embedded application. Overrides config.
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Height of the embedded frame in pixels. Overrides config (default: 900).
    #[arg(long, value_name = "PX")]
    pub height: Option<u32>,

    /// Page title. Overrides config.
    #[arg(long, value_name = "TITLE")]
    pub title: Option<String>,

    /// Page layout. Overrides config.
    #[arg(long, value_enum)]
    pub layout: Option<Layout>,

    /// Increase logging verbosity (-v = info, -vv = debug, -vvv = trace).
    /// Default is warn level. Can also set RUST_LOG env var.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Get the log level filter string based on verbosity flags.
    /// Returns a filter suitable for tracing_subscriber::EnvFilter.
    pub fn log_level_filter(&self) -> String {
        let level = if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        };

        // Set level for this crate and tower_http (for request logging)
        format!(
            "{}={},tower_http={}",
            env!("CARGO_CRATE_NAME"),
            level,
            level
        )
    }

    /// Applies command-line overrides on top of a loaded configuration and
    /// re-validates it.
    pub fn apply_to(&self, config: &mut Config) -> Result<(), ConfigError> {
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(host) = &self.host {
            config.host = IpArray::parse(host)?;
        }
        if let Some(url) = &self.url {
            config.iframe_url = url.clone();
        }
        if let Some(height) = self.height {
            config.iframe_height = height;
        }
        if let Some(title) = &self.title {
            config.title = title.clone();
        }
        if let Some(layout) = self.layout {
            config.layout = layout;
        }
        config.validate()
    }
}
