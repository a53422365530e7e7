//! Shared constants used across multiple modules.

/// Iframe height in pixels when none is supplied.
pub const DEFAULT_IFRAME_HEIGHT: u32 = 900;

/// Corner radius of the embedded frame, in pixels.
pub const IFRAME_CORNER_RADIUS_PX: u16 = 12;

/// Port the page host listens on by default.
pub const DEFAULT_PORT: u16 = 8501;

/// Default configuration file, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "vibegen.toml";

/// Prefix for environment variable overrides (e.g. `VIBEGEN_PORT`).
pub const ENV_PREFIX: &str = "VIBEGEN_";
