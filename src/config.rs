use serde::{Deserialize, Serialize, Serializer};
use std::{
    net::IpAddr,
    num::NonZeroU32,
    path::{Path, PathBuf},
};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::constants::{CONFIG_FILE_NAME, DEFAULT_IFRAME_HEIGHT, DEFAULT_PORT, ENV_PREFIX};
use crate::content;
use crate::embed::{EmbedParams, validate_src};
use crate::errors::{ConfigError, EmbedError};
use crate::page::{Layout, Page, PageConfig};
use crate::sidebar::SidebarBlock;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IpArray(pub [u8; 4]);

/// Settings for one page host.
///
/// Sources, lowest to highest precedence: built-in defaults, `vibegen.toml`
/// (or the file given with `--config`), `VIBEGEN_*` environment variables,
/// then command-line flags.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub host: IpArray,
    pub port: u16,
    /// Browser tab title.
    #[serde(deserialize_with = "string_or_scalar")]
    pub title: String,
    /// Emoji or image URL used as the favicon.
    #[serde(deserialize_with = "string_or_scalar")]
    pub icon: String,
    pub layout: Layout,
    /// Absolute http(s) URL of the embedded application.
    #[serde(deserialize_with = "string_or_scalar")]
    pub iframe_url: String,
    /// Height of the embedded frame in pixels.
    pub iframe_height: u32,
    /// Image shown at the top of the built-in sidebar. Ignored when `sidebar`
    /// is set.
    #[serde(deserialize_with = "string_or_scalar")]
    pub sidebar_image: String,
    /// Replaces the built-in sidebar content entirely.
    #[serde(default)]
    pub sidebar: Option<Vec<SidebarBlock>>,
    /// Folder with a `shell.html` Tera template overriding the compiled default.
    #[serde(default)]
    pub template_folder: Option<PathBuf>,
}

impl std::fmt::Display for IpArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

impl<'de> Deserialize<'de> for IpArray {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let ip_str = String::deserialize(deserializer)?;
        IpArray::parse(&ip_str).map_err(serde::de::Error::custom)
    }
}

/// Reads a text setting that may arrive as a bare number or boolean.
///
/// Environment values are parsed before they reach serde, so
/// `VIBEGEN_TITLE=2024` shows up as an integer rather than a string.
fn string_or_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Str(String),
        Int(i64),
        UInt(u64),
        Float(f64),
        Bool(bool),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Str(s) => s,
        Scalar::Int(n) => n.to_string(),
        Scalar::UInt(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
        Scalar::Bool(b) => b.to_string(),
    })
}

impl Serialize for IpArray {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let ip = std::net::Ipv4Addr::from(self.0);
        serializer.serialize_str(&ip.to_string())
    }
}

impl IpArray {
    pub fn parse(host: &str) -> Result<Self, ConfigError> {
        match host.parse::<IpAddr>() {
            Ok(IpAddr::V4(v4)) => Ok(IpArray(v4.octets())),
            _ => Err(ConfigError::InvalidHost {
                host: host.to_string(),
            }),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: IpArray([127, 0, 0, 1]),
            port: DEFAULT_PORT,
            title: content::TITLE.to_string(),
            icon: content::ICON.to_string(),
            layout: Layout::Wide,
            iframe_url: content::IFRAME_URL.to_string(),
            iframe_height: DEFAULT_IFRAME_HEIGHT,
            sidebar_image: content::SIDEBAR_IMAGE.to_string(),
            sidebar: None,
            template_folder: None,
        }
    }
}

impl Config {
    /// Loads configuration from `config_file`, or from `vibegen.toml` in the
    /// working directory if present.
    pub fn read(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match config_file {
            Some(path) if !path.is_file() => {
                return Err(ConfigError::ConfigFileNotFound {
                    path: path.to_path_buf(),
                });
            }
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(CONFIG_FILE_NAME),
        };

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&path))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?;
        tracing::debug!("Loaded config: {:?}", &config);
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration values.
    ///
    /// - `port`: must be 1-65535
    /// - `iframe_height`: must be > 0
    /// - `iframe_url`: must be an absolute http(s) URL
    /// - `template_folder`: if set, must be an existing directory
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidPort { port: self.port });
        }

        if self.iframe_height == 0 {
            return Err(ConfigError::InvalidIframeHeight {
                value: self.iframe_height,
            });
        }

        validate_src(&self.iframe_url).map_err(ConfigError::InvalidIframeUrl)?;

        if let Some(folder) = &self.template_folder {
            if !folder.is_dir() {
                return Err(ConfigError::TemplateFolderNotDirectory {
                    path: folder.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn page_config(&self) -> PageConfig {
        PageConfig::new(&self.title, &self.icon, self.layout)
    }

    pub fn sidebar_blocks(&self) -> Vec<SidebarBlock> {
        self.sidebar
            .clone()
            .unwrap_or_else(|| content::sidebar_blocks(&self.sidebar_image))
    }

    pub fn embed_params(&self) -> Result<EmbedParams, EmbedError> {
        let height = NonZeroU32::new(self.iframe_height).ok_or(EmbedError::ZeroHeight)?;
        EmbedParams::new(&self.iframe_url, height)
    }

    /// Assembles the page this configuration describes.
    pub fn page(&self) -> Result<Page, EmbedError> {
        Ok(Page::configure(self.page_config())
            .sidebar(self.sidebar_blocks())
            .embed(self.embed_params()?))
    }
}
