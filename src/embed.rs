//! Iframe embedding.
//!
//! Produces the fixed-height, full-width block that hosts the external
//! application in the main region of the page. The frame's own loading of its
//! remote content happens in the browser and is never observed here.

use std::num::NonZeroU32;

use url::Url;

use crate::constants::{DEFAULT_IFRAME_HEIGHT, IFRAME_CORNER_RADIUS_PX};
use crate::errors::EmbedError;

/// Validated inputs for one embedded frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedParams {
    src: String,
    height: NonZeroU32,
}

impl EmbedParams {
    /// Validates `src` and pairs it with `height`.
    pub fn new<S: Into<String>>(src: S, height: NonZeroU32) -> Result<Self, EmbedError> {
        let src = src.into();
        validate_src(&src)?;
        Ok(Self { src, height })
    }

    /// Like [`EmbedParams::new`], with the 900px default height.
    pub fn with_default_height<S: Into<String>>(src: S) -> Result<Self, EmbedError> {
        Self::new(src, default_height())
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn height(&self) -> NonZeroU32 {
        self.height
    }
}

/// Typed description of the frame markup.
///
/// Width is not configurable: the container and the frame always span 100%
/// of the region they are placed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IframeEmbed {
    pub src: String,
    pub height: NonZeroU32,
    pub borderless: bool,
    pub corner_radius: u16,
}

impl IframeEmbed {
    pub fn new(params: &EmbedParams) -> Self {
        Self {
            src: params.src.clone(),
            height: params.height,
            borderless: true,
            corner_radius: IFRAME_CORNER_RADIUS_PX,
        }
    }

    /// Renders the container and frame.
    ///
    /// Output is a pure function of the struct fields. `src` is written
    /// verbatim apart from attribute escaping.
    pub fn to_html(&self) -> String {
        let mut frame_style = String::from("width:100%; height:100%;");
        if self.borderless {
            frame_style.push_str(" border:none;");
        }
        if self.corner_radius > 0 {
            frame_style.push_str(&format!(" border-radius:{}px;", self.corner_radius));
        }

        format!(
            r#"<div style="width:100%; height:{height}px;">
    <iframe src="{src}"
            style="{frame_style}">
    </iframe>
</div>
"#,
            height = self.height,
            src = html_escape::encode_double_quoted_attribute(&self.src),
            frame_style = frame_style,
        )
    }
}

/// Builds the frame markup for `src` at `height` pixels.
pub fn embed_iframe(src: &str, height: u32) -> Result<String, EmbedError> {
    let height = NonZeroU32::new(height).ok_or(EmbedError::ZeroHeight)?;
    let params = EmbedParams::new(src, height)?;
    Ok(IframeEmbed::new(&params).to_html())
}

/// Builds the frame markup for `src` at the default height.
pub fn embed_iframe_default(src: &str) -> Result<String, EmbedError> {
    embed_iframe(src, DEFAULT_IFRAME_HEIGHT)
}

pub fn default_height() -> NonZeroU32 {
    NonZeroU32::new(DEFAULT_IFRAME_HEIGHT).unwrap_or(NonZeroU32::MIN)
}

/// Checks that `src` is an absolute http(s) URL.
///
/// The value itself is left untouched; parsing is only used to reject
/// relative paths and script-bearing schemes such as `javascript:`.
pub fn validate_src(src: &str) -> Result<(), EmbedError> {
    if src.trim().is_empty() {
        return Err(EmbedError::EmptySource);
    }

    let url = Url::parse(src).map_err(|source| EmbedError::InvalidUrl {
        src: src.to_string(),
        source,
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(EmbedError::UnsupportedScheme {
            src: src.to_string(),
            scheme: other.to_string(),
        }),
    }
}
