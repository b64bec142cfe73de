//! Image references and aspect ratio hints.
//!
//! A reference is either a URL handed back by the backend or an inline
//! base64 data URI produced locally for preview.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Image held by an upload slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ImageReference {
    /// Remote location returned by an uploader
    Url(String),

    /// Inline payload, format: "data:image/png;base64,..."
    DataUri(String),
}

impl ImageReference {
    /// Wrap a string returned by an uploader.
    ///
    /// Uploaders may hand back data URIs too, so the prefix decides the variant.
    pub fn from_remote(reference: impl Into<String>) -> Self {
        let reference = reference.into();
        if reference.starts_with("data:") {
            ImageReference::DataUri(reference)
        } else {
            ImageReference::Url(reference)
        }
    }

    /// The raw string, usable directly as an `img` source
    pub fn as_str(&self) -> &str {
        match self {
            ImageReference::Url(s) | ImageReference::DataUri(s) => s,
        }
    }

    /// Check if image data is available
    pub fn is_available(&self) -> bool {
        !self.as_str().trim().is_empty()
    }

    /// Get a descriptive string for the image type
    pub fn image_type(&self) -> &'static str {
        match self {
            ImageReference::Url(_) => "url",
            ImageReference::DataUri(_) => "data-uri",
        }
    }

    /// True for references that only exist on this machine
    pub fn is_inline(&self) -> bool {
        matches!(self, ImageReference::DataUri(_))
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageReference::Url(url) => f.write_str(url),
            // Data URIs can be megabytes long; keep logs readable.
            ImageReference::DataUri(uri) => {
                let header = uri.split(',').next().unwrap_or("data:");
                write!(f, "{},<{} bytes>", header, uri.len())
            }
        }
    }
}

/// Presentation hint for an upload slot (width:height).
///
/// Never enforced on the uploaded data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspectRatio {
    width: NonZeroU32,
    height: NonZeroU32,
}

impl AspectRatio {
    pub const SQUARE: AspectRatio = AspectRatio::from_const(1, 1);
    pub const WIDE: AspectRatio = AspectRatio::from_const(16, 9);

    const fn from_const(width: u32, height: u32) -> Self {
        match (NonZeroU32::new(width), NonZeroU32::new(height)) {
            (Some(width), Some(height)) => Self { width, height },
            _ => panic!("aspect ratio terms must be positive"),
        }
    }

    /// Returns `None` when either term is zero
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Some(Self {
            width: NonZeroU32::new(width)?,
            height: NonZeroU32::new(height)?,
        })
    }

    pub fn width(&self) -> u32 {
        self.width.get()
    }

    pub fn height(&self) -> u32 {
        self.height.get()
    }

    pub fn as_f64(&self) -> f64 {
        self.width() as f64 / self.height() as f64
    }

    /// Value for the CSS `aspect-ratio` property, e.g. `16 / 9`
    pub fn css_value(&self) -> String {
        format!("{} / {}", self.width(), self.height())
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::SQUARE
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

impl FromStr for AspectRatio {
    type Err = String;

    /// Accepts `16:9`, `16/9` and `16 / 9`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(':')
            .or_else(|| s.split_once('/'))
            .ok_or_else(|| format!("expected WIDTH:HEIGHT, got {:?}", s))?;
        let w: u32 = w.trim().parse().map_err(|e| format!("bad width {:?}: {}", w, e))?;
        let h: u32 = h.trim().parse().map_err(|e| format!("bad height {:?}: {}", h, e))?;
        AspectRatio::new(w, h).ok_or_else(|| format!("aspect ratio {:?} must be positive", s))
    }
}
