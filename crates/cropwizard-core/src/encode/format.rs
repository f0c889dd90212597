//! Output formats and media type resolution.

use serde::{Deserialize, Serialize};

/// Encoded formats a crop can be written as.
///
/// These are the formats a browser canvas can export. A source whose media
/// type is not one of them is exported as PNG, the same fallback
/// `HTMLCanvasElement.toBlob` applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    Jpeg,
    #[default]
    Png,
    WebP,
}

impl OutputFormat {
    /// Parse a declared media type such as `image/jpeg; charset=binary`.
    ///
    /// Returns `None` for media types the encoder cannot produce.
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        let essence = media_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "image/jpeg" | "image/jpg" | "image/pjpeg" => Some(OutputFormat::Jpeg),
            "image/png" => Some(OutputFormat::Png),
            "image/webp" => Some(OutputFormat::WebP),
            _ => None,
        }
    }

    /// Resolve the format to export a source of `media_type` as.
    pub fn for_media_type(media_type: &str) -> Self {
        Self::from_media_type(media_type).unwrap_or_default()
    }

    /// Canonical media type of the encoded output.
    pub fn media_type(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "image/jpeg",
            OutputFormat::Png => "image/png",
            OutputFormat::WebP => "image/webp",
        }
    }
}
