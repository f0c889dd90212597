//! Completed crops and the bundle emitted on save.

use serde::Serialize;

use crate::geometry::CropRectangle;
use crate::raster::{derived_file_name, RasterizedCrop};
use crate::source::SourceImage;
use crate::AspectRatio;

/// The committed crop for one ratio.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedCrop {
    /// Ratio this crop was produced for.
    pub ratio: AspectRatio,
    /// Encoded image bytes.
    #[serde(skip)]
    pub bytes: Vec<u8>,
    /// `{base}_{ratio}.{extension}` of the original file name.
    pub file_name: String,
    /// Media type of `bytes`.
    pub media_type: String,
    /// Length of `bytes`.
    pub byte_size: usize,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// The natural-pixel rectangle that was committed.
    pub rectangle: CropRectangle,
}

impl CompletedCrop {
    pub(crate) fn new(
        ratio: AspectRatio,
        source: &SourceImage,
        rectangle: CropRectangle,
        raster: RasterizedCrop,
    ) -> Self {
        Self {
            ratio,
            file_name: derived_file_name(source.file_name(), ratio),
            media_type: raster.format.media_type().to_string(),
            byte_size: raster.bytes.len(),
            width: raster.width(),
            height: raster.height(),
            rectangle,
            bytes: raster.bytes,
        }
    }

    /// Achieved width / height of the output.
    pub fn aspect(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

/// The selected file as handed back in the bundle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginalImage {
    pub file_name: String,
    pub media_type: String,
    pub byte_size: usize,
    /// The selected file content, unmodified.
    #[serde(skip)]
    pub bytes: Vec<u8>,
    /// Natural width after orientation correction.
    pub width: u32,
    /// Natural height after orientation correction.
    pub height: u32,
}

impl From<SourceImage> for OriginalImage {
    fn from(source: SourceImage) -> Self {
        let file_name = source.file_name().to_string();
        let media_type = source.media_type().to_string();
        let (width, height) = (source.natural_width(), source.natural_height());
        let bytes = source.into_bytes();

        Self {
            file_name,
            media_type,
            byte_size: bytes.len(),
            bytes,
            width,
            height,
        }
    }
}

/// Result of a completed wizard: the original plus one crop per ratio.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropBundle {
    pub original: OriginalImage,
    /// Exactly one crop per ratio, in [`AspectRatio::ALL`] order.
    pub crops: Vec<CompletedCrop>,
}

impl CropBundle {
    /// Crop for `ratio`.
    pub fn crop(&self, ratio: AspectRatio) -> Option<&CompletedCrop> {
        self.crops.iter().find(|c| c.ratio == ratio)
    }
}
