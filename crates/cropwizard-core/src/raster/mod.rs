//! Rasterizing crop rectangles into encoded image blobs.
//!
//! A crop is realized in two steps: the natural-pixel rectangle is resolved
//! to a whole-pixel region inside the source (clamping away any overshoot),
//! then that region is copied out and encoded. No scaling happens here; the
//! output is exactly the resolved region's size.

mod crop;
mod naming;

use thiserror::Error;

pub use crop::{copy_region, PixelRegion};
pub use naming::derived_file_name;

use crate::decode::DecodedImage;
use crate::encode::{encode_image, EncodeError, OutputFormat};
use crate::geometry::CropRectangle;

/// Errors that can occur while rasterizing a crop.
#[derive(Debug, Error)]
pub enum RasterError {
    /// The rectangle has no positive area inside the image.
    #[error("Crop region is empty ({width} x {height})")]
    EmptyRegion { width: f64, height: f64 },

    /// A coordinate is NaN or infinite.
    #[error("Crop rectangle has non-finite coordinates: {0:?}")]
    NonFinite(CropRectangle),

    /// Encoding the cropped pixels failed.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// An encoded crop plus the geometry it was produced from.
#[derive(Debug, Clone)]
pub struct RasterizedCrop {
    /// Encoded image bytes.
    pub bytes: Vec<u8>,
    /// Format of `bytes`.
    pub format: OutputFormat,
    /// Whole-pixel region that was copied.
    pub region: PixelRegion,
}

impl RasterizedCrop {
    pub fn width(&self) -> u32 {
        self.region.width
    }

    pub fn height(&self) -> u32 {
        self.region.height
    }
}

/// Crop `rect` (natural pixels) out of `source` and encode it as `format`.
///
/// # Errors
///
/// - `RasterError::EmptyRegion` for rectangles with non-positive size or no
///   overlap with the image
/// - `RasterError::Encode` if the encoder fails
pub fn rasterize(
    source: &DecodedImage,
    rect: &CropRectangle,
    format: OutputFormat,
    quality: u8,
) -> Result<RasterizedCrop, RasterError> {
    let region = PixelRegion::resolve(rect, source.width, source.height)?;
    let pixels = copy_region(source, region);
    let bytes = encode_image(&pixels, format, quality)?;

    Ok(RasterizedCrop {
        bytes,
        format,
        region,
    })
}
