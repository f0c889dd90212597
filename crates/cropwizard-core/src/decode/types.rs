//! Decoded pixel buffers and decode errors.

use thiserror::Error;

/// Why a selected file could not be turned into pixels.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The selection carried no bytes.
    #[error("No file selected")]
    NoFile,

    /// The bytes are not a format the decoder knows.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The header was recognized but the data is damaged or truncated.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// The header declares more pixels than the configured limit.
    #[error("Image too large: {width}x{height} exceeds {max_pixels} pixels")]
    TooLarge {
        width: u32,
        height: u32,
        max_pixels: u64,
    },
}

/// How the stored pixels must be turned to appear upright, from the EXIF
/// Orientation tag (values 1-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// 1: stored upright.
    #[default]
    Normal,
    /// 2: mirrored left-right.
    FlipHorizontal,
    /// 3: upside down.
    Rotate180,
    /// 4: mirrored top-bottom.
    FlipVertical,
    /// 5: mirrored along the main diagonal.
    Transpose,
    /// 6: needs a quarter turn clockwise.
    Rotate90CW,
    /// 7: mirrored along the anti-diagonal.
    Transverse,
    /// 8: needs a quarter turn counter-clockwise.
    Rotate270CW,
}

impl From<u32> for Orientation {
    /// Unknown tag values are treated as upright.
    fn from(value: u32) -> Self {
        match value {
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// Bytes per pixel in a [`DecodedImage`] buffer.
pub const CHANNELS: usize = 4;

/// Upright RGBA pixels of the selected image.
///
/// RGBA rather than RGB so PNG and WebP crops keep their transparency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA, `width * height * CHANNELS` bytes.
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * CHANNELS,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_from_tag_value() {
        assert_eq!(Orientation::from(1), Orientation::Normal);
        assert_eq!(Orientation::from(6), Orientation::Rotate90CW);
        assert_eq!(Orientation::from(8), Orientation::Rotate270CW);
        assert_eq!(Orientation::from(0), Orientation::Normal);
        assert_eq!(Orientation::from(99), Orientation::Normal);
    }

    #[test]
    fn test_from_rgba_image() {
        let rgba = image::RgbaImage::from_pixel(3, 2, image::Rgba([1, 2, 3, 4]));
        let img = DecodedImage::from_rgba_image(rgba);

        assert_eq!((img.width, img.height), (3, 2));
        assert_eq!(img.pixels.len(), 3 * 2 * CHANNELS);
        assert_eq!(&img.pixels[0..4], &[1, 2, 3, 4]);
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::TooLarge {
            width: 20000,
            height: 20000,
            max_pixels: 100,
        };
        assert_eq!(
            err.to_string(),
            "Image too large: 20000x20000 exceeds 100 pixels"
        );

        assert_eq!(DecodeError::NoFile.to_string(), "No file selected");
    }
}
