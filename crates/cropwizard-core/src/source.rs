//! The originally selected image.

use crate::decode::{decode_image, DecodeError, DecodedImage};
use crate::encode::OutputFormat;

/// The selected file and its decoded pixels.
///
/// Immutable for the lifetime of a wizard session. The original bytes are
/// kept untouched so they can be handed back in the result bundle.
#[derive(Debug, Clone)]
pub struct SourceImage {
    file_name: String,
    media_type: String,
    bytes: Vec<u8>,
    image: DecodedImage,
}

impl SourceImage {
    /// Decode `bytes` and wrap them with their file metadata.
    ///
    /// # Errors
    ///
    /// Any [`DecodeError`]; empty input is `DecodeError::NoFile`.
    pub fn decode(
        bytes: Vec<u8>,
        media_type: &str,
        file_name: &str,
        max_pixels: u64,
    ) -> Result<Self, DecodeError> {
        let image = decode_image(&bytes, max_pixels)?;
        Ok(Self {
            file_name: file_name.to_string(),
            media_type: media_type.to_string(),
            bytes,
            image,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Media type declared by the file picker.
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// The file content exactly as selected.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Decoded, orientation-corrected pixels.
    pub fn image(&self) -> &DecodedImage {
        &self.image
    }

    pub fn natural_width(&self) -> u32 {
        self.image.width
    }

    pub fn natural_height(&self) -> u32 {
        self.image.height
    }

    /// Format crops of this image are exported as.
    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::for_media_type(&self.media_type)
    }

    /// Give up the pixels and return the original bytes.
    pub(crate) fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode_image;

    #[test]
    fn test_decode_keeps_metadata() {
        let img = DecodedImage::new(6, 3, vec![10u8; 6 * 3 * 4]);
        let bytes = encode_image(&img, OutputFormat::Png, 90).unwrap();

        let source = SourceImage::decode(bytes.clone(), "image/png", "tiny.png", u64::MAX).unwrap();
        assert_eq!(source.file_name(), "tiny.png");
        assert_eq!(source.media_type(), "image/png");
        assert_eq!(source.bytes(), bytes.as_slice());
        assert_eq!((source.natural_width(), source.natural_height()), (6, 3));
        assert_eq!(source.output_format(), OutputFormat::Png);
        assert_eq!(source.into_bytes(), bytes);
    }

    #[test]
    fn test_decode_empty() {
        let result = SourceImage::decode(Vec::new(), "image/png", "empty.png", u64::MAX);
        assert!(matches!(result, Err(DecodeError::NoFile)));
    }
}
