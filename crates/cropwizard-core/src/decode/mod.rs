//! Image decoding for the crop wizard.
//!
//! This module provides functionality for:
//! - Decoding the selected file (JPEG, PNG, WebP, GIF, BMP) to RGBA pixels
//! - Applying EXIF orientation so pixels match what the browser displays
//! - Rejecting oversized images from the header, before a full decode
//!
//! All operations are synchronous and single-threaded within WASM.

mod load;
mod types;

pub use load::decode_image;
pub use types::{DecodeError, DecodedImage, CHANNELS};

use types::Orientation;

#[cfg(test)]
pub(crate) use load::with_exif_orientation;
