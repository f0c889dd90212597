//! Image encoding for crop export.
//!
//! This module provides functionality for:
//! - Resolving the output format from the source's declared media type
//! - Encoding RGBA buffers to JPEG (configurable quality), PNG or WebP
//!
//! All operations are synchronous and single-threaded within WASM.

mod encoder;
mod format;

pub use encoder::{encode_image, EncodeError};
pub use format::OutputFormat;
