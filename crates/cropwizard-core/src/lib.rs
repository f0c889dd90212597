//! Crop Wizard Core - multi-ratio image cropping
//!
//! This crate provides the engine behind the crop wizard: one selected image
//! goes in, and one crop per fixed aspect ratio (portrait 2:3, landscape 16:9,
//! square 1:1) comes out, bundled with the untouched original.
//!
//! # Module Structure
//!
//! - `ratio` - The fixed aspect ratio catalogue
//! - `geometry` - Default rectangles and display/natural pixel mapping
//! - `decode` - File bytes to oriented RGBA pixels
//! - `encode` - RGBA pixels to JPEG/PNG/WebP
//! - `raster` - Clamped region copy plus encoding, crop file naming
//! - `wizard` - Step state machine, session and controller
//! - `config` - Wizard tunables
//! - `error` - Controller errors

pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod geometry;
pub mod raster;
pub mod ratio;
pub mod source;
pub mod wizard;

pub use config::WizardConfig;
pub use decode::DecodedImage;
pub use error::WizardError;
pub use geometry::{default_rectangle_for, to_display_pixels, to_natural_pixels, CropRectangle};
pub use raster::{derived_file_name, rasterize};
pub use ratio::AspectRatio;
pub use source::SourceImage;
pub use wizard::{
    BundleSink, CompletedCrop, CropBundle, OriginalImage, WizardController, WizardSession,
    WizardStep,
};
