//! Crop rectangle geometry.
//!
//! Pure functions for proposing default crop rectangles and for moving
//! rectangles between the two coordinate spaces the wizard deals with.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner
//! - **Natural pixels**: the full-resolution source image. Every rectangle the
//!   wizard stores is in this space.
//! - **Display pixels**: the image as the crop widget renders it on screen.
//!   The display size may have a different aspect than the natural size
//!   (e.g. under a max-height constraint), so X and Y scale independently.

mod mapping;
mod rect;

pub use mapping::{
    default_rectangle_for, default_rectangle_with_coverage, to_display_pixels,
    to_natural_pixels, DEFAULT_COVERAGE,
};
pub use rect::CropRectangle;
