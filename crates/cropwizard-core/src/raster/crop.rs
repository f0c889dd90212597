//! Pixel-region copy in natural pixel coordinates.

use serde::{Deserialize, Serialize};

use super::RasterError;
use crate::decode::{DecodedImage, CHANNELS};
use crate::geometry::CropRectangle;

/// Integer crop region in source image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRegion {
    /// Top-left x coordinate.
    pub x: u32,
    /// Top-left y coordinate.
    pub y: u32,
    /// Width of the crop region.
    pub width: u32,
    /// Height of the crop region.
    pub height: u32,
}

impl PixelRegion {
    /// Resolve a floating-point rectangle to whole pixels inside `image`.
    ///
    /// The rectangle is clamped to the image first, so small overshoot from
    /// interactive dragging is absorbed. The size is rounded, then the
    /// rounded origin is moved back inside the image if the rounded region
    /// would poke past the right/bottom edge, so the output always has the
    /// rounded size of the clamped rectangle.
    ///
    /// # Errors
    ///
    /// - `RasterError::NonFinite` if any coordinate is NaN or infinite
    /// - `RasterError::EmptyRegion` if the rectangle has non-positive size or
    ///   does not overlap the image at all
    pub fn resolve(
        rect: &CropRectangle,
        image_width: u32,
        image_height: u32,
    ) -> Result<Self, RasterError> {
        if !rect.is_finite() {
            return Err(RasterError::NonFinite(*rect));
        }

        let empty = || RasterError::EmptyRegion {
            width: rect.width,
            height: rect.height,
        };

        if rect.is_empty() || image_width == 0 || image_height == 0 {
            return Err(empty());
        }

        let (w, h) = (image_width as f64, image_height as f64);
        let clamped = rect.clamp_to(w, h);
        if clamped.is_empty() {
            return Err(empty());
        }
        if clamped != *rect {
            log::debug!(
                "Clamped crop rectangle {:?} to {}x{} image bounds: {:?}",
                rect,
                image_width,
                image_height,
                clamped
            );
        }

        let (x, width) = snap_axis(clamped.x, clamped.width, image_width);
        let (y, height) = snap_axis(clamped.y, clamped.height, image_height);

        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }
}

/// Round one axis of a clamped rectangle to `(origin, size)` within `limit`.
fn snap_axis(start: f64, extent: f64, limit: u32) -> (u32, u32) {
    let size = (extent.round() as u32).clamp(1, limit);
    let origin = (start.round() as u32).min(limit - size);
    (origin, size)
}

/// Copy `region` out of `image` into a new buffer of exactly that size.
///
/// `region` must come from [`PixelRegion::resolve`] for the same image.
pub fn copy_region(image: &DecodedImage, region: PixelRegion) -> DecodedImage {
    let stride = image.width as usize * CHANNELS;
    let row_len = region.width as usize * CHANNELS;
    let mut output = Vec::with_capacity(row_len * region.height as usize);

    // Copy pixel data row by row
    for y in region.y..region.y + region.height {
        let start = y as usize * stride + region.x as usize * CHANNELS;
        output.extend_from_slice(&image.pixels[start..start + row_len]);
    }

    DecodedImage::new(region.width, region.height, output)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a test image where each pixel has a unique value based on position.
    fn test_image(width: u32, height: u32) -> DecodedImage {
        let mut pixels = Vec::with_capacity((width * height) as usize * CHANNELS);
        for y in 0..height {
            for x in 0..width {
                let v = ((y * width + x) % 256) as u8;
                pixels.extend_from_slice(&[v, v, v, 255]);
            }
        }
        DecodedImage::new(width, height, pixels)
    }

    fn crop(img: &DecodedImage, x: f64, y: f64, w: f64, h: f64) -> DecodedImage {
        let rect = CropRectangle::new(x, y, w, h);
        let region = PixelRegion::resolve(&rect, img.width, img.height).unwrap();
        copy_region(img, region)
    }

    #[test]
    fn test_full_crop() {
        let img = test_image(100, 100);
        let result = crop(&img, 0.0, 0.0, 100.0, 100.0);
        assert_eq!(result, img);
    }

    #[test]
    fn test_center_crop() {
        let img = test_image(10, 10);
        let result = crop(&img, 2.0, 2.0, 6.0, 6.0);

        assert_eq!((result.width, result.height), (6, 6));
        // Value at (2, 2) = 2 * 10 + 2 = 22
        assert_eq!(result.pixels[0], 22);
    }

    #[test]
    fn test_rounds_fractional_rectangle() {
        let img = test_image(10, 10);
        let result = crop(&img, 2.6, 3.2, 4.4, 3.5);

        // origin (3, 3), size (4, 4)
        assert_eq!((result.width, result.height), (4, 4));
        assert_eq!(result.pixels[0], 33);
    }

    #[test]
    fn test_overshoot_is_clamped() {
        let img = test_image(10, 10);
        let result = crop(&img, 8.0, 8.0, 5.0, 5.0);
        assert_eq!((result.width, result.height), (2, 2));
        assert_eq!(result.pixels[0], 88);
    }

    #[test]
    fn test_negative_origin_is_clamped() {
        let img = test_image(100, 100);
        let result = crop(&img, -10.0, -10.0, 50.0, 50.0);

        assert_eq!((result.width, result.height), (40, 40));
        assert_eq!(result.pixels[0], 0);
    }

    #[test]
    fn test_last_row_and_column() {
        let img = test_image(10, 10);
        let result = crop(&img, 9.0, 9.0, 1.0, 1.0);
        assert_eq!((result.width, result.height), (1, 1));
        assert_eq!(result.pixels[0], 99);
    }

    #[test]
    fn test_sub_pixel_crop_is_one_pixel() {
        let img = test_image(10, 10);
        let result = crop(&img, 5.0, 5.0, 0.2, 0.2);
        assert_eq!((result.width, result.height), (1, 1));
    }

    #[test]
    fn test_non_positive_size_rejected() {
        let rect = CropRectangle::new(0.0, 0.0, 0.0, 10.0);
        assert!(matches!(
            PixelRegion::resolve(&rect, 10, 10),
            Err(RasterError::EmptyRegion { .. })
        ));

        let rect = CropRectangle::new(0.0, 0.0, 10.0, -1.0);
        assert!(PixelRegion::resolve(&rect, 10, 10).is_err());
    }

    #[test]
    fn test_fully_outside_rejected() {
        let rect = CropRectangle::new(50.0, 50.0, 10.0, 10.0);
        assert!(matches!(
            PixelRegion::resolve(&rect, 10, 10),
            Err(RasterError::EmptyRegion { .. })
        ));
    }

    #[test]
    fn test_rounding_at_right_edge_keeps_size() {
        // Rounds to origin 501 and width 500; the origin moves back instead
        let rect = CropRectangle::new(500.5, 0.0, 499.5, 100.0);
        assert!(rect.is_within(1000.0, 1000.0));

        let region = PixelRegion::resolve(&rect, 1000, 1000).unwrap();
        assert_eq!((region.x, region.width), (500, 500));
        assert_eq!((region.y, region.height), (0, 100));
    }

    #[test]
    fn test_rounding_at_bottom_edge_keeps_size() {
        let rect = CropRectangle::new(0.0, 10.5, 8.0, 9.5);
        let region = PixelRegion::resolve(&rect, 20, 20).unwrap();
        assert_eq!((region.y, region.height), (10, 10));
    }

    #[test]
    fn test_non_finite_rejected() {
        for rect in [
            CropRectangle::new(f64::NAN, 0.0, 20.0, 30.0),
            CropRectangle::new(0.0, f64::NAN, 20.0, 30.0),
            CropRectangle::new(0.0, 0.0, f64::INFINITY, 30.0),
            CropRectangle::new(f64::NEG_INFINITY, 0.0, 20.0, 30.0),
        ] {
            assert!(matches!(
                PixelRegion::resolve(&rect, 100, 100),
                Err(RasterError::NonFinite(_))
            ));
        }
    }

    #[test]
    fn test_rectangular_strip() {
        let img = test_image(200, 100);
        let result = crop(&img, 0.0, 0.0, 50.0, 100.0);
        assert_eq!((result.width, result.height), (50, 100));
        assert_eq!(result.pixels.len(), 50 * 100 * CHANNELS);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
