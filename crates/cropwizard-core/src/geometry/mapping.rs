//! Default rectangles and display/natural coordinate mapping.

use super::CropRectangle;

/// Fraction of the constrained image side a default rectangle covers.
pub const DEFAULT_COVERAGE: f64 = 0.8;

/// Propose the centered default crop rectangle for `ratio` (width / height).
///
/// The rectangle spans 80% of the image width; if that makes it taller than
/// 80% of the image height, it spans 80% of the height instead. The result
/// always has exactly the requested aspect and lies inside the image.
pub fn default_rectangle_for(ratio: f64, natural_width: f64, natural_height: f64) -> CropRectangle {
    default_rectangle_with_coverage(ratio, natural_width, natural_height, DEFAULT_COVERAGE)
}

/// [`default_rectangle_for`] with a configurable coverage fraction.
///
/// `coverage` is clamped to `(0, 1]`; a non-positive ratio is treated as square.
pub fn default_rectangle_with_coverage(
    ratio: f64,
    natural_width: f64,
    natural_height: f64,
    coverage: f64,
) -> CropRectangle {
    let coverage = if coverage > 0.0 { coverage.min(1.0) } else { DEFAULT_COVERAGE };
    let ratio = if ratio > 0.0 && ratio.is_finite() { ratio } else { 1.0 };

    let mut width = natural_width * coverage;
    let mut height = width / ratio;

    if height > natural_height * coverage {
        height = natural_height * coverage;
        width = height * ratio;
    }

    CropRectangle {
        x: (natural_width - width) / 2.0,
        y: (natural_height - height) / 2.0,
        width,
        height,
    }
}

/// Per-axis scale factor from `from` units to `to` units.
///
/// A non-positive source extent (image not laid out yet) maps 1:1.
#[inline]
fn axis_scale(to: f64, from: f64) -> f64 {
    if from > 0.0 {
        to / from
    } else {
        1.0
    }
}

fn scale(rect: &CropRectangle, sx: f64, sy: f64) -> CropRectangle {
    CropRectangle {
        x: rect.x * sx,
        y: rect.y * sy,
        width: rect.width * sx,
        height: rect.height * sy,
    }
}

/// Map a rectangle from on-screen pixels to natural image pixels.
///
/// X and Y are scaled independently, so an image displayed at a different
/// aspect than its natural size still maps to the right source region.
pub fn to_natural_pixels(
    display_rect: &CropRectangle,
    display_width: f64,
    display_height: f64,
    natural_width: f64,
    natural_height: f64,
) -> CropRectangle {
    scale(
        display_rect,
        axis_scale(natural_width, display_width),
        axis_scale(natural_height, display_height),
    )
}

/// Map a rectangle from natural image pixels to on-screen pixels.
///
/// Inverse of [`to_natural_pixels`].
pub fn to_display_pixels(
    natural_rect: &CropRectangle,
    display_width: f64,
    display_height: f64,
    natural_width: f64,
    natural_height: f64,
) -> CropRectangle {
    scale(
        natural_rect,
        axis_scale(display_width, natural_width),
        axis_scale(display_height, natural_height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AspectRatio;

    #[test]
    fn test_default_square_on_square_image() {
        let r = default_rectangle_for(1.0, 1000.0, 1000.0);
        assert_eq!(r, CropRectangle::new(100.0, 100.0, 800.0, 800.0));
    }

    #[test]
    fn test_default_portrait_is_height_constrained() {
        // 800 wide would need 1200 tall, so fall back to 80% of the height
        let r = default_rectangle_for(AspectRatio::Portrait.ratio(), 1000.0, 1000.0);
        assert!((r.height - 800.0).abs() < 1e-9);
        assert!((r.width - 800.0 * 2.0 / 3.0).abs() < 1e-9);
        assert!((r.y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_landscape_is_width_constrained() {
        let r = default_rectangle_for(AspectRatio::Landscape.ratio(), 1000.0, 1000.0);
        assert!((r.width - 800.0).abs() < 1e-9);
        assert!((r.height - 450.0).abs() < 1e-9);
        assert!((r.x - 100.0).abs() < 1e-9);
        assert!((r.y - 275.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_custom_coverage() {
        let r = default_rectangle_with_coverage(1.0, 200.0, 100.0, 0.5);
        assert_eq!(r, CropRectangle::new(75.0, 25.0, 50.0, 50.0));
    }

    #[test]
    fn test_default_bad_inputs_fall_back() {
        let r = default_rectangle_with_coverage(0.0, 100.0, 100.0, -1.0);
        assert_eq!(r, default_rectangle_for(1.0, 100.0, 100.0));
    }

    #[test]
    fn test_to_natural_uniform() {
        let d = CropRectangle::new(10.0, 20.0, 30.0, 40.0);
        let n = to_natural_pixels(&d, 500.0, 500.0, 1000.0, 1000.0);
        assert_eq!(n, CropRectangle::new(20.0, 40.0, 60.0, 80.0));
    }

    #[test]
    fn test_to_natural_non_uniform() {
        // Width squeezed 4x, height squeezed 2x
        let d = CropRectangle::new(10.0, 10.0, 10.0, 10.0);
        let n = to_natural_pixels(&d, 250.0, 500.0, 1000.0, 1000.0);
        assert_eq!(n, CropRectangle::new(40.0, 20.0, 40.0, 20.0));
    }

    #[test]
    fn test_zero_display_size_maps_one_to_one() {
        let d = CropRectangle::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(to_natural_pixels(&d, 0.0, 0.0, 1000.0, 1000.0), d);
    }

    #[test]
    fn test_to_display_inverts() {
        let n = CropRectangle::new(200.0, 100.0, 400.0, 300.0);
        let d = to_display_pixels(&n, 300.0, 150.0, 1200.0, 900.0);
        let back = to_natural_pixels(&d, 300.0, 150.0, 1200.0, 900.0);
        assert!((back.x - n.x).abs() < 1e-9);
        assert!((back.y - n.y).abs() < 1e-9);
        assert!((back.width - n.width).abs() < 1e-9);
        assert!((back.height - n.height).abs() < 1e-9);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::AspectRatio;
    use proptest::prelude::*;

    fn ratio_strategy() -> impl Strategy<Value = AspectRatio> {
        prop::sample::select(AspectRatio::ALL.to_vec())
    }

    proptest! {
        /// Property: default rectangles match the target ratio exactly.
        #[test]
        fn prop_default_matches_ratio(
            ratio in ratio_strategy(),
            width in 1u32..=8000,
            height in 1u32..=8000,
        ) {
            let r = default_rectangle_for(ratio.ratio(), width as f64, height as f64);
            let aspect = r.width / r.height;
            prop_assert!(
                (aspect - ratio.ratio()).abs() < 1e-6,
                "aspect {} for {}",
                aspect,
                ratio
            );
        }

        /// Property: default rectangles lie inside the image.
        #[test]
        fn prop_default_contained(
            ratio in ratio_strategy(),
            width in 1u32..=8000,
            height in 1u32..=8000,
        ) {
            let (w, h) = (width as f64, height as f64);
            let r = default_rectangle_for(ratio.ratio(), w, h);
            let eps = 1e-9 * w.max(h);
            prop_assert!(r.x >= -eps && r.y >= -eps);
            prop_assert!(r.right() <= w + eps);
            prop_assert!(r.bottom() <= h + eps);
        }

        /// Property: display -> natural -> display returns the input up to rounding.
        #[test]
        fn prop_mapping_round_trip(
            (x, y, w, h) in (0.0f64..500.0, 0.0f64..500.0, 1.0f64..500.0, 1.0f64..500.0),
            (dw, dh) in (10.0f64..2000.0, 10.0f64..2000.0),
            (nw, nh) in (10.0f64..8000.0, 10.0f64..8000.0),
        ) {
            let display = CropRectangle::new(x, y, w, h);
            let natural = to_natural_pixels(&display, dw, dh, nw, nh);
            let back = to_display_pixels(&natural, dw, dh, nw, nh);

            prop_assert!((back.x - x).abs() < 1e-6);
            prop_assert!((back.y - y).abs() < 1e-6);
            prop_assert!((back.width - w).abs() < 1e-6);
            prop_assert!((back.height - h).abs() < 1e-6);
        }

        /// Property: clamping always yields a rectangle inside the bounds.
        #[test]
        fn prop_clamp_contained(
            (x, y, w, h) in (
                -500.0f64..1500.0,
                -500.0f64..1500.0,
                -100.0f64..1500.0,
                -100.0f64..1500.0,
            ),
            (bw, bh) in (1.0f64..1000.0, 1.0f64..1000.0),
        ) {
            let c = CropRectangle::new(x, y, w, h).clamp_to(bw, bh);
            prop_assert!(c.x >= 0.0 && c.y >= 0.0);
            prop_assert!(c.right() <= bw + 1e-9 && c.bottom() <= bh + 1e-9);
            prop_assert!(c.width >= 0.0 && c.height >= 0.0);
        }
    }
}
