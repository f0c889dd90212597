//! The crop rectangle value type.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in floating-point pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CropRectangle {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width (may be non-positive while the widget is mid-drag).
    pub width: f64,
    /// Height (may be non-positive while the widget is mid-drag).
    pub height: f64,
}

impl CropRectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (`x + width`).
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Width divided by height, or `None` for a degenerate rectangle.
    pub fn aspect(&self) -> Option<f64> {
        if self.height > 0.0 && self.width > 0.0 {
            Some(self.width / self.height)
        } else {
            None
        }
    }

    /// True if the rectangle has no positive area.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// True if every coordinate is a finite number.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }

    /// True if the rectangle lies entirely inside `[0, width] x [0, height]`.
    pub fn is_within(&self, width: f64, height: f64) -> bool {
        self.x >= 0.0 && self.y >= 0.0 && self.right() <= width && self.bottom() <= height
    }

    /// Intersect with `[0, width] x [0, height]`.
    ///
    /// A rectangle that misses the bounds entirely collapses to zero size at
    /// the nearest edge; callers check [`CropRectangle::is_empty`] afterwards.
    /// A NaN edge is replaced by the nearest bound instead of panicking; use
    /// [`CropRectangle::is_finite`] to reject such input outright.
    pub fn clamp_to(&self, width: f64, height: f64) -> CropRectangle {
        let left = self.x.max(0.0).min(width);
        let top = self.y.max(0.0).min(height);
        let right = self.right().min(width).max(left);
        let bottom = self.bottom().min(height).max(top);

        CropRectangle {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
        }
    }
}
