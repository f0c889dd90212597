//! Wizard configuration.
//!
//! Every field has a working default, so callers only pass what they want to
//! change. From JavaScript the config is a plain object with camelCase keys:
//!
//! ```typescript
//! new JsCropWizard(onImagesReady, { jpegQuality: 85, maxPixels: 50_000_000 });
//! ```

use serde::{Deserialize, Serialize};

use crate::geometry::DEFAULT_COVERAGE;

/// JPEG quality used by `HTMLCanvasElement.toBlob` when none is given.
pub const DEFAULT_JPEG_QUALITY: u8 = 92;

/// Smallest crop width the rectangle widget allows, in display pixels.
pub const DEFAULT_MIN_CROP_WIDTH: f64 = 50.0;

/// Default limit on decoded pixel count (100 megapixels).
pub const DEFAULT_MAX_PIXELS: u64 = 100_000_000;

/// Tunables for a [`crate::WizardController`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WizardConfig {
    /// Fraction of the constrained side covered by default rectangles.
    pub default_coverage: f64,
    /// JPEG quality (1-100) for JPEG sources.
    pub jpeg_quality: u8,
    /// Minimum crop width in display pixels, enforced by the widget.
    pub min_crop_width: f64,
    /// Images with more pixels than this are rejected on selection.
    pub max_pixels: u64,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            default_coverage: DEFAULT_COVERAGE,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            min_crop_width: DEFAULT_MIN_CROP_WIDTH,
            max_pixels: DEFAULT_MAX_PIXELS,
        }
    }
}

impl WizardConfig {
    /// Return a copy with out-of-range values replaced or clamped.
    pub fn validated(mut self) -> Self {
        if !(self.default_coverage > 0.0 && self.default_coverage <= 1.0) {
            log::warn!(
                "default_coverage {} out of range (0, 1], using {}",
                self.default_coverage,
                DEFAULT_COVERAGE
            );
            self.default_coverage = DEFAULT_COVERAGE;
        }
        self.jpeg_quality = self.jpeg_quality.clamp(1, 100);
        if !(self.min_crop_width >= 0.0 && self.min_crop_width.is_finite()) {
            self.min_crop_width = DEFAULT_MIN_CROP_WIDTH;
        }
        if self.max_pixels == 0 {
            self.max_pixels = DEFAULT_MAX_PIXELS;
        }
        self
    }
}
