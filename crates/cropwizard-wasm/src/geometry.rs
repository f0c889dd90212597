//! WASM bindings for the ratio catalogue and rectangle helpers.
//!
//! These are the stateless pieces the UI needs around the wizard: the list
//! of ratios to label buttons with, default rectangles for a freshly loaded
//! image, and conversion between the widget's display pixels and the
//! image's natural pixels.

use crate::types::{parse_ratio, JsCropRect};
use cropwizard_core::geometry::{
    default_rectangle_for as core_default_rectangle, to_display_pixels as core_to_display,
    to_natural_pixels as core_to_natural,
};
use cropwizard_core::{derived_file_name as core_file_name, AspectRatio, CropRectangle};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// One catalogue entry as seen from JavaScript.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct AspectRatioInfo {
    name: &'static str,
    ratio: f64,
    label: &'static str,
}

impl From<AspectRatio> for AspectRatioInfo {
    fn from(ratio: AspectRatio) -> Self {
        Self {
            name: ratio.identifier(),
            ratio: ratio.ratio(),
            label: ratio.label(),
        }
    }
}

pub(crate) fn catalogue() -> Vec<AspectRatioInfo> {
    AspectRatio::ALL
        .into_iter()
        .map(AspectRatioInfo::from)
        .collect()
}

/// The fixed ratio catalogue, in step order.
///
/// # Example (TypeScript)
///
/// ```typescript
/// for (const { name, ratio, label } of aspect_ratios()) {
///   console.log(`${label} (${name}): ${ratio}`);
/// }
/// ```
#[wasm_bindgen]
pub fn aspect_ratios() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&catalogue()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Centered default rectangle of `ratio` (width / height) covering 80% of
/// the limiting image dimension. Natural pixels in, natural pixels out.
#[wasm_bindgen]
pub fn default_rectangle_for(ratio: f64, natural_width: f64, natural_height: f64) -> JsCropRect {
    core_default_rectangle(ratio, natural_width, natural_height).into()
}

/// Convert a rectangle from display pixels to natural pixels.
#[wasm_bindgen]
pub fn to_natural_pixels(
    rect: &JsCropRect,
    display_width: f64,
    display_height: f64,
    natural_width: f64,
    natural_height: f64,
) -> JsCropRect {
    let rect = CropRectangle::from(rect);
    core_to_natural(&rect, display_width, display_height, natural_width, natural_height).into()
}

/// Convert a rectangle from natural pixels to display pixels.
#[wasm_bindgen]
pub fn to_display_pixels(
    rect: &JsCropRect,
    display_width: f64,
    display_height: f64,
    natural_width: f64,
    natural_height: f64,
) -> JsCropRect {
    let rect = CropRectangle::from(rect);
    core_to_display(&rect, display_width, display_height, natural_width, natural_height).into()
}

/// File name of a crop: `photo.jpg` + `"square"` gives `photo_square.jpg`.
#[wasm_bindgen]
pub fn derived_file_name(file_name: &str, ratio: &str) -> Result<String, JsValue> {
    let ratio = parse_ratio(ratio)?;
    Ok(core_file_name(file_name, ratio))
}
