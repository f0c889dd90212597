//! WASM-compatible wrapper types for rectangles and crop results.
//!
//! These types wrap the core crop wizard types and give JavaScript plain
//! getters. Byte payloads are copied to a `Uint8Array` on each `bytes()`
//! call; the UI turns them into `Blob`s and object URLs for previews and
//! downloads.

use cropwizard_core::{
    AspectRatio, CompletedCrop, CropBundle, CropRectangle, OriginalImage, WizardError,
};
use wasm_bindgen::prelude::*;

/// A rectangle in pixels (display or natural, depending on the call).
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsCropRect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

#[wasm_bindgen]
impl JsCropRect {
    #[wasm_bindgen(constructor)]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> JsCropRect {
        JsCropRect {
            x,
            y,
            width,
            height,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl From<CropRectangle> for JsCropRect {
    fn from(rect: CropRectangle) -> Self {
        JsCropRect::new(rect.x, rect.y, rect.width, rect.height)
    }
}

impl From<&JsCropRect> for CropRectangle {
    fn from(rect: &JsCropRect) -> Self {
        CropRectangle::new(rect.x, rect.y, rect.width, rect.height)
    }
}

/// One finished crop.
#[wasm_bindgen]
pub struct JsCompletedCrop {
    inner: CompletedCrop,
}

#[wasm_bindgen]
impl JsCompletedCrop {
    /// Ratio identifier: "portrait", "landscape" or "square".
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.inner.ratio.identifier().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn file_name(&self) -> String {
        self.inner.file_name.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn media_type(&self) -> String {
        self.inner.media_type.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.inner.byte_size
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// The committed rectangle in natural pixels.
    #[wasm_bindgen(getter)]
    pub fn rectangle(&self) -> JsCropRect {
        self.inner.rectangle.into()
    }

    /// Encoded image bytes as a Uint8Array (copied).
    pub fn bytes(&self) -> Vec<u8> {
        self.inner.bytes.clone()
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl From<CompletedCrop> for JsCompletedCrop {
    fn from(inner: CompletedCrop) -> Self {
        Self { inner }
    }
}

/// The originally selected file, returned unchanged.
#[wasm_bindgen]
pub struct JsOriginalImage {
    inner: OriginalImage,
}

#[wasm_bindgen]
impl JsOriginalImage {
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.inner.file_name.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn media_type(&self) -> String {
        self.inner.media_type.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.inner.byte_size
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Original file bytes as a Uint8Array (copied).
    pub fn bytes(&self) -> Vec<u8> {
        self.inner.bytes.clone()
    }
}

/// Result handed to the `onImagesReady` callback.
#[wasm_bindgen]
pub struct JsCropBundle {
    inner: CropBundle,
}

#[wasm_bindgen]
impl JsCropBundle {
    #[wasm_bindgen(getter)]
    pub fn original(&self) -> JsOriginalImage {
        JsOriginalImage {
            inner: self.inner.original.clone(),
        }
    }

    /// Number of crops (always 3).
    #[wasm_bindgen(getter)]
    pub fn crop_count(&self) -> usize {
        self.inner.crops.len()
    }

    /// All crops as an array of `JsCompletedCrop`, in ratio order.
    pub fn crops(&self) -> js_sys::Array {
        self.inner
            .crops
            .iter()
            .cloned()
            .map(|c| JsValue::from(JsCompletedCrop::from(c)))
            .collect()
    }

    /// The crop for one ratio identifier.
    pub fn crop(&self, ratio: &str) -> Result<Option<JsCompletedCrop>, JsValue> {
        let ratio = parse_ratio(ratio)?;
        Ok(self.inner.crop(ratio).cloned().map(JsCompletedCrop::from))
    }
}

impl From<CropBundle> for JsCropBundle {
    fn from(inner: CropBundle) -> Self {
        Self { inner }
    }
}

/// Parse a ratio identifier coming from JavaScript.
pub(crate) fn parse_ratio(name: &str) -> Result<AspectRatio, JsValue> {
    name.parse::<AspectRatio>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert a controller error for JavaScript.
pub(crate) fn to_js_error(err: WizardError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crop(ratio: AspectRatio) -> CompletedCrop {
        CompletedCrop {
            ratio,
            bytes: vec![1, 2, 3],
            file_name: format!("a_{}.png", ratio),
            media_type: "image/png".to_string(),
            byte_size: 3,
            width: 20,
            height: 30,
            rectangle: CropRectangle::new(1.0, 2.0, 20.0, 30.0),
        }
    }

    #[test]
    fn test_rect_conversion() {
        let core = CropRectangle::new(1.5, 2.5, 30.0, 40.0);
        let js = JsCropRect::from(core);
        assert_eq!(
            (js.x(), js.y(), js.width(), js.height()),
            (1.5, 2.5, 30.0, 40.0)
        );
        assert_eq!(CropRectangle::from(&js), core);
    }

    #[test]
    fn test_completed_crop_getters() {
        let js = JsCompletedCrop::from(crop(AspectRatio::Portrait));
        assert_eq!(js.name(), "portrait");
        assert_eq!(js.file_name(), "a_portrait.png");
        assert_eq!(js.media_type(), "image/png");
        assert_eq!(js.size(), 3);
        assert_eq!((js.width(), js.height()), (20, 30));
        assert_eq!(js.bytes(), vec![1, 2, 3]);
        assert_eq!(js.rectangle(), JsCropRect::new(1.0, 2.0, 20.0, 30.0));
    }

    #[test]
    fn test_bundle_original() {
        let bundle = JsCropBundle::from(CropBundle {
            original: OriginalImage {
                file_name: "a.png".to_string(),
                media_type: "image/png".to_string(),
                byte_size: 4,
                bytes: vec![9, 9, 9, 9],
                width: 100,
                height: 50,
            },
            crops: AspectRatio::ALL.into_iter().map(crop).collect(),
        });

        let original = bundle.original();
        assert_eq!(original.name(), "a.png");
        assert_eq!(original.size(), 4);
        assert_eq!(original.bytes(), vec![9, 9, 9, 9]);
        assert_eq!((original.width(), original.height()), (100, 50));
        assert_eq!(bundle.crop_count(), 3);
        assert_eq!(bundle.inner.crops[2].ratio, AspectRatio::Square);
    }
}
