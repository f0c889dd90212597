//! WASM bindings for the crop wizard controller.
//!
//! `JsCropWizard` owns one [`WizardController`]. The page calls into it from
//! its event handlers (file input change, crop widget drag, Next/Previous/
//! Cancel buttons) and re-renders from the getters afterwards. When the user
//! saves, the `onImagesReady` callback receives a [`JsCropBundle`].
//!
//! Steps are reported as indices: 0 idle, 1-3 the ratio steps, 4 review.

use crate::types::{parse_ratio, to_js_error, JsCompletedCrop, JsCropBundle, JsCropRect};
use cropwizard_core::{BundleSink, CropBundle, WizardConfig, WizardController};
use wasm_bindgen::prelude::*;

/// Hands the bundle to a JavaScript function.
struct JsBundleSink {
    callback: js_sys::Function,
}

impl BundleSink for JsBundleSink {
    fn deliver(&mut self, bundle: CropBundle) {
        let value = JsValue::from(JsCropBundle::from(bundle));
        if let Err(e) = self.callback.call1(&JsValue::NULL, &value) {
            log::error!("onImagesReady callback threw: {:?}", e);
        }
    }
}

/// Parse the optional JS config object.
fn parse_config(config: JsValue) -> Result<WizardConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(WizardConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Invalid wizard config: {}", e)))
}

/// The crop wizard as seen from JavaScript.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const wizard = new JsCropWizard((bundle: JsCropBundle) => {
///   for (const crop of bundle.crops()) {
///     download(new Blob([crop.bytes()], { type: crop.media_type }), crop.file_name);
///   }
/// });
///
/// input.onchange = async () => {
///   const file = input.files[0];
///   wizard.select_file(new Uint8Array(await file.arrayBuffer()), file.type, file.name);
///   render();
/// };
///
/// cropper.oncomplete = (r) =>
///   wizard.commit_rectangle(new JsCropRect(r.x, r.y, r.width, r.height));
/// nextButton.onclick = () => { wizard.next(); render(); };
/// ```
#[wasm_bindgen]
pub struct JsCropWizard {
    inner: WizardController<JsBundleSink>,
}

#[wasm_bindgen]
impl JsCropWizard {
    /// Create a wizard. `config` may be omitted.
    #[wasm_bindgen(constructor)]
    pub fn new(
        on_images_ready: js_sys::Function,
        config: JsValue,
    ) -> Result<JsCropWizard, JsValue> {
        let config = parse_config(config)?;
        let sink = JsBundleSink {
            callback: on_images_ready,
        };
        Ok(JsCropWizard {
            inner: WizardController::new(config, sink),
        })
    }

    /// Open a session for a selected file. Returns the new step index.
    ///
    /// Throws if the file is not a decodable image; the wizard is unchanged.
    pub fn select_file(
        &mut self,
        bytes: Vec<u8>,
        media_type: &str,
        file_name: &str,
    ) -> Result<usize, JsValue> {
        self.inner
            .select_file(bytes, media_type, file_name)
            .map(|step| step.index())
            .map_err(to_js_error)
    }

    /// Size the crop widget renders the image at, in CSS pixels.
    pub fn set_display_size(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.inner
            .set_display_size(width, height)
            .map_err(to_js_error)
    }

    /// Live rectangle change from the widget, in display pixels.
    pub fn update_rectangle(&mut self, rect: &JsCropRect) -> Result<(), JsValue> {
        self.inner
            .update_active_rectangle_from_display(rect.into())
            .map_err(to_js_error)
    }

    /// Live rectangle change, in natural pixels.
    pub fn update_rectangle_natural(&mut self, rect: &JsCropRect) -> Result<(), JsValue> {
        self.inner
            .update_active_rectangle(rect.into())
            .map_err(to_js_error)
    }

    /// Drag finished: crop the active ratio from a display-pixel rectangle.
    pub fn commit_rectangle(&mut self, rect: &JsCropRect) -> Result<JsCompletedCrop, JsValue> {
        self.inner
            .commit_active_rectangle_from_display(rect.into())
            .map(|crop| crop.clone().into())
            .map_err(to_js_error)
    }

    /// Crop the active ratio from a natural-pixel rectangle.
    pub fn commit_rectangle_natural(
        &mut self,
        rect: &JsCropRect,
    ) -> Result<JsCompletedCrop, JsValue> {
        self.inner
            .commit_active_rectangle(rect.into())
            .map(|crop| crop.clone().into())
            .map_err(to_js_error)
    }

    /// "Next" button. Returns the new step index (0 after saving).
    pub fn next(&mut self) -> Result<usize, JsValue> {
        self.inner
            .advance()
            .map(|step| step.index())
            .map_err(to_js_error)
    }

    /// "Previous" button. Returns the new step index.
    pub fn previous(&mut self) -> Result<usize, JsValue> {
        self.inner
            .retreat()
            .map(|step| step.index())
            .map_err(to_js_error)
    }

    /// Close the modal without emitting anything.
    pub fn cancel(&mut self) {
        self.inner.cancel();
    }

    /// Emit the bundle to `onImagesReady` and close.
    ///
    /// Throws "Please complete all crop types: ..." while crops are missing.
    pub fn save(&mut self) -> Result<(), JsValue> {
        self.inner.save().map_err(to_js_error)
    }

    #[wasm_bindgen(getter)]
    pub fn step(&self) -> usize {
        self.inner.step().index()
    }

    #[wasm_bindgen(getter)]
    pub fn is_open(&self) -> bool {
        self.inner.is_open()
    }

    /// Modal title, e.g. "Crop Your Image (1/3)".
    #[wasm_bindgen(getter)]
    pub fn title(&self) -> String {
        self.inner.step().title()
    }

    #[wasm_bindgen(getter)]
    pub fn heading(&self) -> String {
        self.inner.step().heading()
    }

    /// "Next" or "Save".
    #[wasm_bindgen(getter)]
    pub fn next_label(&self) -> String {
        self.inner.step().next_label().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn can_go_back(&self) -> bool {
        self.inner.step().can_retreat()
    }

    #[wasm_bindgen(getter)]
    pub fn active_ratio(&self) -> Option<String> {
        self.inner
            .active_ratio()
            .map(|r| r.identifier().to_string())
    }

    /// Width / height the widget should lock to.
    #[wasm_bindgen(getter)]
    pub fn active_aspect(&self) -> Option<f64> {
        self.inner.active_ratio().map(|r| r.ratio())
    }

    /// Active rectangle in natural pixels.
    #[wasm_bindgen(getter)]
    pub fn active_rectangle(&self) -> Option<JsCropRect> {
        self.inner.active_rectangle().map(JsCropRect::from)
    }

    /// Active rectangle in display pixels, once the display size is known.
    #[wasm_bindgen(getter)]
    pub fn active_display_rectangle(&self) -> Option<JsCropRect> {
        self.inner.active_display_rectangle().map(JsCropRect::from)
    }

    #[wasm_bindgen(getter)]
    pub fn min_crop_width(&self) -> f64 {
        self.inner.config().min_crop_width
    }

    /// Identifiers of ratios without a crop yet.
    #[wasm_bindgen(getter)]
    pub fn missing_ratios(&self) -> Vec<String> {
        self.inner
            .missing_ratios()
            .into_iter()
            .map(|r| r.identifier().to_string())
            .collect()
    }

    /// Completed crop for a ratio identifier, for the review previews.
    pub fn completed_preview(&self, ratio: &str) -> Result<Option<JsCompletedCrop>, JsValue> {
        let ratio = parse_ratio(ratio)?;
        let crop = self.inner.completed_crop(ratio).cloned();
        Ok(crop.map(JsCompletedCrop::from))
    }
}
