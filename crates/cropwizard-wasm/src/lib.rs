//! Crop Wizard WASM - WebAssembly bindings for the crop wizard
//!
//! This crate exposes cropwizard-core to the browser page that hosts the
//! crop modal.
//!
//! # Module Structure
//!
//! - `wizard` - `JsCropWizard`, the stateful controller
//! - `types` - WASM-compatible wrappers for rectangles, crops and the bundle
//! - `geometry` - Ratio catalogue, default rectangles, pixel mapping
//! - `logging` - `log` records to the browser console
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsCropWizard } from '@cropwizard/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const wizard = new JsCropWizard((bundle) => saveAll(bundle));
//! wizard.select_file(bytes, file.type, file.name);
//! ```

use wasm_bindgen::prelude::*;

mod geometry;
mod logging;
mod types;
mod wizard;

// Re-export public types
pub use geometry::{
    aspect_ratios, default_rectangle_for, derived_file_name, to_display_pixels, to_natural_pixels,
};
pub use logging::set_log_level;
pub use types::{JsCompletedCrop, JsCropBundle, JsCropRect, JsOriginalImage};
pub use wizard::JsCropWizard;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logging::init_logging(log::LevelFilter::Info);
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
