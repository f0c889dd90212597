//! The multi-step crop wizard.
//!
//! A session walks the user through one editing step per
//! [`AspectRatio`](crate::AspectRatio), then a review step. Leaving an
//! editing step with "Next" commits its crop if the user has not already
//! done so, which is why review is only reachable with every crop present.

mod bundle;
mod controller;
mod session;
mod step;

pub use bundle::{CompletedCrop, CropBundle, OriginalImage};
pub use controller::{BundleSink, WizardController};
pub use session::WizardSession;
pub use step::WizardStep;
