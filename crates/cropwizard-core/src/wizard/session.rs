//! State of one wizard run, from file selection to save or cancel.

use super::{CompletedCrop, CropBundle, WizardStep};
use crate::geometry::{default_rectangle_with_coverage, CropRectangle};
use crate::source::SourceImage;
use crate::AspectRatio;

/// Everything the wizard knows about the image being cropped.
///
/// Only the controller mutates a session. Every ratio always has a rectangle
/// (the default until the user moves it); completed crops fill in as the user
/// commits them.
#[derive(Debug, Clone)]
pub struct WizardSession {
    step: WizardStep,
    source: SourceImage,
    rectangles: [CropRectangle; AspectRatio::COUNT],
    completed: [Option<CompletedCrop>; AspectRatio::COUNT],
    display_size: Option<(f64, f64)>,
}

impl WizardSession {
    /// Open a session on the first editing step with default rectangles.
    pub(crate) fn new(source: SourceImage, coverage: f64) -> Self {
        let (w, h) = (source.natural_width() as f64, source.natural_height() as f64);
        let rectangles = AspectRatio::ALL.map(|ratio| {
            let rect = default_rectangle_with_coverage(ratio.ratio(), w, h, coverage);
            log::debug!("Default {} crop for {}x{}: {:?}", ratio, w, h, rect);
            rect
        });

        Self {
            step: WizardStep::first(),
            source,
            rectangles,
            completed: Default::default(),
            display_size: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub(crate) fn set_step(&mut self, step: WizardStep) {
        log::debug!("Wizard step {:?} -> {:?}", self.step, step);
        self.step = step;
    }

    pub fn source(&self) -> &SourceImage {
        &self.source
    }

    /// Current rectangle for `ratio`, in natural pixels.
    pub fn rectangle(&self, ratio: AspectRatio) -> CropRectangle {
        self.rectangles[ratio.index()]
    }

    pub(crate) fn set_rectangle(&mut self, ratio: AspectRatio, rect: CropRectangle) {
        self.rectangles[ratio.index()] = rect;
    }

    pub fn completed(&self, ratio: AspectRatio) -> Option<&CompletedCrop> {
        self.completed[ratio.index()].as_ref()
    }

    /// Store a crop, dropping any earlier crop for the same ratio.
    pub(crate) fn store_completed(&mut self, crop: CompletedCrop) -> &CompletedCrop {
        let ratio = crop.ratio;
        let slot = &mut self.completed[ratio.index()];
        if slot.is_some() {
            log::debug!("Replacing completed {} crop", ratio);
        }
        slot.insert(crop)
    }

    /// Completed crops in ratio order.
    pub fn completed_crops(&self) -> impl Iterator<Item = &CompletedCrop> {
        self.completed.iter().flatten()
    }

    /// Ratios without a completed crop, in ratio order.
    pub fn missing_ratios(&self) -> Vec<AspectRatio> {
        AspectRatio::ALL
            .into_iter()
            .filter(|r| self.completed(*r).is_none())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.completed.iter().all(Option::is_some)
    }

    /// Size the widget renders the image at, once reported.
    pub fn display_size(&self) -> Option<(f64, f64)> {
        self.display_size
    }

    pub(crate) fn set_display_size(&mut self, width: f64, height: f64) {
        self.display_size = Some((width, height));
    }

    /// Consume the session into the result bundle.
    ///
    /// Returns `None` if any ratio is still missing its crop.
    pub(crate) fn into_bundle(self) -> Option<CropBundle> {
        let crops = self.completed.into_iter().collect::<Option<Vec<_>>>()?;
        Some(CropBundle {
            original: self.source.into(),
            crops,
        })
    }
}
