//! The wizard controller: the only way a session is created, changed or
//! finished.

use super::{CompletedCrop, CropBundle, WizardSession, WizardStep};
use crate::config::WizardConfig;
use crate::error::WizardError;
use crate::geometry::{to_display_pixels, to_natural_pixels, CropRectangle};
use crate::raster::rasterize;
use crate::source::SourceImage;
use crate::AspectRatio;

/// Receives the result bundle when the user saves.
pub trait BundleSink {
    fn deliver(&mut self, bundle: CropBundle);
}

impl<F: FnMut(CropBundle)> BundleSink for F {
    fn deliver(&mut self, bundle: CropBundle) {
        self(bundle)
    }
}

/// Drives one image at a time through the crop steps.
///
/// All operations are synchronous; a commit has rasterized and encoded the
/// crop by the time it returns.
///
/// # Example
///
/// ```ignore
/// let mut wizard = WizardController::new(WizardConfig::default(), |bundle: CropBundle| {
///     println!("{} crops of {}", bundle.crops.len(), bundle.original.file_name);
/// });
///
/// wizard.select_file(bytes, "image/jpeg", "photo.jpg")?;
/// wizard.advance()?; // portrait, default rectangle
/// wizard.advance()?; // landscape
/// wizard.advance()?; // square -> review
/// wizard.save()?;
/// ```
pub struct WizardController<S> {
    config: WizardConfig,
    session: Option<WizardSession>,
    sink: S,
}

impl<S: BundleSink> WizardController<S> {
    pub fn new(config: WizardConfig, sink: S) -> Self {
        Self {
            config: config.validated(),
            session: None,
            sink,
        }
    }

    pub fn config(&self) -> &WizardConfig {
        &self.config
    }

    pub fn session(&self) -> Option<&WizardSession> {
        self.session.as_ref()
    }

    /// Current step; `Idle` when no session is open.
    pub fn step(&self) -> WizardStep {
        self.session
            .as_ref()
            .map_or(WizardStep::Idle, WizardSession::step)
    }

    /// True while a session is open (the modal is shown).
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn source(&self) -> Option<&SourceImage> {
        self.session.as_ref().map(WizardSession::source)
    }

    pub fn active_ratio(&self) -> Option<AspectRatio> {
        self.step().active_ratio()
    }

    /// Rectangle of the ratio being edited, in natural pixels.
    pub fn active_rectangle(&self) -> Option<CropRectangle> {
        let session = self.session.as_ref()?;
        session.step().active_ratio().map(|r| session.rectangle(r))
    }

    /// Rectangle of the ratio being edited, in display pixels.
    ///
    /// `None` until the display size is known.
    pub fn active_display_rectangle(&self) -> Option<CropRectangle> {
        let session = self.session.as_ref()?;
        let (dw, dh) = session.display_size()?;
        let source = session.source();
        self.active_rectangle().map(|rect| {
            to_display_pixels(
                &rect,
                dw,
                dh,
                source.natural_width() as f64,
                source.natural_height() as f64,
            )
        })
    }

    pub fn rectangle(&self, ratio: AspectRatio) -> Option<CropRectangle> {
        self.session.as_ref().map(|s| s.rectangle(ratio))
    }

    pub fn completed_crop(&self, ratio: AspectRatio) -> Option<&CompletedCrop> {
        self.session.as_ref()?.completed(ratio)
    }

    /// Completed crops in ratio order, for the review previews.
    pub fn completed_crops(&self) -> Vec<&CompletedCrop> {
        self.session
            .as_ref()
            .map(|s| s.completed_crops().collect())
            .unwrap_or_default()
    }

    /// Ratios still lacking a crop (all of them when idle).
    pub fn missing_ratios(&self) -> Vec<AspectRatio> {
        self.session
            .as_ref()
            .map_or_else(|| AspectRatio::ALL.to_vec(), WizardSession::missing_ratios)
    }

    pub fn display_size(&self) -> Option<(f64, f64)> {
        self.session.as_ref()?.display_size()
    }

    /// Open a session for a newly selected file.
    ///
    /// Any open session is replaced. If the file cannot be used, the error is
    /// returned and the current state is left untouched.
    pub fn select_file(
        &mut self,
        bytes: Vec<u8>,
        media_type: &str,
        file_name: &str,
    ) -> Result<WizardStep, WizardError> {
        let byte_len = bytes.len();
        let source = SourceImage::decode(bytes, media_type, file_name, self.config.max_pixels)
            .inspect_err(|e| log::warn!("Rejected file {:?}: {}", file_name, e))?;

        log::info!(
            "Selected {:?} ({}, {} bytes, {}x{})",
            file_name,
            media_type,
            byte_len,
            source.natural_width(),
            source.natural_height()
        );
        if self.session.is_some() {
            log::debug!("Discarding open session for new selection");
        }

        self.session = Some(WizardSession::new(source, self.config.default_coverage));
        Ok(self.step())
    }

    /// Record the size the widget renders the image at.
    pub fn set_display_size(&mut self, width: f64, height: f64) -> Result<(), WizardError> {
        let session = self.session.as_mut().ok_or(WizardError::NoActiveSession)?;
        session.set_display_size(width, height);
        Ok(())
    }

    /// Live update of the active rectangle (natural pixels). Not validated.
    pub fn update_active_rectangle(&mut self, rect: CropRectangle) -> Result<(), WizardError> {
        let (session, ratio) = Self::editing(&mut self.session)?;
        session.set_rectangle(ratio, rect);
        Ok(())
    }

    /// [`Self::update_active_rectangle`] for a rectangle in display pixels.
    pub fn update_active_rectangle_from_display(
        &mut self,
        rect: CropRectangle,
    ) -> Result<(), WizardError> {
        let natural = self.to_natural(&rect)?;
        self.update_active_rectangle(natural)
    }

    /// Store `rect` for the active ratio and rasterize it.
    ///
    /// Replaces any earlier crop for the same ratio. On failure the rectangle
    /// is kept, the earlier crop (if any) is kept, and no other ratio is
    /// touched.
    pub fn commit_active_rectangle(
        &mut self,
        rect: CropRectangle,
    ) -> Result<&CompletedCrop, WizardError> {
        let (session, ratio) = Self::editing(&mut self.session)?;
        session.set_rectangle(ratio, rect);
        Self::commit_ratio(session, ratio, &self.config)
    }

    /// [`Self::commit_active_rectangle`] for a rectangle in display pixels.
    pub fn commit_active_rectangle_from_display(
        &mut self,
        rect: CropRectangle,
    ) -> Result<&CompletedCrop, WizardError> {
        let natural = self.to_natural(&rect)?;
        self.commit_active_rectangle(natural)
    }

    /// "Next": move forward one step.
    ///
    /// From an editing step without a completed crop, the current rectangle
    /// is committed first; if that fails the step does not change. From
    /// `Review` this saves.
    pub fn advance(&mut self) -> Result<WizardStep, WizardError> {
        let session = self.session.as_mut().ok_or(WizardError::NoActiveSession)?;

        match session.step() {
            WizardStep::Editing(ratio) => {
                if session.completed(ratio).is_none() {
                    log::info!("Committing {} crop before advancing", ratio);
                    Self::commit_ratio(session, ratio, &self.config)?;
                }

                let next = WizardStep::Editing(ratio)
                    .next()
                    .unwrap_or(WizardStep::Review);
                if next == WizardStep::Review && !session.is_complete() {
                    return Err(WizardError::IncompleteCrops {
                        missing: session.missing_ratios(),
                    });
                }
                session.set_step(next);
                Ok(next)
            }
            WizardStep::Review => {
                self.save()?;
                Ok(WizardStep::Idle)
            }
            WizardStep::Idle => Err(WizardError::NoActiveSession),
        }
    }

    /// "Previous": move back one step. Nothing is discarded.
    ///
    /// On the first step this is a no-op.
    pub fn retreat(&mut self) -> Result<WizardStep, WizardError> {
        let session = self.session.as_mut().ok_or(WizardError::NoActiveSession)?;
        if let Some(previous) = session.step().previous() {
            session.set_step(previous);
        }
        Ok(session.step())
    }

    /// Abandon the session. No bundle is emitted.
    pub fn cancel(&mut self) {
        if let Some(session) = self.session.take() {
            log::info!(
                "Cancelled crop wizard for {:?} at {:?}",
                session.source().file_name(),
                session.step()
            );
        }
    }

    /// Emit the bundle to the sink and close the session.
    ///
    /// # Errors
    ///
    /// - `NoActiveSession` when idle
    /// - `IncompleteCrops` listing every ratio without a crop; the session is
    ///   kept so the user can go back and finish
    pub fn save(&mut self) -> Result<(), WizardError> {
        let session = self.session.as_ref().ok_or(WizardError::NoActiveSession)?;

        let missing = session.missing_ratios();
        if !missing.is_empty() {
            log::warn!("Save requested with missing crops: {:?}", missing);
            return Err(WizardError::IncompleteCrops { missing });
        }

        let bundle = self
            .session
            .take()
            .and_then(WizardSession::into_bundle)
            .ok_or(WizardError::NoActiveSession)?;

        log::info!(
            "Saving {:?} with {} crops",
            bundle.original.file_name,
            bundle.crops.len()
        );
        self.sink.deliver(bundle);
        Ok(())
    }

    fn editing(
        session: &mut Option<WizardSession>,
    ) -> Result<(&mut WizardSession, AspectRatio), WizardError> {
        let session = session.as_mut().ok_or(WizardError::NoActiveSession)?;
        match session.step() {
            WizardStep::Editing(ratio) => Ok((session, ratio)),
            step => Err(WizardError::NotEditing(step)),
        }
    }

    fn to_natural(&self, rect: &CropRectangle) -> Result<CropRectangle, WizardError> {
        let session = self.session.as_ref().ok_or(WizardError::NoActiveSession)?;
        let (dw, dh) = session
            .display_size()
            .ok_or(WizardError::MissingDisplaySize)?;
        let source = session.source();
        Ok(to_natural_pixels(
            rect,
            dw,
            dh,
            source.natural_width() as f64,
            source.natural_height() as f64,
        ))
    }

    fn commit_ratio<'a>(
        session: &'a mut WizardSession,
        ratio: AspectRatio,
        config: &WizardConfig,
    ) -> Result<&'a CompletedCrop, WizardError> {
        let rect = session.rectangle(ratio);
        let source = session.source();

        let raster = rasterize(source.image(), &rect, source.output_format(), config.jpeg_quality)
            .map_err(|source| {
                log::warn!("Failed to create {} crop from {:?}: {}", ratio, rect, source);
                WizardError::Encoding { ratio, source }
            })?;

        let crop = CompletedCrop::new(ratio, source, rect, raster);
        log::info!(
            "Created crop for {}: {}x{} (ratio {:.4}, {} bytes)",
            ratio,
            crop.width,
            crop.height,
            crop.aspect(),
            crop.byte_size
        );
        Ok(session.store_completed(crop))
    }
}
