//! Errors surfaced by the wizard controller.

use thiserror::Error;

use crate::decode::DecodeError;
use crate::raster::RasterError;
use crate::wizard::WizardStep;
use crate::AspectRatio;

/// Everything a [`crate::WizardController`] operation can fail with.
///
/// Out-of-bounds rectangles are not an error: they are clamped when the crop
/// is rasterized.
#[derive(Debug, Error)]
pub enum WizardError {
    /// The selected file is missing or cannot be decoded.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] DecodeError),

    /// Save was requested before every ratio had a crop.
    #[error("Please complete all crop types: {}", join_identifiers(.missing))]
    IncompleteCrops { missing: Vec<AspectRatio> },

    /// Producing the crop for `ratio` failed. Other ratios are unaffected and
    /// the commit can be retried.
    #[error("Failed to create crop for {ratio}: {source}")]
    Encoding {
        ratio: AspectRatio,
        #[source]
        source: RasterError,
    },

    /// The operation needs an open session.
    #[error("No image selected")]
    NoActiveSession,

    /// The operation is only valid while editing a ratio.
    #[error("Not editing a crop (current step: {0:?})")]
    NotEditing(WizardStep),

    /// A display-space rectangle arrived before the display size was known.
    #[error("Display size of the image is not known yet")]
    MissingDisplaySize,
}

fn join_identifiers(ratios: &[AspectRatio]) -> String {
    ratios
        .iter()
        .map(|r| r.identifier())
        .collect::<Vec<_>>()
        .join(", ")
}

impl WizardError {
    /// Identifiers of the missing ratios for `IncompleteCrops`, else empty.
    pub fn missing_identifiers(&self) -> Vec<&'static str> {
        match self {
            WizardError::IncompleteCrops { missing } => {
                missing.iter().map(|r| r.identifier()).collect()
            }
            _ => Vec::new(),
        }
    }
}
