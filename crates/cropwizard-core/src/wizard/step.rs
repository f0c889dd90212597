//! Wizard steps and the transitions between them.

use serde::{Deserialize, Serialize};

use crate::AspectRatio;

/// Where the wizard currently is.
///
/// ```text
/// Idle ─select─▶ Editing(portrait) ⇄ Editing(landscape) ⇄ Editing(square) ⇄ Review
///  ▲                                                                       │
///  └──────────────────────────── save / cancel ────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "ratio", rename_all = "lowercase")]
pub enum WizardStep {
    /// No image selected; the modal is closed.
    #[default]
    Idle,
    /// Adjusting the crop for one ratio.
    Editing(AspectRatio),
    /// All crops done; waiting for confirmation.
    Review,
}

impl WizardStep {
    /// Step index of the review step.
    pub const REVIEW_INDEX: usize = AspectRatio::COUNT + 1;

    /// The first editing step.
    pub fn first() -> Self {
        WizardStep::Editing(AspectRatio::ALL[0])
    }

    /// Numeric step: 0 idle, 1..=3 editing, 4 review.
    pub fn index(self) -> usize {
        match self {
            WizardStep::Idle => 0,
            WizardStep::Editing(ratio) => ratio.step(),
            WizardStep::Review => Self::REVIEW_INDEX,
        }
    }

    /// The ratio being edited, if any.
    pub fn active_ratio(self) -> Option<AspectRatio> {
        match self {
            WizardStep::Editing(ratio) => Some(ratio),
            _ => None,
        }
    }

    /// Step reached by "Next" from an editing step.
    ///
    /// `None` from `Idle` and `Review`; leaving review is a save, not a step.
    pub fn next(self) -> Option<Self> {
        match self {
            WizardStep::Editing(ratio) => {
                Some(ratio.next().map_or(WizardStep::Review, WizardStep::Editing))
            }
            WizardStep::Idle | WizardStep::Review => None,
        }
    }

    /// Step reached by "Previous", if going back is possible.
    pub fn previous(self) -> Option<Self> {
        match self {
            WizardStep::Editing(ratio) => ratio.previous().map(WizardStep::Editing),
            WizardStep::Review => AspectRatio::ALL.last().copied().map(WizardStep::Editing),
            WizardStep::Idle => None,
        }
    }

    pub fn can_retreat(self) -> bool {
        self.previous().is_some()
    }

    /// Modal header text.
    pub fn title(self) -> String {
        match self {
            WizardStep::Editing(ratio) => {
                format!("Crop Your Image ({}/{})", ratio.step(), AspectRatio::COUNT)
            }
            WizardStep::Review => "Confirm Your Crops".to_string(),
            WizardStep::Idle => String::new(),
        }
    }

    /// Heading of the step body, e.g. "Step 1: Crop for Portrait (2:3)".
    pub fn heading(self) -> String {
        match self {
            WizardStep::Editing(ratio) => {
                format!("Step {}: Crop for {}", ratio.step(), ratio.label())
            }
            WizardStep::Review => "Final Step: Confirm Your Crops".to_string(),
            WizardStep::Idle => String::new(),
        }
    }

    /// Label of the forward button.
    pub fn next_label(self) -> &'static str {
        match self {
            WizardStep::Editing(ratio) if ratio.next().is_some() => "Next",
            WizardStep::Editing(_) => "Review",
            WizardStep::Review => "Save",
            WizardStep::Idle => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices() {
        assert_eq!(WizardStep::Idle.index(), 0);
        assert_eq!(WizardStep::Editing(AspectRatio::Portrait).index(), 1);
        assert_eq!(WizardStep::Editing(AspectRatio::Square).index(), 3);
        assert_eq!(WizardStep::Review.index(), 4);
        assert_eq!(WizardStep::first().index(), 1);
    }

    #[test]
    fn test_forward_sequence() {
        let mut step = WizardStep::first();
        let mut seen = vec![step];
        while let Some(next) = step.next() {
            step = next;
            seen.push(step);
        }
        assert_eq!(
            seen,
            vec![
                WizardStep::Editing(AspectRatio::Portrait),
                WizardStep::Editing(AspectRatio::Landscape),
                WizardStep::Editing(AspectRatio::Square),
                WizardStep::Review,
            ]
        );
    }

    #[test]
    fn test_previous() {
        assert_eq!(WizardStep::Editing(AspectRatio::Portrait).previous(), None);
        assert_eq!(
            WizardStep::Editing(AspectRatio::Landscape).previous(),
            Some(WizardStep::Editing(AspectRatio::Portrait))
        );
        assert_eq!(
            WizardStep::Review.previous(),
            Some(WizardStep::Editing(AspectRatio::Square))
        );
        assert!(!WizardStep::Idle.can_retreat());
    }

    #[test]
    fn test_idle_has_no_transitions() {
        assert_eq!(WizardStep::Idle.next(), None);
        assert_eq!(WizardStep::Idle.previous(), None);
        assert_eq!(WizardStep::Review.next(), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(WizardStep::first().title(), "Crop Your Image (1/3)");
        assert_eq!(WizardStep::Review.title(), "Confirm Your Crops");
        assert_eq!(
            WizardStep::first().heading(),
            "Step 1: Crop for Portrait (2:3)"
        );

        assert_eq!(
            WizardStep::Editing(AspectRatio::Landscape).next_label(),
            "Next"
        );
        assert_eq!(
            WizardStep::Editing(AspectRatio::Square).next_label(),
            "Review"
        );
        assert_eq!(WizardStep::Review.next_label(), "Save");
    }
}
