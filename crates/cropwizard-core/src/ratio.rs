//! The fixed catalogue of target aspect ratios.
//!
//! Every wizard session walks these ratios in the same order: portrait,
//! landscape, square. The step number of a ratio (1..=3) is its position in
//! that order plus one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the three aspect ratios a crop is produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectRatio {
    /// 2:3, taller than wide.
    Portrait,
    /// 16:9, wider than tall.
    Landscape,
    /// 1:1.
    Square,
}

/// Returned when parsing an unknown ratio identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown aspect ratio identifier: {0}")]
pub struct UnknownAspectRatio(pub String);

impl AspectRatio {
    /// All ratios in wizard order.
    pub const ALL: [AspectRatio; 3] = [
        AspectRatio::Portrait,
        AspectRatio::Landscape,
        AspectRatio::Square,
    ];

    /// Number of ratios (and therefore editing steps).
    pub const COUNT: usize = Self::ALL.len();

    /// Stable identifier used in file names and the result bundle.
    pub fn identifier(self) -> &'static str {
        match self {
            AspectRatio::Portrait => "portrait",
            AspectRatio::Landscape => "landscape",
            AspectRatio::Square => "square",
        }
    }

    /// Width divided by height.
    pub fn ratio(self) -> f64 {
        match self {
            AspectRatio::Portrait => 2.0 / 3.0,
            AspectRatio::Landscape => 16.0 / 9.0,
            AspectRatio::Square => 1.0,
        }
    }

    /// Human-readable label shown in the step header.
    pub fn label(self) -> &'static str {
        match self {
            AspectRatio::Portrait => "Portrait (2:3)",
            AspectRatio::Landscape => "Landscape (16:9)",
            AspectRatio::Square => "Square (1:1)",
        }
    }

    /// Zero-based position in [`AspectRatio::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        match self {
            AspectRatio::Portrait => 0,
            AspectRatio::Landscape => 1,
            AspectRatio::Square => 2,
        }
    }

    /// One-based wizard step number.
    #[inline]
    pub fn step(self) -> usize {
        self.index() + 1
    }

    /// Ratio edited at the given one-based step, if any.
    pub fn from_step(step: usize) -> Option<Self> {
        step.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// The ratio edited after this one, or `None` for the last ratio.
    pub fn next(self) -> Option<Self> {
        Self::from_step(self.step() + 1)
    }

    /// The ratio edited before this one, or `None` for the first ratio.
    pub fn previous(self) -> Option<Self> {
        Self::from_step(self.step() - 1)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for AspectRatio {
    type Err = UnknownAspectRatio;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.identifier().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownAspectRatio(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_order() {
        let ids: Vec<_> = AspectRatio::ALL.iter().map(|r| r.identifier()).collect();
        assert_eq!(ids, ["portrait", "landscape", "square"]);
    }

    #[test]
    fn test_ratio_values() {
        assert!((AspectRatio::Portrait.ratio() - 2.0 / 3.0).abs() < 1e-12);
        assert!((AspectRatio::Landscape.ratio() - 16.0 / 9.0).abs() < 1e-12);
        assert_eq!(AspectRatio::Square.ratio(), 1.0);
    }

    #[test]
    fn test_step_numbers() {
        for (i, ratio) in AspectRatio::ALL.iter().enumerate() {
            assert_eq!(ratio.index(), i);
            assert_eq!(ratio.step(), i + 1);
            assert_eq!(AspectRatio::from_step(i + 1), Some(*ratio));
        }
        assert_eq!(AspectRatio::from_step(0), None);
        assert_eq!(AspectRatio::from_step(4), None);
    }

    #[test]
    fn test_next_and_previous() {
        assert_eq!(AspectRatio::Portrait.next(), Some(AspectRatio::Landscape));
        assert_eq!(AspectRatio::Landscape.next(), Some(AspectRatio::Square));
        assert_eq!(AspectRatio::Square.next(), None);

        assert_eq!(AspectRatio::Portrait.previous(), None);
        assert_eq!(AspectRatio::Square.previous(), Some(AspectRatio::Landscape));
    }

    #[test]
    fn test_parse() {
        assert_eq!("portrait".parse(), Ok(AspectRatio::Portrait));
        assert_eq!(" Square ".parse(), Ok(AspectRatio::Square));
        assert_eq!(
            "panorama".parse::<AspectRatio>(),
            Err(UnknownAspectRatio("panorama".to_string()))
        );
    }

    #[test]
    fn test_display_matches_identifier() {
        assert_eq!(AspectRatio::Landscape.to_string(), "landscape");
    }

    #[test]
    fn test_labels() {
        assert_eq!(AspectRatio::Portrait.label(), "Portrait (2:3)");
        assert_eq!(AspectRatio::Landscape.label(), "Landscape (16:9)");
        assert_eq!(AspectRatio::Square.label(), "Square (1:1)");
    }
}
