//! Viewport alignment of scroll snap points.

use std::fmt;

/// Which edge of the viewport a scroll snap point lines up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum Alignment {
    /// Leading edge. No adjustment.
    #[default]
    Near,
    /// Viewport center.
    Center,
    /// Trailing edge.
    Far,
}

impl Alignment {
    /// Offset applied to every position of a snap point for a viewport of
    /// `viewport` length.
    #[must_use]
    pub fn adjustment(self, viewport: f64) -> f64 {
        match self {
            Self::Near => 0.0,
            Self::Center => -viewport / 2.0,
            Self::Far => -viewport,
        }
    }

    /// Whether the adjustment depends on the viewport size.
    #[must_use]
    pub fn tracks_viewport(self) -> bool {
        !matches!(self, Self::Near)
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Near => "near",
            Self::Center => "center",
            Self::Far => "far",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjustment() {
        assert_eq!(Alignment::Near.adjustment(400.0), 0.0);
        assert_eq!(Alignment::Center.adjustment(400.0), -200.0);
        assert_eq!(Alignment::Far.adjustment(400.0), -400.0);
    }

    #[test]
    fn test_tracks_viewport() {
        assert!(!Alignment::Near.tracks_viewport());
        assert!(Alignment::Center.tracks_viewport());
        assert!(Alignment::Far.tracks_viewport());
    }
}
