//! Qualitative GPA bands
//!
//! Maps a numeric average to a display label using fixed, lower-inclusive
//! cut points. Both classifiers are total: NaN, negative averages, and a
//! non-positive scale all land in [`QualitativeBand::AtRisk`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ratio cut points (fraction of scale max) for Excellent, Good, Satisfactory, Needs Improvement
pub const RATIO_CUTS: [f64; 4] = [0.92, 0.83, 0.75, 0.50];

/// Absolute cut points on a 4.0 scale for Excellent, Good, Satisfactory, Needs Improvement
pub const ABSOLUTE_CUTS: [f64; 4] = [3.7, 3.3, 3.0, 2.0];

/// Display band for a GPA, ordered from worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum QualitativeBand {
    /// Below every cut point
    AtRisk,
    /// At or above the lowest cut point
    NeedsImprovement,
    /// At or above the third cut point
    Satisfactory,
    /// At or above the second cut point
    Good,
    /// At or above the top cut point
    Excellent,
}

impl QualitativeBand {
    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AtRisk => "At Risk",
            Self::NeedsImprovement => "Needs Improvement",
            Self::Satisfactory => "Satisfactory",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }

    /// Pick the band for `value` given four descending cut points
    fn from_cuts(value: f64, cuts: [f64; 4]) -> Self {
        const BANDS: [QualitativeBand; 4] = [
            QualitativeBand::Excellent,
            QualitativeBand::Good,
            QualitativeBand::Satisfactory,
            QualitativeBand::NeedsImprovement,
        ];

        BANDS
            .into_iter()
            .zip(cuts)
            .find(|(_, cut)| value >= *cut)
            .map_or(Self::AtRisk, |(band, _)| band)
    }
}

impl fmt::Display for QualitativeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify an average by its fraction of `scale_max`
///
/// # Examples
/// ```
/// use gpa_guide::core::gpa::{classify_status, QualitativeBand};
/// assert_eq!(classify_status(5.7, 6.0), QualitativeBand::Excellent);
/// assert_eq!(classify_status(2.0, 4.0), QualitativeBand::NeedsImprovement);
/// ```
#[must_use]
pub fn classify_status(average: f64, scale_max: f64) -> QualitativeBand {
    if !scale_max.is_finite() || scale_max <= 0.0 {
        return QualitativeBand::AtRisk;
    }
    QualitativeBand::from_cuts(average / scale_max, RATIO_CUTS)
}

/// Classify an average against fixed 4.0-scale thresholds
#[must_use]
pub fn classify_absolute(average: f64) -> QualitativeBand {
    QualitativeBand::from_cuts(average, ABSOLUTE_CUTS)
}

/// Which classifier a policy uses for its badges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandingScheme {
    /// Fixed thresholds regardless of scale
    Absolute,
    /// Thresholds as a fraction of the scale maximum
    Ratio,
}

impl BandingScheme {
    /// Classify `average` under this scheme
    #[must_use]
    pub fn classify(self, average: f64, scale_max: f64) -> QualitativeBand {
        match self {
            Self::Absolute => classify_absolute(average),
            Self::Ratio => classify_status(average, scale_max),
        }
    }
}
