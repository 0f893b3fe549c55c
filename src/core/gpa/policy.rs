//! Weighting policies
//!
//! A policy decides how course rigor turns into bonus points on the weighted
//! scale, whether those points are capped, and whether credits weight the
//! mean. The policies do not agree with one another, so exactly one is used
//! per computation; [`WeightingPolicy::Additive`] is the default.

use crate::core::gpa::status::{BandingScheme, QualitativeBand};
use crate::core::models::{LetterGrade, WeightCategory};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum of the unweighted scale
pub const UNWEIGHTED_SCALE_MAX: f64 = 4.0;

/// Base points for a grade, zero when the grade is unrecognized
#[must_use]
pub fn base_points(grade: Option<LetterGrade>) -> f64 {
    grade.map_or(0.0, LetterGrade::points)
}

/// GPA weighting policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightingPolicy {
    /// Uncapped bonus on the 4.0 base: Honors +0.5, AP/IB/Dual +1.0
    #[default]
    Additive,
    /// Regular +1.0 capped at 5.0; Honors and AP/IB/Dual +2.0 capped at 6.0
    Capped,
    /// Plain mean over courses (credits ignored); any weighted course +0.5
    Simple,
}

impl WeightingPolicy {
    /// Every policy, default first
    pub const ALL: [Self; 3] = [Self::Additive, Self::Capped, Self::Simple];

    /// Bonus points added to the base grade for a category
    #[must_use]
    pub const fn bonus(self, category: Option<WeightCategory>) -> f64 {
        let Some(category) = category else {
            return 0.0;
        };
        match (self, category) {
            (Self::Additive | Self::Simple, WeightCategory::Regular) => 0.0,
            (Self::Additive, WeightCategory::Advanced) | (Self::Capped, WeightCategory::Regular) => 1.0,
            (Self::Additive | Self::Simple, WeightCategory::Honors)
            | (Self::Simple, WeightCategory::Advanced) => 0.5,
            (Self::Capped, WeightCategory::Honors | WeightCategory::Advanced) => 2.0,
        }
    }

    /// Ceiling on weighted points for a category, if the policy caps it
    #[must_use]
    pub const fn cap(self, category: Option<WeightCategory>) -> Option<f64> {
        match (self, category) {
            (Self::Capped, Some(WeightCategory::Regular)) => Some(5.0),
            (Self::Capped, Some(WeightCategory::Honors | WeightCategory::Advanced)) => Some(6.0),
            _ => None,
        }
    }

    /// Weighted points earned by one course, before credit weighting
    #[must_use]
    pub fn weighted_points(
        self,
        grade: Option<LetterGrade>,
        category: Option<WeightCategory>,
    ) -> f64 {
        let raw = base_points(grade) + self.bonus(category);
        self.cap(category).map_or(raw, |cap| raw.min(cap))
    }

    /// Whether a course's credit value scales its contribution
    #[must_use]
    pub const fn weights_by_credit(self) -> bool {
        !matches!(self, Self::Simple)
    }

    /// Highest weighted average reachable under this policy
    #[must_use]
    pub const fn weighted_scale_max(self) -> f64 {
        match self {
            Self::Additive => 5.0,
            Self::Capped => 6.0,
            Self::Simple => 4.5,
        }
    }

    /// Classifier used for this policy's badges
    #[must_use]
    pub const fn banding(self) -> BandingScheme {
        match self {
            Self::Capped => BandingScheme::Ratio,
            Self::Additive | Self::Simple => BandingScheme::Absolute,
        }
    }

    /// Badge for an average on the unweighted or weighted scale
    #[must_use]
    pub fn status(self, average: f64, weighted: bool) -> QualitativeBand {
        let scale_max = if weighted {
            self.weighted_scale_max()
        } else {
            UNWEIGHTED_SCALE_MAX
        };
        self.banding().classify(average, scale_max)
    }

    /// Short description for help text and reports
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Additive => "additive bonus (Honors +0.5, AP/IB/Dual +1.0), credit-weighted",
            Self::Capped => "capped scale (Regular +1.0 max 5.0, Honors/AP +2.0 max 6.0), credit-weighted",
            Self::Simple => "simple mean (weighted courses +0.5), credits ignored",
        }
    }
}

impl FromStr for WeightingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "additive" | "add" => Ok(Self::Additive),
            "capped" | "capped-scale" | "cap" => Ok(Self::Capped),
            "simple" | "simple-mean" | "mean" => Ok(Self::Simple),
            _ => Err(format!("Unknown weighting policy: {s}")),
        }
    }
}

impl fmt::Display for WeightingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Additive => write!(f, "additive"),
            Self::Capped => write!(f, "capped"),
            Self::Simple => write!(f, "simple"),
        }
    }
}
