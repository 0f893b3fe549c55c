//! Course weight category model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rigor classification of a course, ordered from least to most rigorous
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightCategory {
    /// On-level course with no weighting
    Regular,
    /// Honors or Pre-AP course
    Honors,
    /// AP, IB, or Dual-Credit course
    Advanced,
}

impl WeightCategory {
    /// Every category in rigor order
    pub const ALL: [Self; 3] = [Self::Regular, Self::Honors, Self::Advanced];

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Honors => "Honors/Pre-AP",
            Self::Advanced => "AP/IB/Dual Credit",
        }
    }

    /// Parse a category from user-facing text
    ///
    /// Accepts the labels used across the calculators, e.g. "regular",
    /// "pre-ap", "honors", "ap", "ib", "dual credit". The "weighted" and
    /// "unweighted" labels map to Honors and Regular respectively.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let normalized: String = text
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '/')
            .collect();

        match normalized.as_str() {
            "regular" | "unweighted" | "onlevel" | "standard" => Some(Self::Regular),
            "honors" | "preap" | "honors/preap" | "preap/honors" | "weighted" => {
                Some(Self::Honors)
            }
            "ap" | "ib" | "apib" | "ap/ib" | "dual" | "dualcredit" | "ap/ib/dualcredit"
            | "ap/dualcredit" | "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }
}

impl fmt::Display for WeightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
