//! Letter grade model

use serde::{Deserialize, Serialize};
use std::fmt;

/// A letter grade on the canonical 4.0 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterGrade {
    /// A+ (4.0)
    #[serde(rename = "A+")]
    APlus,
    /// A (4.0)
    #[serde(rename = "A")]
    A,
    /// A- (3.7)
    #[serde(rename = "A-")]
    AMinus,
    /// B+ (3.3)
    #[serde(rename = "B+")]
    BPlus,
    /// B (3.0)
    #[serde(rename = "B")]
    B,
    /// B- (2.7)
    #[serde(rename = "B-")]
    BMinus,
    /// C+ (2.3)
    #[serde(rename = "C+")]
    CPlus,
    /// C (2.0)
    #[serde(rename = "C")]
    C,
    /// C- (1.7)
    #[serde(rename = "C-")]
    CMinus,
    /// D+ (1.3)
    #[serde(rename = "D+")]
    DPlus,
    /// D (1.0)
    #[serde(rename = "D")]
    D,
    /// D- (0.7)
    #[serde(rename = "D-")]
    DMinus,
    /// F (0.0)
    #[serde(rename = "F")]
    F,
}

impl LetterGrade {
    /// Every grade, highest first, in grade-scale table order
    pub const ALL: [Self; 13] = [
        Self::APlus,
        Self::A,
        Self::AMinus,
        Self::BPlus,
        Self::B,
        Self::BMinus,
        Self::CPlus,
        Self::C,
        Self::CMinus,
        Self::DPlus,
        Self::D,
        Self::DMinus,
        Self::F,
    ];

    /// Base grade points on the unweighted 4.0 scale
    #[must_use]
    pub const fn points(self) -> f64 {
        match self {
            Self::APlus | Self::A => 4.0,
            Self::AMinus => 3.7,
            Self::BPlus => 3.3,
            Self::B => 3.0,
            Self::BMinus => 2.7,
            Self::CPlus => 2.3,
            Self::C => 2.0,
            Self::CMinus => 1.7,
            Self::DPlus => 1.3,
            Self::D => 1.0,
            Self::DMinus => 0.7,
            Self::F => 0.0,
        }
    }

    /// Canonical label (e.g., "B+")
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::DMinus => "D-",
            Self::F => "F",
        }
    }

    /// Parse a grade label, ignoring case and surrounding whitespace
    ///
    /// # Returns
    /// `None` when the text is not one of the known labels
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let wanted = text.trim();
        Self::ALL
            .into_iter()
            .find(|grade| grade.label().eq_ignore_ascii_case(wanted))
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
