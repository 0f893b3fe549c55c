//! Graduation credit progress

use serde::Serialize;

/// Credits a typical Texas Foundation plan requires to graduate
pub const DEFAULT_GRADUATION_CREDITS: f64 = 22.0;

/// How far a course list is from the graduation credit requirement
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CreditProgress {
    /// Credits earned so far
    pub earned: f64,
    /// Credits required to graduate
    pub required: f64,
}

impl CreditProgress {
    /// Create a progress record
    #[must_use]
    pub const fn new(earned: f64, required: f64) -> Self {
        Self { earned, required }
    }

    /// Credits still needed, never negative
    #[must_use]
    pub fn remaining(&self) -> f64 {
        (self.required - self.earned).max(0.0)
    }

    /// Whether the requirement is met
    #[must_use]
    pub fn is_met(&self) -> bool {
        self.earned >= self.required
    }

    /// Completed share of the requirement in percent, capped at 100
    #[must_use]
    pub fn percent(&self) -> f64 {
        if self.required <= 0.0 {
            return 100.0;
        }
        (self.earned / self.required * 100.0).clamp(0.0, 100.0)
    }

    /// One-line summary, e.g. "4 more needed to graduate"
    #[must_use]
    pub fn summary(&self) -> String {
        if self.is_met() {
            "Graduation requirement met!".to_string()
        } else {
            format!("{} more needed to graduate", self.remaining())
        }
    }
}
