//! Course entry model

use crate::core::error::ValidationError;
use crate::core::models::{LetterGrade, WeightCategory};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, stable key for a course row
///
/// Ids carry no meaning beyond identifying a row for update and removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CourseId(pub u64);

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One course row entered by a student
///
/// `grade` and `category` are `None` when the input text was not recognized;
/// such values contribute the zero default to the averages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseEntry {
    /// Row key, preserved across edits
    pub id: CourseId,

    /// Free-text course name (may be empty)
    pub name: String,

    /// Letter grade earned
    pub grade: Option<LetterGrade>,

    /// Credit value (1.0 = full year, 0.5 = one semester)
    pub credits: f64,

    /// Rigor category used for the weighted average
    pub category: Option<WeightCategory>,
}

impl CourseEntry {
    /// Create a new course entry
    ///
    /// # Arguments
    /// * `id` - Row key
    /// * `name` - Course name
    /// * `grade` - Letter grade (`None` if unrecognized)
    /// * `credits` - Credit value
    /// * `category` - Weight category (`None` if unrecognized)
    #[must_use]
    pub const fn new(
        id: CourseId,
        name: String,
        grade: Option<LetterGrade>,
        credits: f64,
        category: Option<WeightCategory>,
    ) -> Self {
        Self {
            id,
            name,
            grade,
            credits,
            category,
        }
    }

    /// A freshly added row: no name, an A, one credit, regular weight
    #[must_use]
    pub const fn blank(id: CourseId) -> Self {
        Self::new(
            id,
            String::new(),
            Some(LetterGrade::A),
            1.0,
            Some(WeightCategory::Regular),
        )
    }

    /// Whether this row counts toward the averages
    #[must_use]
    pub fn counts(&self) -> bool {
        self.credits.is_finite() && self.credits > 0.0
    }

    /// Check the row against strict input rules
    ///
    /// `grade_text` and `category_text` are the raw inputs, used in the error
    /// message when the parsed value is missing.
    ///
    /// # Errors
    /// Returns the first problem found: unknown grade, unknown category, or
    /// a credit value that is not a finite positive number.
    pub fn validate(&self, grade_text: &str, category_text: &str) -> Result<(), ValidationError> {
        if self.grade.is_none() {
            return Err(ValidationError::UnknownGrade(grade_text.trim().to_string()));
        }
        if self.category.is_none() {
            return Err(ValidationError::UnknownCategory(
                category_text.trim().to_string(),
            ));
        }
        if !self.counts() {
            return Err(ValidationError::NonPositiveCredits(self.credits));
        }
        Ok(())
    }

    /// Grade label for display, `?` when unrecognized
    #[must_use]
    pub fn grade_label(&self) -> &'static str {
        self.grade.map_or("?", LetterGrade::label)
    }

    /// Category label for display, `?` when unrecognized
    #[must_use]
    pub fn category_label(&self) -> &'static str {
        self.category.map_or("?", WeightCategory::label)
    }
}
