//! GPA aggregation

use crate::core::gpa::policy::{base_points, WeightingPolicy};
use crate::core::models::CourseEntry;
use serde::Serialize;

/// Averages derived from a course list
///
/// Values are unrounded; rounding happens only when displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    /// Average on the 4.0 scale
    pub unweighted_average: f64,
    /// Average including rigor bonuses
    pub weighted_average: f64,
    /// Sum of credits over counted courses
    pub total_credits: f64,
    /// Number of courses that counted toward the averages
    pub course_count: usize,
}

impl AggregateResult {
    /// Whether any course contributed
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.course_count == 0
    }
}

/// Compute unweighted and weighted averages under a policy
///
/// Unknown grades contribute zero base points and unknown categories zero
/// bonus. Courses whose credit is not a finite positive number are skipped
/// entirely, so a list with no positive credit yields all-zero averages.
/// Summation order does not affect the result beyond floating-point noise.
#[must_use]
pub fn compute_aggregates(entries: &[CourseEntry], policy: WeightingPolicy) -> AggregateResult {
    let mut unweighted_points = 0.0;
    let mut weighted_points = 0.0;
    let mut total_credits = 0.0;
    let mut divisor = 0.0;
    let mut course_count = 0;

    for entry in entries.iter().filter(|e| e.counts()) {
        let weight = if policy.weights_by_credit() {
            entry.credits
        } else {
            1.0
        };

        unweighted_points += base_points(entry.grade) * weight;
        weighted_points += policy.weighted_points(entry.grade, entry.category) * weight;
        total_credits += entry.credits;
        divisor += weight;
        course_count += 1;
    }

    if divisor <= 0.0 {
        return AggregateResult {
            total_credits,
            ..AggregateResult::default()
        };
    }

    AggregateResult {
        unweighted_average: unweighted_points / divisor,
        weighted_average: weighted_points / divisor,
        total_credits,
        course_count,
    }
}

/// Compute averages under the default additive policy
#[must_use]
pub fn compute(entries: &[CourseEntry]) -> AggregateResult {
    compute_aggregates(entries, WeightingPolicy::default())
}
