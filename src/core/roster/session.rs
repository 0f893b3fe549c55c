//! Calculator session: the single owner of the current course list

use crate::core::gpa::{compute_aggregates, AggregateResult, QualitativeBand, WeightingPolicy};
use crate::core::models::{CourseEntry, CourseId, LetterGrade, WeightCategory};
use crate::core::roster::list::{CourseField, CourseList};
use crate::debug;

/// Holds one course list and the averages derived from it
///
/// Each mutation replaces the list with a new value and recomputes the
/// aggregate before returning, so `result()` always matches `courses()`.
#[derive(Debug, Clone)]
pub struct GpaSession {
    courses: CourseList,
    policy: WeightingPolicy,
    result: AggregateResult,
}

impl GpaSession {
    /// Start an empty session
    #[must_use]
    pub const fn new(policy: WeightingPolicy) -> Self {
        Self {
            courses: CourseList::new(),
            policy,
            result: AggregateResult {
                unweighted_average: 0.0,
                weighted_average: 0.0,
                total_credits: 0.0,
                course_count: 0,
            },
        }
    }

    /// Current course list
    #[must_use]
    pub const fn courses(&self) -> &CourseList {
        &self.courses
    }

    /// Averages for the current course list
    #[must_use]
    pub const fn result(&self) -> AggregateResult {
        self.result
    }

    /// Policy in effect
    #[must_use]
    pub const fn policy(&self) -> WeightingPolicy {
        self.policy
    }

    /// Badge for the unweighted average
    #[must_use]
    pub fn unweighted_status(&self) -> QualitativeBand {
        self.policy.status(self.result.unweighted_average, false)
    }

    /// Badge for the weighted average
    #[must_use]
    pub fn weighted_status(&self) -> QualitativeBand {
        self.policy.status(self.result.weighted_average, true)
    }

    /// Switch policy and recompute
    pub fn set_policy(&mut self, policy: WeightingPolicy) {
        self.policy = policy;
        self.recompute();
    }

    /// Add a course row and return its id
    pub fn add(
        &mut self,
        name: impl Into<String>,
        grade: Option<LetterGrade>,
        credits: f64,
        category: Option<WeightCategory>,
    ) -> CourseId {
        let name = name.into();
        let next = self
            .courses
            .with_added(|id| CourseEntry::new(id, name, grade, credits, category));
        self.replace(next)
    }

    /// Add a blank row (grade A, one credit, regular) and return its id
    pub fn add_default(&mut self) -> CourseId {
        let next = self.courses.with_added(CourseEntry::blank);
        self.replace(next)
    }

    /// Remove a row; returns `false` if no row had that id
    pub fn remove(&mut self, id: CourseId) -> bool {
        if self.courses.get(id).is_none() {
            return false;
        }
        let next = self.courses.with_removed(id);
        self.replace(next);
        true
    }

    /// Edit one field of a row; returns `false` if no row had that id
    pub fn update(&mut self, id: CourseId, field: CourseField) -> bool {
        if self.courses.get(id).is_none() {
            return false;
        }
        let next = self.courses.with_updated(id, field);
        self.replace(next);
        true
    }

    /// Remove every row
    pub fn clear(&mut self) {
        let next = self.courses.cleared();
        self.replace(next);
    }

    /// Swap in a new list, recompute, and return the id of the last row
    fn replace(&mut self, next: CourseList) -> CourseId {
        self.courses = next;
        self.recompute();
        self.courses
            .entries()
            .last()
            .map_or_else(|| self.courses.peek_next_id(), |entry| entry.id)
    }

    fn recompute(&mut self) {
        self.result = compute_aggregates(self.courses.entries(), self.policy);
        debug!(
            "Recomputed {} courses under {} policy: unweighted {:.3}, weighted {:.3}",
            self.result.course_count,
            self.policy,
            self.result.unweighted_average,
            self.result.weighted_average
        );
    }
}

impl Default for GpaSession {
    fn default() -> Self {
        Self::new(WeightingPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gpa::compute_aggregates;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn sample() -> GpaSession {
        let mut session = GpaSession::default();
        session.add("English I", Some(LetterGrade::A), 1.0, Some(WeightCategory::Regular));
        session.add("Algebra I", Some(LetterGrade::B), 1.0, Some(WeightCategory::Regular));
        session.add(
            "Pre-AP Biology",
            Some(LetterGrade::A),
            1.0,
            Some(WeightCategory::Honors),
        );
        session
    }

    #[test]
    fn test_result_tracks_every_mutation() {
        let mut session = sample();
        assert!(close(session.result().weighted_average, 11.5 / 3.0));

        let id = session.add_default();
        assert_eq!(session.courses().len(), 4);
        assert!(close(session.result().total_credits, 4.0));

        assert!(session.update(id, CourseField::Grade(Some(LetterGrade::F))));
        assert!(close(session.result().unweighted_average, 11.0 / 4.0));

        assert!(session.remove(id));
        assert!(close(session.result().unweighted_average, 11.0 / 3.0));

        session.clear();
        assert_eq!(session.result(), AggregateResult::default());
    }

    #[test]
    fn test_result_matches_fresh_computation() {
        let mut session = sample();
        session.set_policy(WeightingPolicy::Capped);
        let fresh = compute_aggregates(session.courses().entries(), WeightingPolicy::Capped);
        assert_eq!(session.result(), fresh);
    }

    #[test]
    fn test_unknown_ids_report_false() {
        let mut session = sample();
        let before = session.result();
        assert!(!session.remove(CourseId(42)));
        assert!(!session.update(CourseId(42), CourseField::Credits(2.0)));
        assert_eq!(session.result(), before);
    }

    #[test]
    fn test_add_returns_new_id() {
        let mut session = GpaSession::default();
        let first = session.add_default();
        let second = session.add("Art", Some(LetterGrade::B), 0.5, None);
        assert_ne!(first, second);
        assert_eq!(session.courses().get(second).map(|c| c.name.as_str()), Some("Art"));
    }

    #[test]
    fn test_statuses() {
        let session = sample();
        assert_eq!(session.unweighted_status(), QualitativeBand::Good);
        assert_eq!(session.weighted_status(), QualitativeBand::Excellent);
    }
}
