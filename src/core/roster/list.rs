//! Immutable course list value

use crate::core::models::{CourseEntry, CourseId, LetterGrade, WeightCategory};
use serde::Serialize;

/// A single-field edit to a course row
#[derive(Debug, Clone, PartialEq)]
pub enum CourseField {
    /// Replace the course name
    Name(String),
    /// Replace the letter grade (`None` for unrecognized input)
    Grade(Option<LetterGrade>),
    /// Replace the credit value
    Credits(f64),
    /// Replace the weight category (`None` for unrecognized input)
    Category(Option<WeightCategory>),
}

impl CourseField {
    fn apply(self, entry: &mut CourseEntry) {
        match self {
            Self::Name(name) => entry.name = name,
            Self::Grade(grade) => entry.grade = grade,
            Self::Credits(credits) => entry.credits = credits,
            Self::Category(category) => entry.category = category,
        }
    }
}

/// Ordered list of course rows
///
/// Every edit returns a new list; the original is left untouched. Ids come
/// from a counter owned by the list, so they are never reused within a
/// lineage of lists even after removals.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CourseList {
    entries: Vec<CourseEntry>,
    #[serde(skip)]
    next_id: u64,
}

impl CourseList {
    /// Create an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Rows in insertion order
    #[must_use]
    pub fn entries(&self) -> &[CourseEntry] {
        &self.entries
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a row by id
    #[must_use]
    pub fn get(&self, id: CourseId) -> Option<&CourseEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// The id the next added row will receive
    #[must_use]
    pub fn peek_next_id(&self) -> CourseId {
        CourseId(self.next_id.max(1))
    }

    /// Append a row built by `build` from a freshly assigned id
    #[must_use]
    pub fn with_added(&self, build: impl FnOnce(CourseId) -> CourseEntry) -> Self {
        let id = self.peek_next_id();
        let mut entry = build(id);
        entry.id = id;

        let mut entries = self.entries.clone();
        entries.push(entry);
        Self {
            entries,
            next_id: id.0 + 1,
        }
    }

    /// Remove the row with `id`; unknown ids yield an identical list
    #[must_use]
    pub fn with_removed(&self, id: CourseId) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|entry| entry.id != id)
                .cloned()
                .collect(),
            next_id: self.next_id,
        }
    }

    /// Edit one field of the row with `id`, keeping its id and position
    #[must_use]
    pub fn with_updated(&self, id: CourseId, field: CourseField) -> Self {
        let mut entries = self.entries.clone();
        if let Some(entry) = entries.iter_mut().find(|entry| entry.id == id) {
            field.apply(entry);
        }
        Self {
            entries,
            next_id: self.next_id,
        }
    }

    /// Drop every row while keeping the id counter
    #[must_use]
    pub const fn cleared(&self) -> Self {
        Self {
            entries: Vec::new(),
            next_id: self.next_id,
        }
    }
}
