//! Data models for `GpaGuide`

pub mod category;
pub mod course;
pub mod grade;

pub use category::WeightCategory;
pub use course::{CourseEntry, CourseId};
pub use grade::LetterGrade;
