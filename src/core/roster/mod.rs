//! Course list ownership and recomputation
//!
//! [`CourseList`] is an immutable value; [`GpaSession`] owns the current list
//! and refreshes the aggregate after every edit.

pub mod list;
pub mod progress;
pub mod session;

pub use list::{CourseField, CourseList};
pub use progress::{CreditProgress, DEFAULT_GRADUATION_CREDITS};
pub use session::GpaSession;
