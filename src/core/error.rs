//! Error types for course validation and course list loading
//!
//! The GPA engine itself never fails; these errors only surface when a course
//! list is loaded in strict mode or when an input file is malformed.

use thiserror::Error;

/// A course row that strict mode refuses to accept
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Grade text is not one of the known letter grades
    #[error("unrecognized letter grade '{0}'")]
    UnknownGrade(String),

    /// Category text is not one of the known weight categories
    #[error("unrecognized course type '{0}'")]
    UnknownCategory(String),

    /// Credit value is zero, negative, or not a finite number
    #[error("credit value must be a positive number, got {0}")]
    NonPositiveCredits(f64),
}

/// Failure while reading a course list file
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The header row is missing or lacks a required column
    #[error("missing column '{0}' in course list header")]
    MissingColumn(&'static str),

    /// The file has no header row at all
    #[error("course list is empty")]
    Empty,

    /// A credit cell could not be parsed as a number
    #[error("line {line}: invalid credit value '{value}'")]
    BadCredits {
        /// 1-based line number in the file
        line: usize,
        /// The offending cell text
        value: String,
    },

    /// Strict mode rejected a row
    #[error("line {line}: {source}")]
    Invalid {
        /// 1-based line number in the file
        line: usize,
        /// What was wrong with the row
        source: ValidationError,
    },
}
