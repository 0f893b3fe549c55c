//! CSV parser for student course lists
//!
//! Expected layout (columns in any order, header names case-insensitive):
//!
//! ```text
//! name,grade,credits,type
//! English I,A,1,regular
//! "Biology, Pre-AP",B+,1,honors
//! ```
//!
//! `category` is accepted in place of `type`. Blank credits mean one credit
//! and a blank type means a regular course. Lines starting with `#` are
//! ignored.

use crate::core::error::{LoadError, ValidationError};
use crate::core::gpa::WeightingPolicy;
use crate::core::models::{CourseEntry, CourseId, LetterGrade, WeightCategory};
use crate::core::roster::GpaSession;
use crate::{debug, warn};
use std::fs;
use std::path::Path;

/// Credits assumed when the cell is blank
const DEFAULT_CREDITS: f64 = 1.0;

/// One course row read from a file, before it joins a session
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCourse {
    /// Course name
    pub name: String,
    /// Letter grade (`None` if unrecognized)
    pub grade: Option<LetterGrade>,
    /// Credit value
    pub credits: f64,
    /// Weight category (`None` if unrecognized)
    pub category: Option<WeightCategory>,
    /// 1-based line number in the source
    pub line: usize,
}

/// Column positions resolved from the header row
struct Columns {
    name: Option<usize>,
    grade: usize,
    credits: Option<usize>,
    category: Option<usize>,
}

impl Columns {
    fn from_header(header: &[String]) -> Result<Self, LoadError> {
        let find = |names: &[&str]| {
            header
                .iter()
                .position(|h| names.iter().any(|n| h.eq_ignore_ascii_case(n)))
        };

        Ok(Self {
            name: find(&["name", "course", "course name"]),
            grade: find(&["grade", "letter grade"]).ok_or(LoadError::MissingColumn("grade"))?,
            credits: find(&["credits", "credit", "credit hours"]),
            category: find(&["type", "category", "course type", "weight"]),
        })
    }
}

/// Read a course list file
///
/// # Arguments
/// * `path` - Path to the CSV file
/// * `strict` - Reject rows with unknown grades, unknown types, or non-positive credits
///
/// # Errors
/// Returns an error if the file cannot be read, the header lacks a grade
/// column, a credit cell is not a number, or (in strict mode) a row fails
/// validation.
pub fn parse_course_csv<P: AsRef<Path>>(
    path: P,
    strict: bool,
) -> Result<Vec<ParsedCourse>, LoadError> {
    let content = fs::read_to_string(path)?;
    parse_course_str(&content, strict)
}

/// Parse course list text; see [`parse_course_csv`]
///
/// # Errors
/// Same as [`parse_course_csv`], minus I/O failures.
pub fn parse_course_str(content: &str, strict: bool) -> Result<Vec<ParsedCourse>, LoadError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| !line.trim().is_empty() && !line.trim_start().starts_with('#'));

    let (_, header_line) = lines.next().ok_or(LoadError::Empty)?;
    let columns = Columns::from_header(&parse_csv_line(header_line))?;

    let mut courses = Vec::new();
    for (line_no, line) in lines {
        let fields = parse_csv_line(line);
        let cell = |idx: Option<usize>| {
            idx.and_then(|i| fields.get(i))
                .map_or("", String::as_str)
        };

        let grade_text = cell(Some(columns.grade));
        let category_text = cell(columns.category);
        let credits_text = cell(columns.credits);

        let credits = if credits_text.is_empty() {
            DEFAULT_CREDITS
        } else {
            credits_text
                .parse::<f64>()
                .map_err(|_| LoadError::BadCredits {
                    line: line_no,
                    value: credits_text.to_string(),
                })?
        };

        let category = if category_text.is_empty() {
            Some(WeightCategory::Regular)
        } else {
            WeightCategory::parse(category_text)
        };

        let course = ParsedCourse {
            name: cell(columns.name).to_string(),
            grade: LetterGrade::parse(grade_text),
            credits,
            category,
            line: line_no,
        };

        if strict {
            check_row(&course, grade_text, category_text).map_err(|source| {
                LoadError::Invalid {
                    line: line_no,
                    source,
                }
            })?;
        } else {
            for problem in lenient_problems(&course, grade_text, category_text) {
                warn!("line {line_no}: {problem}; {}", lenient_effect(&problem));
            }
        }

        courses.push(course);
    }

    debug!("Parsed {} course rows", courses.len());
    Ok(courses)
}

/// Read a course list file straight into a new session
///
/// # Errors
/// Same as [`parse_course_csv`].
pub fn load_session<P: AsRef<Path>>(
    path: P,
    policy: WeightingPolicy,
    strict: bool,
) -> Result<GpaSession, LoadError> {
    let courses = parse_course_csv(path, strict)?;
    let mut session = GpaSession::new(policy);
    for course in courses {
        session.add(course.name, course.grade, course.credits, course.category);
    }
    Ok(session)
}

fn check_row(
    course: &ParsedCourse,
    grade_text: &str,
    category_text: &str,
) -> Result<(), ValidationError> {
    CourseEntry::new(
        CourseId(0),
        course.name.clone(),
        course.grade,
        course.credits,
        course.category,
    )
    .validate(grade_text, category_text)
}

/// Every problem a lenient load tolerates for this row
///
/// A row without positive credit is dropped from the averages, so its grade
/// and category no longer matter and only the credit problem is reported.
fn lenient_problems(
    course: &ParsedCourse,
    grade_text: &str,
    category_text: &str,
) -> Vec<ValidationError> {
    if !(course.credits.is_finite() && course.credits > 0.0) {
        return vec![ValidationError::NonPositiveCredits(course.credits)];
    }
    let mut problems = Vec::new();
    if course.grade.is_none() {
        problems.push(ValidationError::UnknownGrade(grade_text.trim().to_string()));
    }
    if course.category.is_none() {
        problems.push(ValidationError::UnknownCategory(
            category_text.trim().to_string(),
        ));
    }
    problems
}

/// What a lenient load does with a row that has `problem`
const fn lenient_effect(problem: &ValidationError) -> &'static str {
    match problem {
        ValidationError::UnknownGrade(_) => "counting it as 0.0 grade points",
        ValidationError::UnknownCategory(_) => "counting it with no weighting bonus",
        ValidationError::NonPositiveCredits(_) => "leaving it out of the averages",
    }
}

/// Split a CSV line into trimmed fields, honoring double quotes
fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());
    fields
}
