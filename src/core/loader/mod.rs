//! Course list input

pub mod csv_parser;

pub use csv_parser::{load_session, parse_course_csv, parse_course_str, ParsedCourse};
