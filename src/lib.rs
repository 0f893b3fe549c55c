//! Shared library for `GpaGuide`
//! GPA engine, course list handling, reports, and configuration used by the CLI

pub mod core;
pub mod logger;

pub use crate::core::*;
