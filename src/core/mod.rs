//! Core module for common functionality across all targets

pub mod config;
pub mod error;
pub mod gpa;
pub mod loader;
pub mod models;
pub mod report;
pub mod roster;

/// Returns the current version of the `GpaGuide` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
