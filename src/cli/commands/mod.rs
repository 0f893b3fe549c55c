//! CLI command handlers for `GpaGuide`.
//!
//! Each subcommand is implemented in its own submodule.

pub mod calc;
pub mod config;
pub mod report;
pub mod scale;
