//! Report format implementations
//!
//! Provides exporters for the supported report formats: Markdown and HTML.

pub mod html;
pub mod markdown;

pub use html::HtmlReporter;
pub use markdown::MarkdownReporter;

use crate::core::report::{ReportContext, ReportRow};
use std::fmt;
use std::str::FromStr;

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Markdown tables, readable in any text viewer
    Markdown,
    /// Self-contained HTML page
    Html,
}

impl ReportFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Html => "html",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "md" | "markdown" => Ok(Self::Markdown),
            "html" | "htm" => Ok(Self::Html),
            _ => Err(format!("Unknown report format: {s}")),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markdown => write!(f, "markdown"),
            Self::Html => write!(f, "html"),
        }
    }
}

/// Flattened, template-ready view of a [`ReportContext`]
#[derive(Debug, Clone)]
pub struct ReportView {
    /// Report heading
    pub title: String,
    /// Policy name
    pub policy: String,
    /// Policy description
    pub policy_description: String,
    /// Unweighted average
    pub unweighted: String,
    /// Weighted average
    pub weighted: String,
    /// Unweighted scale maximum
    pub unweighted_max: String,
    /// Weighted scale maximum
    pub weighted_max: String,
    /// Unweighted badge label
    pub unweighted_status: &'static str,
    /// Weighted badge label
    pub weighted_status: &'static str,
    /// Credits earned
    pub total_credits: String,
    /// Credits required to graduate
    pub required_credits: String,
    /// Graduation progress percentage
    pub percent: String,
    /// Graduation progress sentence
    pub progress: String,
    /// Course rows
    pub rows: Vec<ReportRow>,
}

impl ReportView {
    /// Flatten a context into display strings
    #[must_use]
    pub fn from_context(ctx: &ReportContext) -> Self {
        let progress = ctx.progress();
        let policy = ctx.policy();
        Self {
            title: ctx.title.to_string(),
            policy: policy.to_string(),
            policy_description: policy.describe().to_string(),
            unweighted: ctx.unweighted(),
            weighted: ctx.weighted(),
            unweighted_max: ctx.unweighted_max(),
            weighted_max: ctx.weighted_max(),
            unweighted_status: ctx.unweighted_status().label(),
            weighted_status: ctx.weighted_status().label(),
            total_credits: format!("{}", progress.earned),
            required_credits: format!("{}", progress.required),
            percent: format!("{:.0}", progress.percent()),
            progress: progress.summary(),
            rows: ctx.rows(),
        }
    }
}
