//! Report generation for GPA summaries
//!
//! Renders a calculator session (course rows, both averages, badges and
//! graduation progress) to Markdown or HTML through askama templates.

pub mod formats;

use crate::core::gpa::{base_points, QualitativeBand, WeightingPolicy, UNWEIGHTED_SCALE_MAX};
use crate::core::roster::{CreditProgress, GpaSession};
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Data context for report generation
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Report heading
    pub title: &'a str,
    /// Session being reported
    pub session: &'a GpaSession,
    /// Graduation credit requirement
    pub required_credits: f64,
    /// Decimal places shown for averages
    pub precision: usize,
}

/// One course row, pre-formatted for templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Course name, or "(unnamed)"
    pub name: String,
    /// Grade label
    pub grade: String,
    /// Category label
    pub category: String,
    /// Credit value
    pub credits: String,
    /// Base grade points
    pub points: String,
    /// Weighted grade points under the session policy
    pub weighted_points: String,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(
        title: &'a str,
        session: &'a GpaSession,
        required_credits: f64,
        precision: usize,
    ) -> Self {
        Self {
            title,
            session,
            required_credits,
            precision,
        }
    }

    /// Policy used for the weighted average
    #[must_use]
    pub const fn policy(&self) -> WeightingPolicy {
        self.session.policy()
    }

    /// Unweighted average at display precision
    #[must_use]
    pub fn unweighted(&self) -> String {
        format!(
            "{:.*}",
            self.precision,
            self.session.result().unweighted_average
        )
    }

    /// Weighted average at display precision
    #[must_use]
    pub fn weighted(&self) -> String {
        format!("{:.*}", self.precision, self.session.result().weighted_average)
    }

    /// Unweighted scale maximum at display precision
    #[must_use]
    pub fn unweighted_max(&self) -> String {
        format!("{:.*}", self.precision, UNWEIGHTED_SCALE_MAX)
    }

    /// Weighted scale maximum at display precision
    #[must_use]
    pub fn weighted_max(&self) -> String {
        format!("{:.*}", self.precision, self.policy().weighted_scale_max())
    }

    /// Badge for the unweighted average
    #[must_use]
    pub fn unweighted_status(&self) -> QualitativeBand {
        self.session.unweighted_status()
    }

    /// Badge for the weighted average
    #[must_use]
    pub fn weighted_status(&self) -> QualitativeBand {
        self.session.weighted_status()
    }

    /// Credits earned against the requirement
    #[must_use]
    pub fn progress(&self) -> CreditProgress {
        CreditProgress::new(self.session.result().total_credits, self.required_credits)
    }

    /// Course rows formatted for display
    #[must_use]
    pub fn rows(&self) -> Vec<ReportRow> {
        let policy = self.policy();
        self.session
            .courses()
            .entries()
            .iter()
            .map(|entry| ReportRow {
                name: if entry.name.trim().is_empty() {
                    "(unnamed)".to_string()
                } else {
                    entry.name.clone()
                },
                grade: entry.grade_label().to_string(),
                category: entry.category_label().to_string(),
                credits: format!("{:.1}", entry.credits),
                points: format!("{:.1}", base_points(entry.grade)),
                weighted_points: format!(
                    "{:.1}",
                    policy.weighted_points(entry.grade, entry.category)
                ),
            })
            .collect()
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        std::fs::write(output_path, content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{LetterGrade, WeightCategory};

    fn session() -> GpaSession {
        let mut session = GpaSession::default();
        session.add("English I", Some(LetterGrade::A), 1.0, Some(WeightCategory::Regular));
        session.add("", Some(LetterGrade::B), 0.5, Some(WeightCategory::Advanced));
        session
    }

    #[test]
    fn test_context_formatting() {
        let session = session();
        let ctx = ReportContext::new("Fall", &session, 22.0, 2);

        assert_eq!(ctx.unweighted(), "3.67");
        assert_eq!(ctx.weighted(), "4.00");
        assert_eq!(ctx.unweighted_max(), "4.00");
        assert_eq!(ctx.weighted_max(), "5.00");
        assert!((ctx.progress().remaining() - 20.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rows() {
        let session = session();
        let ctx = ReportContext::new("Fall", &session, 22.0, 3);
        let rows = ctx.rows();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "English I");
        assert_eq!(rows[0].points, "4.0");
        assert_eq!(rows[1].name, "(unnamed)");
        assert_eq!(rows[1].credits, "0.5");
        assert_eq!(rows[1].weighted_points, "4.0");
        assert_eq!(rows[1].category, "AP/IB/Dual Credit");
    }
}
