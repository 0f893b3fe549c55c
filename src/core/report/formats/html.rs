//! HTML report generator
//!
//! Produces a single self-contained page with inline CSS. Course names are
//! HTML-escaped by the template engine.

use crate::core::report::formats::ReportView;
use crate::core::report::{ReportContext, ReportGenerator};
use askama::Template;
use std::error::Error;

#[derive(Template)]
#[template(path = "gpa_report.html")]
struct HtmlTemplate {
    view: ReportView,
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let template = HtmlTemplate {
            view: ReportView::from_context(ctx),
        };
        Ok(template.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{LetterGrade, WeightCategory};
    use crate::core::roster::GpaSession;

    #[test]
    fn test_render_escapes_names() {
        let mut session = GpaSession::default();
        session.add(
            "Art <Studio>",
            Some(LetterGrade::A),
            1.0,
            Some(WeightCategory::Regular),
        );
        let ctx = ReportContext::new("Report", &session, 22.0, 3);

        let output = HtmlReporter::new().render(&ctx).expect("render");
        assert!(output.starts_with("<!DOCTYPE html>"));
        assert!(output.contains("Art &lt;Studio&gt;"));
        assert!(!output.contains("Art <Studio>"));
        assert!(output.contains("4.000"));
        assert!(output.contains("Excellent"));
    }
}
