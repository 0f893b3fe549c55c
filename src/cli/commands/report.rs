//! Report command handler
//!
//! Loads a course list and renders it to Markdown or HTML.

use gpa_guide::config::Config;
use gpa_guide::loader::load_session;
use gpa_guide::report::{
    HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
};
use gpa_guide::roster::GpaSession;
use gpa_guide::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the report command. Returns false if the report was not written.
///
/// # Arguments
/// * `input_file` - Path to the course list CSV
/// * `output_file` - Optional output path
/// * `format_str` - Report format (markdown, html)
/// * `title` - Optional heading; defaults to the input file stem
/// * `config` - Configuration supplying policy, precision and output directory
pub fn run(
    input_file: &Path,
    output_file: Option<&Path>,
    format_str: &str,
    title: Option<&str>,
    config: &Config,
) -> bool {
    match generate_report(input_file, output_file, format_str, title, config) {
        Ok(path) => {
            println!("✓ Report generated: {}", path.display());
            info!("Report exported to: {}", path.display());
            true
        }
        Err(err) => {
            error!(
                "Report generation failed for {}: {err}",
                input_file.display()
            );
            eprintln!("{err}");
            false
        }
    }
}

fn file_stem(input_file: &Path) -> &str {
    input_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("courses")
}

/// Default output location: `<reports_dir>/<stem>_gpa.<ext>`
fn default_output_path(
    input_file: &Path,
    format: ReportFormat,
    config: &Config,
) -> Result<PathBuf, String> {
    let reports_dir = PathBuf::from(&config.paths.reports_dir);
    std::fs::create_dir_all(&reports_dir).map_err(|e| {
        format!(
            "✗ Failed to create reports directory {}: {e}",
            reports_dir.display()
        )
    })?;
    Ok(reports_dir.join(format!(
        "{}_gpa.{}",
        file_stem(input_file),
        format.extension()
    )))
}

fn write_report(
    session: &GpaSession,
    title: &str,
    format: ReportFormat,
    output_path: &Path,
    config: &Config,
) -> Result<(), String> {
    let ctx = ReportContext::new(
        title,
        session,
        config.graduation_credits(),
        config.precision(),
    );

    match format {
        ReportFormat::Markdown => MarkdownReporter::new()
            .generate(&ctx, output_path)
            .map_err(|e| format!("✗ Failed to generate Markdown report: {e}")),
        ReportFormat::Html => HtmlReporter::new()
            .generate(&ctx, output_path)
            .map_err(|e| format!("✗ Failed to generate HTML report: {e}")),
    }
}

fn generate_report(
    input_file: &Path,
    output_file: Option<&Path>,
    format_str: &str,
    title: Option<&str>,
    config: &Config,
) -> Result<PathBuf, String> {
    let format =
        ReportFormat::from_str(format_str).map_err(|e| format!("✗ {e}. Use: markdown or html"))?;

    let session = load_session(input_file, config.policy(), config.grading.strict)
        .map_err(|e| format!("✗ Failed to load {}: {e}", input_file.display()))?;
    info!("Course list loaded: {}", input_file.display());

    let output_path = match output_file {
        Some(path) => path.to_path_buf(),
        None => default_output_path(input_file, format, config)?,
    };

    let title = title.unwrap_or_else(|| file_stem(input_file));
    write_report(&session, title, format, &output_path, config)?;

    Ok(output_path)
}
