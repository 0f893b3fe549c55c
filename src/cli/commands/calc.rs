//! Calc command handler

use gpa_guide::config::Config;
use gpa_guide::gpa::{AggregateResult, QualitativeBand, WeightingPolicy, UNWEIGHTED_SCALE_MAX};
use gpa_guide::loader::load_session;
use gpa_guide::roster::{CreditProgress, GpaSession};
use gpa_guide::{error, info, verbose};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Machine-readable result for one course list
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CalcSummary {
    file: String,
    policy: WeightingPolicy,
    #[serde(flatten)]
    result: AggregateResult,
    unweighted_status: QualitativeBand,
    weighted_status: QualitativeBand,
    required_credits: f64,
    remaining_credits: f64,
}

impl CalcSummary {
    fn new(file: &Path, session: &GpaSession, required_credits: f64) -> Self {
        let result = session.result();
        Self {
            file: file.display().to_string(),
            policy: session.policy(),
            result,
            unweighted_status: session.unweighted_status(),
            weighted_status: session.weighted_status(),
            required_credits,
            remaining_credits: CreditProgress::new(result.total_credits, required_credits)
                .remaining(),
        }
    }
}

/// Run the calc command for one or more input files.
///
/// Files that fail to load are reported and skipped. Returns false if any
/// file failed.
pub fn run(input_files: &[PathBuf], json: bool, config: &Config) -> bool {
    if input_files.is_empty() {
        eprintln!("✗ No input files provided.");
        return false;
    }

    let policy = config.policy();
    let required = config.graduation_credits();
    let mut summaries = Vec::with_capacity(input_files.len());
    let mut all_ok = true;

    for input_file in input_files {
        match load_session(input_file, policy, config.grading.strict) {
            Ok(session) => {
                info!(
                    "Loaded {} course(s) from {}",
                    session.courses().len(),
                    input_file.display()
                );
                if !json {
                    print_session(input_file, &session, config.precision(), required);
                }
                summaries.push(CalcSummary::new(input_file, &session, required));
            }
            Err(e) => {
                error!("Failed to load {}: {e}", input_file.display());
                eprintln!("✗ Failed to load {}: {e}", input_file.display());
                all_ok = false;
            }
        }
    }

    if json {
        match serde_json::to_string_pretty(&summaries) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("✗ Failed to serialize results: {e}");
                return false;
            }
        }
    }

    all_ok
}

fn print_session(input_file: &Path, session: &GpaSession, precision: usize, required: f64) {
    let result = session.result();
    let policy = session.policy();

    println!("\n=== {} ===", input_file.display());
    verbose!("Policy: {policy} ({})", policy.describe());

    for entry in session.courses().entries() {
        verbose!(
            "  {:<28} {:<3} {:>4.1} cr  {}",
            entry.name,
            entry.grade_label(),
            entry.credits,
            entry.category_label()
        );
    }

    if result.is_empty() {
        println!("No credit-bearing courses entered.");
    }
    println!(
        "Unweighted GPA: {:.*} / {:.1}  [{}]",
        precision,
        result.unweighted_average,
        UNWEIGHTED_SCALE_MAX,
        session.unweighted_status().label()
    );
    println!(
        "Weighted GPA:   {:.*} / {:.1}  [{}]",
        precision,
        result.weighted_average,
        policy.weighted_scale_max(),
        session.weighted_status().label()
    );
    println!(
        "Courses: {}   Credits: {:.1}",
        result.course_count, result.total_credits
    );
    println!(
        "{}",
        CreditProgress::new(result.total_credits, required).summary()
    );
}
