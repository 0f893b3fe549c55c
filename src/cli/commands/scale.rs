//! Scale command handler

use gpa_guide::gpa::{WeightingPolicy, UNWEIGHTED_SCALE_MAX};
use gpa_guide::models::{LetterGrade, WeightCategory};

/// Print the letter-grade scale and the bonus table for one or all policies.
pub fn run(only: Option<WeightingPolicy>) {
    println!("\n=== Grade Scale (max {UNWEIGHTED_SCALE_MAX:.1}) ===\n");
    for grade in LetterGrade::ALL {
        println!("  {:<3} {:.1}", grade.label(), grade.points());
    }

    let policies = only.map_or_else(|| WeightingPolicy::ALL.to_vec(), |policy| vec![policy]);
    for policy in policies {
        print_policy(policy);
    }
}

fn print_policy(policy: WeightingPolicy) {
    println!(
        "\n=== {policy} (max {:.1}) ===\n{}\n",
        policy.weighted_scale_max(),
        policy.describe()
    );
    for category in WeightCategory::ALL {
        let cap = policy
            .cap(Some(category))
            .map_or_else(|| "-".to_string(), |cap| format!("{cap:.1}"));
        println!(
            "  {:<18} bonus +{:.1}  cap {cap}  (A = {:.1})",
            category.label(),
            policy.bonus(Some(category)),
            policy.weighted_points(Some(LetterGrade::A), Some(category))
        );
    }
}
