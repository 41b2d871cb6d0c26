//! Batch checking of planned assignments

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::model::{Fleet, PlannedAssignment};
use crate::service::assignment_validator::{AssignmentValidator, Violation};

/// Result of validating a single planned assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentCheckResult {
    pub plan: PlannedAssignment,
    pub violations: Vec<Violation>,
    pub is_valid: bool,
}

/// Resolve each plan's ids against the fleet and validate it.
/// Unknown ids count as absent entities.
pub fn check_assignments(
    plans: &[PlannedAssignment],
    fleet: &Fleet,
    validator: &AssignmentValidator,
) -> Vec<AssignmentCheckResult> {
    plans
        .iter()
        .map(|plan| {
            let driver = lookup(plan.driver.as_deref(), "driver", |id| fleet.driver(id));
            let truck = lookup(plan.truck.as_deref(), "truck", |id| fleet.truck(id));
            let route = lookup(plan.route.as_deref(), "route", |id| fleet.route(id));
            let violations = validator.validate(driver, truck, route);
            AssignmentCheckResult {
                plan: plan.clone(),
                is_valid: violations.is_empty(),
                violations,
            }
        })
        .collect()
}

fn lookup<'a, T>(id: Option<&str>, kind: &str, find: impl Fn(&str) -> Option<&'a T>) -> Option<&'a T> {
    let id = id?;
    let found = find(id);
    if found.is_none() {
        warn!(kind, id, "planned assignment references unknown entity");
    }
    found
}

pub fn generate_assignment_report(results: &[AssignmentCheckResult]) -> String {
    let total = results.len();
    let invalid_count = results.iter().filter(|r| !r.is_valid).count();
    let valid_count = total - invalid_count;

    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("             Assignment Check Report              \n");
    report.push_str("==================================================\n\n");
    report.push_str("[Summary]\n");
    report.push_str(&format!("  Total assignments:   {}\n", total));
    report.push_str(&format!("  Valid:               {}\n", valid_count));
    report.push_str(&format!("  Invalid:             {}\n", invalid_count));
    if total > 0 {
        let invalid_rate = (invalid_count as f64 / total as f64) * 100.0;
        report.push_str(&format!("  Invalid rate:        {:.1}%\n", invalid_rate));
    }
    report.push('\n');

    if invalid_count > 0 {
        report.push_str("[Invalid Assignments]\n");
        report.push_str("-".repeat(50).as_str());
        report.push('\n');
        for result in results.iter().filter(|r| !r.is_valid) {
            report.push_str(&format!("{}\n", result.plan.label()));
            for violation in &result.violations {
                report.push_str(&format!("  - {}\n", violation));
            }
        }
        report.push('\n');
    } else {
        report.push_str("[No Invalid Assignments]\n");
        report.push_str("  All planned assignments pass every rule.\n\n");
    }

    report.push_str("==================================================\n");
    report
}
