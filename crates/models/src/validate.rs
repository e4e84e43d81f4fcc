//! Entry point for one plan validation run.
//!
//! Malformed input (empty course code, year below 1, unknown term name)
//! rejects the call before any checking starts. Everything else, from unmet
//! prerequisites to workload, is a semantic finding collected into the
//! report: "the plan is bad" is a normal answer, not an error.

use crate::catalog::CatalogSnapshot;
use crate::config::ValidationConfig;
use crate::issue::ValidationReport;
use crate::plan::{Plan, PlanError};
use crate::term::TermCalendar;
use crate::{simulator, workload};

/// Validate a plan against a catalog snapshot.
///
/// Pure function of its inputs: the catalog is read-only, the plan is read
/// once, and the report is a fresh value. Running twice on unchanged inputs
/// yields an identical report, order included.
pub fn validate_plan(
    plan: &Plan,
    catalog: &CatalogSnapshot,
    config: &ValidationConfig,
) -> Result<ValidationReport, PlanError> {
    check_input(plan, &config.calendar)?;

    let slots = plan.by_slot(&config.calendar)?;

    let mut issues = simulator::simulate(&slots, catalog);
    issues.extend(workload::check(&slots, catalog, config));

    Ok(ValidationReport::from_issues(issues))
}

/// Reject malformed entries before simulation begins. Input problems are
/// never silently coerced into semantic findings.
fn check_input(plan: &Plan, calendar: &TermCalendar) -> Result<(), PlanError> {
    for entry in &plan.entries {
        if entry.course_code.trim().is_empty() {
            return Err(PlanError::EmptyCourseCode {
                year: entry.year,
                term: entry.term.clone(),
            });
        }

        if entry.year < 1 {
            return Err(PlanError::InvalidYear(entry.year));
        }

        calendar.index_of(&entry.term)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CourseRecord;
    use crate::issue::Severity;
    use crate::plan::PlannedEntry;
    use crate::requisite::Requisite;
    use crate::term::TermError;

    fn course(code: &str, credits: u32) -> CourseRecord {
        CourseRecord {
            code: code.to_string(),
            title: format!("{code} title"),
            credits,
            department: code.split_whitespace().next().unwrap_or("CS").to_string(),
            level: 2000,
            offered_terms: vec!["Fall".to_string(), "Spring".to_string()],
        }
    }

    /// The sample catalog the original dataset ships: intro CS and calculus
    /// chains.
    fn sample_catalog() -> CatalogSnapshot {
        let mut snapshot = CatalogSnapshot::new();

        for code in [
            "CS 1110", "CS 2100", "CS 2120", "CS 3100", "CS 4750", "CS 4710",
        ] {
            snapshot.insert_course(course(code, 3));
        }
        snapshot.insert_course(course("MATH 1310", 4));
        snapshot.insert_course(course("MATH 1320", 4));

        snapshot.insert_requisite("CS 2100", Requisite::required("CS 1110"));
        snapshot.insert_requisite("CS 2120", Requisite::required("CS 2100"));
        snapshot.insert_requisite("CS 3100", Requisite::required("CS 2100"));
        snapshot.insert_requisite("CS 3100", Requisite::required("CS 2120"));
        snapshot.insert_requisite("CS 4750", Requisite::required("CS 2120"));
        snapshot.insert_requisite("CS 4710", Requisite::required("CS 2120"));
        snapshot.insert_requisite("MATH 1320", Requisite::required("MATH 1310"));

        snapshot
    }

    fn validate(plan: &Plan) -> ValidationReport {
        validate_plan(plan, &sample_catalog(), &ValidationConfig::default()).unwrap()
    }

    #[test]
    fn test_empty_plan_is_valid() {
        let report = validate(&Plan::default());
        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_missing_prerequisite_reported() {
        // CS 4750 requires CS 2120, which the plan never schedules.
        let plan = Plan::new(vec![PlannedEntry::new("CS 4750", 1, "Fall")], 2024);

        let report = validate(&plan);
        assert!(!report.is_valid());
        assert_eq!(report.errors.len(), 1);

        let issue = &report.errors[0];
        assert_eq!(issue.course_code.as_deref(), Some("CS 4750"));
        assert_eq!(issue.year, 1);
        assert_eq!(issue.term, "Fall");
        assert_eq!(issue.message, "Missing prerequisite: CS 2120");
    }

    #[test]
    fn test_same_slot_prerequisite_still_missing() {
        // Placing CS 2120 alongside CS 4750 does not help: the requirement
        // carries no concurrency flag.
        let plan = Plan::new(
            vec![
                PlannedEntry::new("CS 4750", 1, "Fall"),
                PlannedEntry::new("CS 2120", 1, "Fall"),
            ],
            2024,
        );

        let report = validate(&plan);
        let messages: Vec<_> = report.errors.iter().map(|i| i.message.as_str()).collect();
        assert!(messages.contains(&"Missing prerequisite: CS 2120"));
    }

    #[test]
    fn test_strictly_earlier_slot_clears_error() {
        let plan = Plan::new(
            vec![
                PlannedEntry::new("CS 2120", 1, "Fall"),
                PlannedEntry::new("CS 4750", 2, "Fall"),
            ],
            2024,
        );

        let report = validate(&plan);
        assert!(
            report
                .errors
                .iter()
                .all(|i| i.course_code.as_deref() != Some("CS 4750"))
        );
    }

    #[test]
    fn test_all_findings_collected() {
        // Two independent violations in one plan: neither suppresses the
        // other.
        let plan = Plan::new(
            vec![
                PlannedEntry::new("CS 4750", 1, "Fall"),
                PlannedEntry::new("CS 4710", 1, "Fall"),
            ],
            2024,
        );

        let report = validate(&plan);
        assert_eq!(report.errors.len(), 2);
    }

    #[test]
    fn test_input_error_rejects_whole_call() {
        let catalog = sample_catalog();
        let config = ValidationConfig::default();

        let empty_code = Plan::new(vec![PlannedEntry::new("  ", 1, "Fall")], 2024);
        assert!(matches!(
            validate_plan(&empty_code, &catalog, &config),
            Err(PlanError::EmptyCourseCode { .. })
        ));

        let bad_year = Plan::new(vec![PlannedEntry::new("CS 1110", 0, "Fall")], 2024);
        assert_eq!(
            validate_plan(&bad_year, &catalog, &config),
            Err(PlanError::InvalidYear(0))
        );

        let bad_term = Plan::new(vec![PlannedEntry::new("CS 1110", 1, "Winter")], 2024);
        assert_eq!(
            validate_plan(&bad_term, &catalog, &config),
            Err(PlanError::Term(TermError::InvalidTermName(
                "Winter".to_string()
            )))
        );
    }

    #[test]
    fn test_input_checked_before_any_findings() {
        // A malformed entry late in the list still fails the call, even
        // though earlier entries would have produced findings.
        let plan = Plan::new(
            vec![
                PlannedEntry::new("CS 4750", 1, "Fall"),
                PlannedEntry::new("CS 1110", -2, "Fall"),
            ],
            2024,
        );

        assert_eq!(
            validate_plan(&plan, &sample_catalog(), &ValidationConfig::default()),
            Err(PlanError::InvalidYear(-2))
        );
    }

    #[test]
    fn test_duplicate_entry_warns_only_later_occurrences() {
        let plan = Plan::new(
            vec![
                PlannedEntry::new("CS 1110", 1, "Fall"),
                PlannedEntry::new("CS 1110", 2, "Fall"),
            ],
            2024,
        );

        let report = validate(&plan);
        let duplicates: Vec<_> = report
            .warnings
            .iter()
            .filter(|i| i.message.starts_with("Duplicate entry"))
            .collect();

        assert_eq!(duplicates.len(), 1);
        assert_eq!(duplicates[0].year, 2);
    }

    #[test]
    fn test_workload_and_prerequisites_merge() {
        // One slot with a single course: a prerequisite error from the
        // simulator plus a low-load warning from the workload checker.
        let plan = Plan::new(vec![PlannedEntry::new("CS 4750", 1, "Fall")], 2024);

        let report = validate(&plan);
        assert_eq!(report.errors.len(), 1);
        assert!(
            report
                .warnings
                .iter()
                .any(|i| i.message.starts_with("Low credit load"))
        );
    }

    #[test]
    fn test_workload_issue_has_no_course_code() {
        let plan = Plan::new(vec![PlannedEntry::new("CS 1110", 1, "Fall")], 2024);

        let report = validate(&plan);
        let workload: Vec<_> = report
            .warnings
            .iter()
            .filter(|i| i.message.contains("credit load"))
            .collect();
        assert_eq!(workload.len(), 1);
        assert_eq!(workload[0].course_code, None);
        assert_eq!(workload[0].severity, Severity::Warning);
    }

    #[test]
    fn test_idempotent_over_unchanged_inputs() {
        let catalog = sample_catalog();
        let config = ValidationConfig::default();
        let plan = Plan::new(
            vec![
                PlannedEntry::new("CS 4750", 1, "Fall"),
                PlannedEntry::new("CS 1110", 1, "Fall"),
                PlannedEntry::new("CS 1110", 1, "Spring"),
                PlannedEntry::new("XFER 100", 2, "Summer"),
            ],
            2024,
        );

        let first = validate_plan(&plan, &catalog, &config).unwrap();
        let second = validate_plan(&plan, &catalog, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_full_four_year_plan_is_clean() {
        let mut catalog = sample_catalog();
        // Pad each term to a full load so workload stays quiet.
        for code in ["ENGL 1010", "ENGL 1020", "HIST 2001", "HIST 2002"] {
            catalog.insert_course(course(code, 9));
        }

        let plan = Plan::new(
            vec![
                PlannedEntry::new("CS 1110", 1, "Fall"),
                PlannedEntry::new("MATH 1310", 1, "Fall"),
                PlannedEntry::new("ENGL 1010", 1, "Fall"),
                PlannedEntry::new("CS 2100", 1, "Spring"),
                PlannedEntry::new("MATH 1320", 1, "Spring"),
                PlannedEntry::new("ENGL 1020", 1, "Spring"),
                PlannedEntry::new("CS 2120", 2, "Fall"),
                PlannedEntry::new("HIST 2001", 2, "Fall"),
                PlannedEntry::new("CS 1110", 2, "Fall"),
                PlannedEntry::new("CS 3100", 2, "Spring"),
                PlannedEntry::new("CS 4750", 2, "Spring"),
                PlannedEntry::new("HIST 2002", 2, "Spring"),
            ],
            2024,
        );

        let report = validate_plan(&plan, &catalog, &ValidationConfig::default()).unwrap();

        // The only finding is the duplicate CS 1110 in year 2.
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].message.starts_with("Duplicate entry"));
    }
}
