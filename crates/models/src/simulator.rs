//! Chronological prerequisite simulation.
//!
//! Walks the plan slot by slot in term order, carrying the set of course
//! codes committed in strictly earlier slots, and checks every planned
//! course's declared requirements against that ledger. Courses become
//! available as prerequisites only once their slot commits, so cyclic or
//! self-referencing declarations are never satisfiable without any explicit
//! cycle detection.

use crate::catalog::CatalogSnapshot;
use crate::issue::ValidationIssue;
use crate::plan::SlotMap;
use crate::requisite::{Requisite, partition};
use std::collections::HashSet;

/// Walk the plan chronologically and report unmet prerequisites as `error`
/// issues, plus `warning` issues for duplicate entries and courses the
/// catalog does not recognize.
///
/// Findings are collected, never short-circuited: one unmet requirement
/// must not suppress detection of the rest.
pub fn simulate(slots: &SlotMap<'_>, catalog: &CatalogSnapshot) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut prior: HashSet<&str> = HashSet::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for (slot, entries) in slots {
        // Build the current set first so concurrent-allowed requirements can
        // see everything genuinely scheduled in this slot.
        let mut current: HashSet<&str> = HashSet::new();
        let mut fresh = Vec::new();

        for entry in entries {
            let code = entry.course_code.as_str();

            // Only the first occurrence of a course participates; later
            // duplicates are flagged and otherwise ignored.
            if !seen.insert(code) {
                issues.push(ValidationIssue::warning(
                    Some(code),
                    slot,
                    format!("Duplicate entry: {code} already appears earlier in the plan"),
                ));
                continue;
            }

            current.insert(code);
            fresh.push(*entry);
        }

        for entry in &fresh {
            let code = entry.course_code.as_str();

            if catalog.course(code).is_none() {
                issues.push(ValidationIssue::warning(
                    Some(code),
                    slot,
                    format!("Course {code} not found in catalog; prerequisites not checked"),
                ));
                continue;
            }

            let (mandatory, groups) = partition(catalog.requisites(code));

            for requisite in mandatory {
                if !requisite.is_met(code, &prior, &current) {
                    issues.push(ValidationIssue::error(
                        code,
                        slot,
                        format!("Missing prerequisite: {}", requisite.target),
                    ));
                }
            }

            for (_, members) in groups {
                if !members.iter().any(|r| r.is_met(code, &prior, &current)) {
                    issues.push(ValidationIssue::error(
                        code,
                        slot,
                        format!("Missing prerequisite: {}", describe_group(&members)),
                    ));
                }
            }
        }

        // Commit the slot: its courses satisfy requirements only from the
        // next slot onward.
        prior.extend(current);
    }

    issues
}

/// Name every unmet member of an OR-group, e.g. "CS 2100 or CS 2110".
fn describe_group(members: &[&Requisite]) -> String {
    members
        .iter()
        .map(|r| r.target.as_str())
        .collect::<Vec<_>>()
        .join(" or ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CourseRecord;
    use crate::issue::Severity;
    use crate::plan::{Plan, PlannedEntry};
    use crate::term::TermCalendar;

    fn course(code: &str) -> CourseRecord {
        CourseRecord {
            code: code.to_string(),
            title: format!("{code} title"),
            credits: 3,
            department: code.split_whitespace().next().unwrap_or("CS").to_string(),
            level: 1000,
            offered_terms: vec!["Fall".to_string(), "Spring".to_string()],
        }
    }

    fn catalog(codes: &[&str]) -> CatalogSnapshot {
        let mut snapshot = CatalogSnapshot::new();
        for code in codes {
            snapshot.insert_course(course(code));
        }
        snapshot
    }

    fn run(plan: &Plan, catalog: &CatalogSnapshot) -> Vec<ValidationIssue> {
        let slots = plan.by_slot(&TermCalendar::default()).unwrap();
        simulate(&slots, catalog)
    }

    #[test]
    fn test_no_requirements_no_errors() {
        let catalog = catalog(&["CS 1110", "MATH 1310"]);
        let plan = Plan::new(
            vec![
                PlannedEntry::new("CS 1110", 1, "Fall"),
                PlannedEntry::new("MATH 1310", 1, "Spring"),
            ],
            2024,
        );

        assert!(run(&plan, &catalog).is_empty());
    }

    #[test]
    fn test_prior_slot_satisfies() {
        let mut catalog = catalog(&["CS 1110", "CS 2100"]);
        catalog.insert_requisite("CS 2100", Requisite::required("CS 1110"));

        let plan = Plan::new(
            vec![
                PlannedEntry::new("CS 1110", 1, "Fall"),
                PlannedEntry::new("CS 2100", 1, "Spring"),
            ],
            2024,
        );

        assert!(run(&plan, &catalog).is_empty());
    }

    #[test]
    fn test_same_slot_not_satisfied_without_concurrency() {
        let mut catalog = catalog(&["CS 1110", "CS 2100"]);
        catalog.insert_requisite("CS 2100", Requisite::required("CS 1110"));

        let plan = Plan::new(
            vec![
                PlannedEntry::new("CS 1110", 1, "Fall"),
                PlannedEntry::new("CS 2100", 1, "Fall"),
            ],
            2024,
        );

        let issues = run(&plan, &catalog);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].course_code.as_deref(), Some("CS 2100"));
        assert_eq!(issues[0].message, "Missing prerequisite: CS 1110");
    }

    #[test]
    fn test_concurrent_flag_allows_same_slot() {
        let mut catalog = catalog(&["CS 1110", "CS 2100"]);
        catalog.insert_requisite("CS 2100", Requisite::required("CS 1110").concurrent());

        let plan = Plan::new(
            vec![
                PlannedEntry::new("CS 1110", 1, "Fall"),
                PlannedEntry::new("CS 2100", 1, "Fall"),
            ],
            2024,
        );

        assert!(run(&plan, &catalog).is_empty());
    }

    #[test]
    fn test_concurrent_flag_does_not_allow_later_slot() {
        let mut catalog = catalog(&["CS 1110", "CS 2100"]);
        catalog.insert_requisite("CS 2100", Requisite::required("CS 1110").concurrent());

        let plan = Plan::new(
            vec![
                PlannedEntry::new("CS 2100", 1, "Fall"),
                PlannedEntry::new("CS 1110", 1, "Spring"),
            ],
            2024,
        );

        let issues = run(&plan, &catalog);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "Missing prerequisite: CS 1110");
    }

    #[test]
    fn test_or_group_satisfied_by_any_member() {
        let mut catalog = catalog(&["MATH 1320", "APMA 1110", "CS 3100"]);
        catalog.insert_requisite("CS 3100", Requisite::grouped("MATH 1320", "calc"));
        catalog.insert_requisite("CS 3100", Requisite::grouped("APMA 1110", "calc"));

        let plan = Plan::new(
            vec![
                PlannedEntry::new("MATH 1320", 1, "Fall"),
                PlannedEntry::new("CS 3100", 1, "Spring"),
            ],
            2024,
        );

        assert!(run(&plan, &catalog).is_empty());
    }

    #[test]
    fn test_or_group_unmet_names_all_members() {
        let mut catalog = catalog(&["CS 3100"]);
        catalog.insert_requisite("CS 3100", Requisite::grouped("MATH 1320", "calc"));
        catalog.insert_requisite("CS 3100", Requisite::grouped("APMA 1110", "calc"));

        let plan = Plan::new(vec![PlannedEntry::new("CS 3100", 1, "Fall")], 2024);

        let issues = run(&plan, &catalog);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "Missing prerequisite: MATH 1320 or APMA 1110");
    }

    #[test]
    fn test_group_and_mandatory_are_independent() {
        let mut catalog = catalog(&["CS 2100", "MATH 1320", "CS 3100"]);
        catalog.insert_requisite("CS 3100", Requisite::required("CS 2100"));
        catalog.insert_requisite("CS 3100", Requisite::grouped("MATH 1320", "calc"));
        catalog.insert_requisite("CS 3100", Requisite::grouped("APMA 1110", "calc"));

        // Group satisfied, mandatory not: exactly one error.
        let plan = Plan::new(
            vec![
                PlannedEntry::new("MATH 1320", 1, "Fall"),
                PlannedEntry::new("CS 3100", 1, "Spring"),
            ],
            2024,
        );

        let issues = run(&plan, &catalog);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "Missing prerequisite: CS 2100");
    }

    #[test]
    fn test_unknown_course_warns_and_skips_checks() {
        let catalog = catalog(&["CS 1110"]);
        let plan = Plan::new(vec![PlannedEntry::new("XFER 100", 1, "Fall")], 2024);

        let issues = run(&plan, &catalog);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(issues[0].message.contains("not found in catalog"));
    }

    #[test]
    fn test_unknown_course_still_counts_as_prior() {
        // A planned-but-unrecognized course (e.g. transfer credit) still
        // satisfies later requirements that name it.
        let mut catalog = catalog(&["CS 2100"]);
        catalog.insert_requisite("CS 2100", Requisite::required("XFER 100"));

        let plan = Plan::new(
            vec![
                PlannedEntry::new("XFER 100", 1, "Fall"),
                PlannedEntry::new("CS 2100", 1, "Spring"),
            ],
            2024,
        );

        let issues = run(&plan, &catalog);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_duplicate_entries_warn_once_each() {
        let catalog = catalog(&["CS 1110"]);
        let plan = Plan::new(
            vec![
                PlannedEntry::new("CS 1110", 1, "Fall"),
                PlannedEntry::new("CS 1110", 1, "Spring"),
                PlannedEntry::new("CS 1110", 2, "Fall"),
            ],
            2024,
        );

        let issues = run(&plan, &catalog);
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.severity == Severity::Warning));
        assert_eq!(issues[0].year, 1);
        assert_eq!(issues[0].term, "Spring");
        assert_eq!(issues[1].year, 2);
        assert_eq!(issues[1].term, "Fall");
    }

    #[test]
    fn test_duplicate_occurrence_is_inert() {
        // The Fall occurrence of CS 1110 satisfies the requirement; its
        // Spring duplicate only warns and is otherwise ignored.
        let mut catalog = catalog(&["CS 1110", "CS 2100"]);
        catalog.insert_requisite("CS 2100", Requisite::required("CS 1110"));

        let plan = Plan::new(
            vec![
                PlannedEntry::new("CS 1110", 1, "Fall"),
                PlannedEntry::new("CS 2100", 1, "Spring"),
                PlannedEntry::new("CS 1110", 1, "Spring"),
            ],
            2024,
        );

        let issues = run(&plan, &catalog);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(issues[0].message.starts_with("Duplicate entry"));
    }

    #[test]
    fn test_self_requirement_never_satisfiable() {
        let mut catalog = catalog(&["CS 2100"]);
        catalog.insert_requisite("CS 2100", Requisite::required("CS 2100").concurrent());

        let plan = Plan::new(vec![PlannedEntry::new("CS 2100", 1, "Fall")], 2024);

        let issues = run(&plan, &catalog);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].message, "Missing prerequisite: CS 2100");
    }

    #[test]
    fn test_mutual_cycle_unsatisfiable_in_same_slot() {
        let mut catalog = catalog(&["CS 4000", "CS 4010"]);
        catalog.insert_requisite("CS 4000", Requisite::required("CS 4010"));
        catalog.insert_requisite("CS 4010", Requisite::required("CS 4000"));

        let plan = Plan::new(
            vec![
                PlannedEntry::new("CS 4000", 1, "Fall"),
                PlannedEntry::new("CS 4010", 1, "Fall"),
            ],
            2024,
        );

        let issues = run(&plan, &catalog);
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.severity == Severity::Error));
    }
}
