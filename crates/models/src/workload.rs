//! Per-term credit-load check, independent of prerequisite logic.

use crate::catalog::CatalogSnapshot;
use crate::config::ValidationConfig;
use crate::issue::ValidationIssue;
use crate::plan::SlotMap;

/// Sum each slot's credit weights and flag totals outside the configured
/// inclusive range. Always a `warning`: valid reasons exist to deviate
/// (e.g. a light final semester), so workload never hard-fails a plan.
pub fn check(
    slots: &SlotMap<'_>,
    catalog: &CatalogSnapshot,
    config: &ValidationConfig,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for (slot, entries) in slots {
        let total: u32 = entries
            .iter()
            .map(|entry| catalog.credits_or(&entry.course_code, config.default_credits))
            .sum();

        if total < config.min_credits {
            issues.push(ValidationIssue::warning(
                None,
                slot,
                format!(
                    "Low credit load: {total} credits (minimum {} recommended)",
                    config.min_credits
                ),
            ));
        } else if total > config.max_credits {
            issues.push(ValidationIssue::warning(
                None,
                slot,
                format!(
                    "High credit load: {total} credits (maximum {} recommended)",
                    config.max_credits
                ),
            ));
        }
    }

    issues
}
